//! Store diagnostics: connectivity probe, raw collection listing and sample data seeding.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::country::{CountryFieldsDto, GeopointDto},
    server::{
        data::document::DocumentRepository,
        error::{AppError, StoreContext},
        model::{country::Country, document::Document, PageParams},
        service::{country::COUNTRIES, malformed, to_json},
    },
};

/// Outcome of a store connectivity probe.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreHealth {
    /// Failure message when the probe did not succeed.
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl StoreHealth {
    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Probes the store. A failed probe is reported in the result, not as an error.
    pub async fn health(&self) -> StoreHealth {
        let repo = DocumentRepository::new(self.db);

        let error = match repo.ping().await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Store health check failed: {}", e);
                Some(e.to_string())
            }
        };

        StoreHealth {
            error,
            checked_at: Utc::now(),
        }
    }

    /// Lists the raw documents of any collection.
    pub async fn list_collection(
        &self,
        collection: &str,
        page: PageParams,
    ) -> Result<Vec<Document>, AppError> {
        let repo = DocumentRepository::new(self.db);

        repo.find_all(collection, &[], page.limit, page.start_after.as_deref())
            .await
            .context(format!("Error fetching collection {}", collection))
    }

    /// Writes the sample countries, replacing any stored under the same ids.
    pub async fn seed_countries(&self) -> Result<Vec<Country>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let mut countries = Vec::new();
        for (id, fields) in sample_countries() {
            let document = repo
                .create_with_id(COUNTRIES, id, to_json(&fields)?)
                .await
                .context("Error seeding countries")?;

            let country = Country::from_document(document)
                .map_err(|e| malformed("country", id, e))?;
            countries.push(country);
        }

        tracing::info!("Seeded {} countries", countries.len());

        Ok(countries)
    }
}

/// Sample country with the descriptive fields shared by every seed entry filled in.
fn sample_country(
    name: &str,
    capital: &str,
    continent: &str,
    flag: &str,
    geographical_division: &str,
    geopoint: GeopointDto,
    population: i64,
) -> CountryFieldsDto {
    CountryFieldsDto {
        name: name.to_string(),
        continents: vec![continent.to_string()],
        flags: vec![format!("https://flagcdn.com/{}.svg", flag)],
        capital: capital.to_string(),
        geopoint: Some(geopoint),
        geographical_division: geographical_division.to_string(),
        region: Some("Americas".to_string()),
        population: Some(population),
        ..Default::default()
    }
}

fn sample_countries() -> Vec<(&'static str, CountryFieldsDto)> {
    vec![
        (
            "cl",
            sample_country(
                "Chile",
                "Santiago",
                "South America",
                "cl",
                "16 regions",
                GeopointDto {
                    latitude: -33.4489,
                    longitude: -70.6693,
                },
                19_116_201,
            ),
        ),
        (
            "ar",
            sample_country(
                "Argentina",
                "Buenos Aires",
                "South America",
                "ar",
                "23 provinces",
                GeopointDto {
                    latitude: -34.6037,
                    longitude: -58.3816,
                },
                45_195_774,
            ),
        ),
        (
            "us",
            sample_country(
                "United States",
                "Washington D.C.",
                "North America",
                "us",
                "50 states",
                GeopointDto {
                    latitude: 38.9072,
                    longitude: -77.0369,
                },
                331_002_651,
            ),
        ),
    ]
}

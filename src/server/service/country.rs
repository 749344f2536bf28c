use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository,
    error::{AppError, StoreContext},
    model::{
        country::{Country, CreateCountryParams, UpdateCountryParams},
        document::{DeletedDocument, Document, Filter},
        PageParams, MAX_LIMIT,
    },
    service::{malformed, to_json},
};

/// Collection holding country documents.
pub const COUNTRIES: &str = "countries";

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the country stored under the client-chosen id.
    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .create_with_id(COUNTRIES, &params.id, to_json(&params.fields)?)
            .await
            .context("Failed to create country")?;

        tracing::info!("Created country {}", params.id);

        read_country(document)
    }

    /// Lists countries in id order.
    pub async fn find_all(&self, page: PageParams) -> Result<Vec<Country>, AppError> {
        self.find_where(&[], page, "Failed to fetch countries").await
    }

    /// Lists countries whose `region` equals `region`.
    pub async fn find_by_region(
        &self,
        region: &str,
        page: PageParams,
    ) -> Result<Vec<Country>, AppError> {
        self.find_where(
            &[Filter::eq("region", region)],
            page,
            "Failed to fetch countries by region",
        )
        .await
    }

    /// Lists countries whose `continents` array contains `continent`.
    ///
    /// # Returns
    /// - `Ok(Vec<Country>)` - Matching countries, possibly none
    /// - `Err(AppError::BadRequest)` - Blank continent
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn find_by_continent(&self, continent: &str) -> Result<Vec<Country>, AppError> {
        if continent.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Please provide the continent name".to_string(),
            ));
        }

        let page = PageParams {
            limit: MAX_LIMIT,
            start_after: None,
        };

        self.find_where(
            &[Filter::array_contains("continents", continent)],
            page,
            "Failed to fetch countries by continent",
        )
        .await
    }

    /// Gets a country by id.
    ///
    /// # Returns
    /// - `Ok(Country)` - The country
    /// - `Err(AppError::NotFound)` - No country with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn find_one(&self, id: &str) -> Result<Country, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .find_one(COUNTRIES, id)
            .await
            .context("Failed to fetch country")?
            .ok_or_else(not_found)?;

        read_country(document)
    }

    /// Writes the fields present in the update; others keep their stored values.
    pub async fn update(&self, id: &str, params: UpdateCountryParams) -> Result<Country, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .update(COUNTRIES, id, params.patch)
            .await
            .context("Failed to update country")?
            .ok_or_else(not_found)?;

        tracing::debug!("Updated country {}", id);

        read_country(document)
    }

    pub async fn remove(&self, id: &str) -> Result<DeletedDocument, AppError> {
        let repo = DocumentRepository::new(self.db);

        let deleted = repo
            .remove(COUNTRIES, id)
            .await
            .context("Failed to delete country")?
            .ok_or_else(not_found)?;

        tracing::info!("Deleted country {}", id);

        Ok(deleted)
    }

    async fn find_where(
        &self,
        filters: &[Filter],
        page: PageParams,
        context: &str,
    ) -> Result<Vec<Country>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo
            .find_all(COUNTRIES, filters, page.limit, page.start_after.as_deref())
            .await
            .context(context)?;

        documents.into_iter().map(read_country).collect()
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Country not found".to_string())
}

fn read_country(document: Document) -> Result<Country, AppError> {
    let id = document.id.clone();
    Country::from_document(document).map_err(|e| malformed("country", &id, e))
}

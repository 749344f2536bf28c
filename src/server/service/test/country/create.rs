use super::*;

/// Tests creating a country under a client-chosen id.
///
/// Expected: Ok with the id and fields as given
#[tokio::test]
async fn creates_country_with_given_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CountryService::new(db);
    let country = service
        .create(CreateCountryParams {
            id: "cl".to_string(),
            fields: CountryFieldsDto {
                cust_id: Some(152),
                name: "Chile".to_string(),
                continents: vec!["South America".to_string()],
                capital: "Santiago".to_string(),
                geopoint: Some(GeopointDto {
                    latitude: -33.4489,
                    longitude: -70.6693,
                }),
                geographical_division: "16 regions".to_string(),
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(country.id, "cl");
    assert_eq!(country.fields.cust_id, Some(152));

    let fetched = service.find_one("cl").await?;
    assert_eq!(fetched, country);

    Ok(())
}

/// Tests fetching and deleting a missing country.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn missing_country_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CountryService::new(db);

    assert!(matches!(
        service.find_one("zz").await,
        Err(AppError::NotFound(msg)) if msg == "Country not found"
    ));
    assert!(matches!(
        service.remove("zz").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

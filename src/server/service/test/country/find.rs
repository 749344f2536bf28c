use super::*;

/// Tests the region lookup.
///
/// Expected: Ok with only countries of that region
#[tokio::test]
async fn finds_by_region() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::country::CountryFactory::new(db)
        .id("fr")
        .region("Europe")
        .build()
        .await?;
    factory::country::CountryFactory::new(db).id("cl").build().await?;

    let countries = CountryService::new(db)
        .find_by_region("Europe", PageParams::default())
        .await?;

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].id, "fr");

    Ok(())
}

/// Tests the continent lookup.
///
/// Expected: Ok with every country whose continents include the value
#[tokio::test]
async fn finds_by_continent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::country::CountryFactory::new(db)
        .id("ru")
        .continents(&["Europe", "Asia"])
        .build()
        .await?;
    factory::country::CountryFactory::new(db)
        .id("fr")
        .continents(&["Europe"])
        .build()
        .await?;
    factory::country::CountryFactory::new(db).id("cl").build().await?;

    let service = CountryService::new(db);

    let europe = service.find_by_continent("Europe").await?;
    assert_eq!(europe.len(), 2);

    let asia = service.find_by_continent("Asia").await?;
    assert_eq!(asia.len(), 1);
    assert_eq!(asia[0].id, "ru");

    assert!(service.find_by_continent("Oceania").await?.is_empty());

    Ok(())
}

/// Tests the continent lookup with a blank value.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn blank_continent_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CountryService::new(db).find_by_continent(" ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests listing countries with a page size.
///
/// Expected: Ok with at most `limit` countries
#[tokio::test]
async fn lists_with_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_country(db).await?;
    }

    let countries = CountryService::new(db)
        .find_all(PageParams {
            limit: 2,
            start_after: None,
        })
        .await?;

    assert_eq!(countries.len(), 2);

    Ok(())
}

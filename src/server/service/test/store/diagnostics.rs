use super::*;

/// Tests the health probe against a reachable store.
///
/// Expected: healthy result with no error
#[tokio::test]
async fn reports_healthy_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let health = StoreService::new(db).health().await;

    assert!(health.is_healthy());
    assert!(health.error.is_none());

    Ok(())
}

/// Tests listing the raw documents of a collection.
///
/// Expected: Ok with the documents of that collection only
#[tokio::test]
async fn lists_raw_collection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_topic(db).await?;
    factory::create_topic(db).await?;
    factory::create_mission(db).await?;

    let documents = StoreService::new(db)
        .list_collection("topics", PageParams::default())
        .await?;

    assert_eq!(documents.len(), 2);
    assert!(documents.iter().all(|d| d.data.contains_key("elements")));

    Ok(())
}

/// Tests seeding the sample countries twice.
///
/// Expected: Ok with three countries, and no duplicates after the second run
#[tokio::test]
async fn seeds_countries_idempotently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StoreService::new(db);
    let seeded = service.seed_countries().await?;
    service.seed_countries().await?;

    assert_eq!(seeded.len(), 3);

    let countries = CountryService::new(db)
        .find_all(PageParams::default())
        .await?;
    assert_eq!(countries.len(), 3);

    let chile = CountryService::new(db).find_one("cl").await?;
    assert_eq!(chile.fields.capital, "Santiago");

    Ok(())
}

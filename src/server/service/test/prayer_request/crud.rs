use super::*;

/// Tests the full lifecycle of a prayer request.
///
/// Expected: Ok for create, fetch, update and delete, then NotFound
#[tokio::test]
async fn creates_updates_and_removes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PrayerRequestService::new(db);
    let created = service
        .create(CreatePrayerRequestParams {
            requester: Some("Ana".to_string()),
            title: "Health".to_string(),
            description: "For my family".to_string(),
        })
        .await?;

    assert_eq!(created.id.len(), 20);
    assert_eq!(service.find_one(&created.id).await?, created);

    let mut patch = serde_json::Map::new();
    patch.insert("title".to_string(), serde_json::json!("Healing"));
    let updated = service
        .update(&created.id, UpdatePrayerRequestParams { patch })
        .await?;
    assert_eq!(updated.title, "Healing");
    assert_eq!(updated.description, "For my family");

    let deleted = service.remove(&created.id).await?;
    assert!(deleted.deleted);
    assert!(matches!(
        service.find_one(&created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests listing prayer requests by requester.
///
/// Expected: Ok with only that requester's requests
#[tokio::test]
async fn finds_by_requester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::prayer_request::PrayerRequestFactory::new(db)
        .requester("Ana")
        .build()
        .await?;
    factory::prayer_request::PrayerRequestFactory::new(db)
        .requester("Luis")
        .build()
        .await?;
    factory::create_prayer_request(db).await?;

    let service = PrayerRequestService::new(db);

    let requests = service
        .find_by_requester("Ana", PageParams::default())
        .await?;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].requester.as_deref(), Some("Ana"));

    assert_eq!(service.find_all(PageParams::default()).await?.len(), 3);

    Ok(())
}

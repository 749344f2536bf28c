use super::*;

/// Tests fetching a stored document.
///
/// Expected: Ok(Some) with the stored body and timestamps
#[tokio::test]
async fn finds_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo.find_one(&topic.collection, &topic.id).await?.unwrap();

    assert_eq!(document.id, topic.id);
    assert_eq!(Value::Object(document.data), topic.data);
    assert_eq!(document.created_at, topic.created_at);

    Ok(())
}

/// Tests fetching a missing document.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;

    let repo = DocumentRepository::new(db);

    assert!(repo.find_one(&topic.collection, "missing").await?.is_none());
    assert!(repo.find_one("missions", &topic.id).await?.is_none());

    Ok(())
}

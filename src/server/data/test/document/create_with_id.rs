use super::*;

/// Tests creating a document under a chosen id.
///
/// Verifies that the repository stores the body as given and stamps both timestamps
/// with the same instant.
///
/// Expected: Ok with the stored document
#[tokio::test]
async fn creates_document_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let document = repo
        .create_with_id(
            fixture::document::COUNTRIES,
            "cl",
            fixture::document::country_data("cl", "Chile"),
        )
        .await?;

    assert_eq!(document.id, "cl");
    assert_eq!(document.data["name"], "Chile");
    assert_eq!(document.created_at, document.updated_at);

    Ok(())
}

/// Tests that writing an existing id replaces the document.
///
/// Verifies that the upsert replaces the whole body rather than merging into it.
///
/// Expected: Ok with only the new body's fields
#[tokio::test]
async fn replaces_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::country::CountryFactory::new(db)
        .id("ar")
        .build()
        .await?;

    let repo = DocumentRepository::new(db);
    let document = repo
        .create_with_id(&existing.collection, "ar", json!({ "name": "Argentina" }))
        .await?;

    assert_eq!(document.data.len(), 1);
    assert_eq!(document.data["name"], "Argentina");

    let stored = repo.find_all(&existing.collection, &[], 20, None).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that the same id may exist in two collections.
///
/// Expected: Ok with both documents readable independently
#[tokio::test]
async fn ids_are_scoped_to_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    repo.create_with_id("topics", "same", json!({ "theme": "A" }))
        .await?;
    repo.create_with_id("missions", "same", json!({ "country": "B" }))
        .await?;

    let topic = repo.find_one("topics", "same").await?.unwrap();
    let mission = repo.find_one("missions", "same").await?.unwrap();

    assert_eq!(topic.data["theme"], "A");
    assert_eq!(mission.data["country"], "B");

    Ok(())
}

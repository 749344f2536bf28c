use super::*;

/// Tests creating a document with a generated id.
///
/// Verifies that the generated id is 20 alphanumeric characters and differs between
/// documents.
///
/// Expected: Ok with two distinct generated ids
#[tokio::test]
async fn generates_document_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let first = repo
        .create(
            fixture::document::PRAYER_REQUESTS,
            fixture::document::prayer_request_data(None, "Title", "Body"),
        )
        .await?;
    let second = repo
        .create(
            fixture::document::PRAYER_REQUESTS,
            fixture::document::prayer_request_data(Some("Ana"), "Title", "Body"),
        )
        .await?;

    assert_eq!(first.id.len(), 20);
    assert!(first.id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first.id, second.id);
    assert_eq!(second.data["requester"], "Ana");

    Ok(())
}

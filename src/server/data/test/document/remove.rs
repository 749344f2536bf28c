use super::*;

/// Tests deleting a document.
///
/// Expected: Ok(Some) with `deleted: true`, and the document is gone
#[tokio::test]
async fn removes_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mission = factory::create_mission(db).await?;

    let repo = DocumentRepository::new(db);
    let deleted = repo.remove(&mission.collection, &mission.id).await?.unwrap();

    assert_eq!(deleted.id, mission.id);
    assert!(deleted.deleted);
    assert!(repo.find_one(&mission.collection, &mission.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing document.
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

    let repo = DocumentRepository::new(db);

    assert!(repo
        .remove(fixture::document::MISSIONS, "missing")
        .await?
        .is_none());

    Ok(())
}

use super::*;

/// Tests merging a patch into a document.
///
/// Verifies that patched keys are replaced, other keys are kept, `updated_at` moves
/// forward and `created_at` stays put.
///
/// Expected: Ok(Some) with the merged body
#[tokio::test]
async fn merges_top_level_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country(db).await?;

    let mut patch = Map::new();
    patch.insert("capital".to_string(), json!("Valparaíso"));
    patch.insert("geopoint".to_string(), json!({ "latitude": 1.0 }));

    let repo = DocumentRepository::new(db);
    let updated = repo
        .update(&country.collection, &country.id, patch)
        .await?
        .unwrap();

    assert_eq!(updated.data["capital"], "Valparaíso");
    assert_eq!(updated.data["name"], country.data["name"]);
    // nested objects are replaced, not merged
    assert_eq!(updated.data["geopoint"], json!({ "latitude": 1.0 }));
    assert_eq!(updated.created_at, country.created_at);
    assert!(updated.updated_at >= country.updated_at);

    let stored = repo.find_one(&country.collection, &country.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a missing document.
///
/// Expected: Ok(None) and nothing written
#[tokio::test]
async fn returns_none_for_missing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let mut patch = Map::new();
    patch.insert("theme".to_string(), json!("New"));

    let result = repo
        .update(fixture::document::TOPICS, "missing", patch)
        .await?;

    assert!(result.is_none());
    assert!(repo
        .find_one(fixture::document::TOPICS, "missing")
        .await?
        .is_none());

    Ok(())
}

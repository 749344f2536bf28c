use super::*;

/// Tests listing documents in id order up to the limit.
///
/// Expected: Ok with the first `limit` documents by id
#[tokio::test]
async fn lists_documents_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["c", "a", "b"] {
        factory::country::CountryFactory::new(db).id(id).build().await?;
    }
    factory::create_topic(db).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo
        .find_all(fixture::document::COUNTRIES, &[], 2, None)
        .await?;

    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    Ok(())
}

/// Tests cursor pagination.
///
/// Verifies that an existing cursor starts the page after it, and that a cursor naming
/// no document is ignored.
///
/// Expected: Ok with the page after the cursor, or the first page for an unknown cursor
#[tokio::test]
async fn paginates_after_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["a", "b", "c", "d"] {
        factory::country::CountryFactory::new(db).id(id).build().await?;
    }

    let repo = DocumentRepository::new(db);

    let page = repo
        .find_all(fixture::document::COUNTRIES, &[], 2, Some("b"))
        .await?;
    let ids: Vec<&str> = page.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d"]);

    let page = repo
        .find_all(fixture::document::COUNTRIES, &[], 2, Some("bb"))
        .await?;
    let ids: Vec<&str> = page.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    Ok(())
}

/// Tests equality and array membership filters.
///
/// Expected: Ok with only the documents matching every filter
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::country::CountryFactory::new(db)
        .id("fr")
        .region("Europe")
        .continents(&["Europe"])
        .build()
        .await?;
    factory::country::CountryFactory::new(db)
        .id("ru")
        .region("Europe")
        .continents(&["Europe", "Asia"])
        .build()
        .await?;
    factory::country::CountryFactory::new(db)
        .id("cl")
        .build()
        .await?;

    let repo = DocumentRepository::new(db);

    let europe = repo
        .find_all(
            fixture::document::COUNTRIES,
            &[Filter::eq("region", "Europe")],
            20,
            None,
        )
        .await?;
    assert_eq!(europe.len(), 2);

    let both = repo
        .find_all(
            fixture::document::COUNTRIES,
            &[
                Filter::eq("region", "Europe"),
                Filter::array_contains("continents", "Asia"),
            ],
            20,
            None,
        )
        .await?;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, "ru");

    let populous = repo
        .find_all(
            fixture::document::COUNTRIES,
            &[Filter::new("population", FilterOp::GreaterThan, 1_000)],
            20,
            None,
        )
        .await?;
    assert_eq!(populous.len(), 3);

    Ok(())
}

/// Tests that the limit applies after filtering.
///
/// Expected: Ok with `limit` matching documents even when non-matching ones sort first
#[tokio::test]
async fn limits_after_filtering() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["a", "b"] {
        factory::country::CountryFactory::new(db).id(id).build().await?;
    }
    for id in ["c", "d", "e"] {
        factory::country::CountryFactory::new(db)
            .id(id)
            .region("Europe")
            .build()
            .await?;
    }

    let repo = DocumentRepository::new(db);
    let documents = repo
        .find_all(
            fixture::document::COUNTRIES,
            &[Filter::eq("region", "Europe")],
            2,
            None,
        )
        .await?;

    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d"]);

    Ok(())
}

use super::*;

/// Tests updating only the theme.
///
/// Expected: Ok with the new theme and the elements untouched
#[tokio::test]
async fn updates_theme_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);
    let before = service.find_one(&created.id).await?;

    let topic = service
        .update(
            &created.id,
            UpdateTopicParams {
                theme: Some("Renamed".to_string()),
                elements: None,
            },
        )
        .await?;

    assert_eq!(topic.theme, "Renamed");
    assert_eq!(topic.elements, before.elements);
    assert!(topic.updated_at >= before.updated_at);

    Ok(())
}

/// Tests replacing the whole elements array.
///
/// Verifies that supplied ids are kept and missing ids are generated.
///
/// Expected: Ok with the replacement array
#[tokio::test]
async fn replaces_elements_and_fills_missing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;

    let topic = TopicService::new(db)
        .update(
            &created.id,
            UpdateTopicParams {
                theme: None,
                elements: Some(vec![
                    ElementDraft {
                        id: Some("kept".to_string()),
                        text: "First".to_string(),
                        pic: String::new(),
                    },
                    ElementDraft {
                        id: None,
                        text: "Second".to_string(),
                        pic: "pic.png".to_string(),
                    },
                ]),
            },
        )
        .await?;

    assert_eq!(topic.theme, test_utils::fixture::document::DEFAULT_THEME);
    assert_eq!(topic.elements.len(), 2);
    assert_eq!(topic.elements[0].id, "kept");
    assert!(topic.elements[1].id.starts_with("elem_"));
    assert!(topic.elements[1].id.ends_with("_1"));

    Ok(())
}

/// Tests updating a topic that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TopicService::new(db)
        .update(
            "missing",
            UpdateTopicParams {
                theme: Some("x".to_string()),
                elements: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

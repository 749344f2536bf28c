use super::*;

/// Tests creating a topic with two elements.
///
/// Verifies that elements receive `elem_<topicId>_<index>` ids in the order given and
/// that fetching the topic returns what was created.
///
/// Expected: Ok with derived element ids
#[tokio::test]
async fn assigns_indexed_element_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TopicService::new(db);
    let topic = service
        .create(CreateTopicParams {
            theme: "Prayer".to_string(),
            elements: vec![new_element("A"), new_element("B")],
        })
        .await?;

    assert_eq!(topic.id.len(), 8);
    assert_eq!(topic.elements[0].id, format!("elem_{}_0", topic.id));
    assert_eq!(topic.elements[1].id, format!("elem_{}_1", topic.id));
    assert_eq!(topic.elements[1].text, "B");

    let fetched = service.find_one(&topic.id).await?;
    assert_eq!(fetched, topic);

    Ok(())
}

/// Tests fetching a topic that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn find_one_fails_for_missing_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TopicService::new(db).find_one("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Topic with ID missing not found"));

    Ok(())
}

/// Tests listing topics with a cursor.
///
/// Expected: Ok with the topics after the cursor
#[tokio::test]
async fn lists_topics_after_cursor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["t1", "t2", "t3"] {
        factory::topic::TopicFactory::new(db)
            .id(id)
            .element("A")
            .build()
            .await?;
    }

    let topics = TopicService::new(db)
        .find_all(PageParams {
            limit: 20,
            start_after: Some("t1".to_string()),
        })
        .await?;

    let ids: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t3"]);

    Ok(())
}

/// Tests deleting a topic.
///
/// Expected: Ok with `deleted: true`, then NotFound on the second attempt
#[tokio::test]
async fn removes_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let service = TopicService::new(db);

    let deleted = service.remove(&topic.id).await?;
    assert!(deleted.deleted);
    assert_eq!(deleted.id, topic.id);

    assert!(matches!(
        service.remove(&topic.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

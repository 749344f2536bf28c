use super::*;

/// Tests reversing two elements.
///
/// Creates a topic with elements A and B and reorders with `[id1, id0]`.
///
/// Expected: Ok with the stored array `[B, A]`
#[tokio::test]
async fn reorders_elements() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TopicService::new(db);
    let topic = service
        .create(CreateTopicParams {
            theme: "Order".to_string(),
            elements: vec![new_element("A"), new_element("B")],
        })
        .await?;
    let id0 = format!("elem_{}_0", topic.id);
    let id1 = format!("elem_{}_1", topic.id);

    let elements = service
        .reorder_elements(
            &topic.id,
            ReorderParams {
                keys: vec![id1.clone(), id0.clone()],
            },
        )
        .await?;

    assert_eq!(elements[0].id, id1);
    assert_eq!(elements[1].id, id0);

    let stored = service.find_one(&topic.id).await?;
    let texts: Vec<&str> = stored.elements.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["B", "A"]);

    Ok(())
}

/// Tests a reorder listing only one of two elements.
///
/// Expected: Err(LengthMismatch { expected: 2, got: 1 }) and the stored array unchanged
#[tokio::test]
async fn rejects_partial_reorder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);
    let before = service.find_one(&created.id).await?;

    let result = service
        .reorder_elements(
            &created.id,
            ReorderParams {
                keys: vec![before.elements[1].id.clone()],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CollectionErr(CollectionError::LengthMismatch {
            expected: 2,
            got: 1,
            ..
        }))
    ));
    assert_eq!(service.find_one(&created.id).await?.elements, before.elements);

    Ok(())
}

/// Tests a reorder naming an unknown element.
///
/// Expected: Err(CollectionErr::NotFound)
#[tokio::test]
async fn rejects_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);
    let before = service.find_one(&created.id).await?;

    let result = service
        .reorder_elements(
            &created.id,
            ReorderParams {
                keys: vec![before.elements[0].id.clone(), "ghost".to_string()],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CollectionErr(CollectionError::NotFound { key, .. })) if key == "ghost"
    ));

    Ok(())
}

/// Tests a reorder repeating one id in place of another.
///
/// Expected: Err(CollectionErr::DuplicateKey)
#[tokio::test]
async fn rejects_duplicate_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);
    let before = service.find_one(&created.id).await?;
    let first = before.elements[0].id.clone();

    let result = service
        .reorder_elements(
            &created.id,
            ReorderParams {
                keys: vec![first.clone(), first],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CollectionErr(CollectionError::DuplicateKey { .. }))
    ));

    Ok(())
}

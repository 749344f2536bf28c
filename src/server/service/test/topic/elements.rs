use super::*;

/// Tests appending an element.
///
/// Verifies the element gets an `elem_<millis>` key and lands at the end of the array.
///
/// Expected: Ok with the new element persisted last
#[tokio::test]
async fn adds_element_at_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);

    let element = service.add_element(&created.id, new_element("C")).await?;

    assert!(element.id.starts_with("elem_"));
    assert_eq!(element.text, "C");

    let topic = service.find_one(&created.id).await?;
    assert_eq!(topic.elements.len(), 3);
    assert_eq!(topic.elements[2], element);

    Ok(())
}

/// Tests two appends in quick succession.
///
/// Expected: Ok with distinct keys for both elements
#[tokio::test]
async fn consecutive_adds_get_unique_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);

    let first = service.add_element(&created.id, new_element("C")).await?;
    let second = service.add_element(&created.id, new_element("D")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests patching one field of an element.
///
/// Expected: Ok with only `pic` changed, other elements untouched
#[tokio::test]
async fn updates_element_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_topic(db).await?;
    let service = TopicService::new(db);
    let before = service.find_one(&created.id).await?;
    let target = before.elements[0].id.clone();

    let element = service
        .update_element(
            &created.id,
            &target,
            ElementPatch {
                text: None,
                pic: Some("new.png".to_string()),
            },
        )
        .await?;

    assert_eq!(element.text, before.elements[0].text);
    assert_eq!(element.pic, "new.png");

    let after = service.find_one(&created.id).await?;
    assert_eq!(after.elements[0], element);
    assert_eq!(after.elements[1], before.elements[1]);

    Ok(())
}

/// Tests patching an element that does not exist.
///
/// Expected: Err(CollectionErr::NotFound) and the stored topic unchanged
#[tokio::test]
async fn update_element_fails_for_unknown_id() -> Result<(), AppError> {
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
        .update_element(
            &created.id,
            "nope",
            ElementPatch {
                text: Some("x".to_string()),
                pic: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CollectionErr(CollectionError::NotFound { .. }))
    ));
    assert_eq!(service.find_one(&created.id).await?, before);

    Ok(())
}

/// Tests removing an element.
///
/// Expected: Ok with one element left and `totalElements` equal to 1
#[tokio::test]
async fn removes_element_and_counts_rest() -> Result<(), AppError> {
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
        .remove_element(&created.id, &before.elements[0].id)
        .await?;

    assert_eq!(topic.elements, vec![before.elements[1].clone()]);
    assert_eq!(topic.total_elements, Some(1));

    let result = service
        .remove_element(&created.id, &before.elements[0].id)
        .await;
    assert!(matches!(result, Err(AppError::CollectionErr(_))));

    Ok(())
}

/// Tests reading single elements and the element listing.
///
/// Expected: Ok for a known element, Err(CollectionErr) for an unknown one
#[tokio::test]
async fn gets_elements() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::topic::TopicFactory::new(db)
        .element_with_id("e1", "One", "one.png")
        .element_with_id("e2", "Two", "")
        .build()
        .await?;
    let service = TopicService::new(db);

    let element = service.get_element(&created.id, "e1").await?;
    assert_eq!(element.pic, "one.png");

    assert!(service.get_element(&created.id, "e3").await.is_err());

    let listing = service.get_elements(&created.id).await?.into_elements_dto();
    assert_eq!(listing.topic_id, created.id);
    assert_eq!(listing.elements.len(), 2);

    Ok(())
}

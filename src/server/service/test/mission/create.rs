use super::*;

/// Tests creating a mission.
///
/// Verifies that cities receive `elem_<missionId>_<index>` orders, that client orders are
/// ignored on creation, and that optional fields are stored when given.
///
/// Expected: Ok with derived city orders
#[tokio::test]
async fn assigns_indexed_city_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MissionService::new(db);
    let mission = service
        .create(CreateMissionParams {
            country: "Chile".to_string(),
            cities: vec![new_city(Some("7"), "Santiago"), new_city(None, "Valparaíso")],
            map: Some("chile.png".to_string()),
            post: None,
        })
        .await?;

    assert_eq!(mission.cities[0].order, format!("elem_{}_0", mission.id));
    assert_eq!(mission.cities[1].order, format!("elem_{}_1", mission.id));
    assert_eq!(mission.cities[1].place, "Valparaíso");
    assert_eq!(mission.map.as_deref(), Some("chile.png"));
    assert_eq!(mission.post, None);

    assert_eq!(service.find_one(&mission.id).await?, mission);

    Ok(())
}

/// Tests updating the country and replacing the cities.
///
/// Expected: Ok with the new country and cities, supplied orders kept
#[tokio::test]
async fn updates_country_and_cities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_mission(db).await?;

    let mission = MissionService::new(db)
        .update(
            &created.id,
            UpdateMissionParams {
                country: Some("Peru".to_string()),
                cities: Some(vec![new_city(Some("1"), "Lima"), new_city(None, "Cusco")]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(mission.country, "Peru");
    assert_eq!(mission.cities[0].order, "1");
    assert_eq!(mission.cities[0].place, "Lima");
    assert!(mission.cities[1].order.ends_with("_1"));

    Ok(())
}

/// Tests deleting a mission that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn remove_fails_for_missing_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MissionService::new(db).remove("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests removing the first city of a Santiago / Valparaíso mission.
///
/// Expected: Ok with only Valparaíso left and `totalCities` equal to 1
#[tokio::test]
async fn removes_city_and_counts_rest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MissionService::new(db);
    let created = service
        .create(CreateMissionParams {
            country: "Chile".to_string(),
            cities: vec![new_city(None, "Santiago"), new_city(None, "Valparaíso")],
            map: None,
            post: None,
        })
        .await?;

    let mission = service
        .remove_city(&created.id, &format!("elem_{}_0", created.id))
        .await?;

    assert_eq!(mission.cities.len(), 1);
    assert_eq!(mission.cities[0].place, "Valparaíso");
    assert_eq!(mission.total_cities, Some(1));

    let stored = service.find_one(&created.id).await?;
    assert_eq!(stored.total_cities, Some(1));

    Ok(())
}

/// Tests appending a city with and without a client-supplied order.
///
/// Expected: Ok with the supplied order kept, a fresh order generated otherwise, and
/// Err(DuplicateKey) when the supplied order is taken
#[tokio::test]
async fn adds_cities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::mission::MissionFactory::new(db)
        .city_with_order("1", "Lima")
        .city_with_order("2", "Cusco")
        .build()
        .await?;
    let service = MissionService::new(db);

    let city = service
        .add_city(&created.id, new_city(Some("3"), "Arequipa"))
        .await?;
    assert_eq!(city.order, "3");

    let generated = service.add_city(&created.id, new_city(None, "Puno")).await?;
    assert!(generated.order.starts_with("elem_"));

    let duplicate = service
        .add_city(&created.id, new_city(Some("1"), "Tacna"))
        .await;
    assert!(matches!(
        duplicate,
        Err(AppError::CollectionErr(CollectionError::DuplicateKey { .. }))
    ));

    let mission = service.find_one(&created.id).await?;
    let places: Vec<&str> = mission.cities.iter().map(|c| c.place.as_str()).collect();
    assert_eq!(places, vec!["Lima", "Cusco", "Arequipa", "Puno"]);

    Ok(())
}

/// Tests patching a city.
///
/// Expected: Ok with the new place and the other fields untouched
#[tokio::test]
async fn updates_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::mission::MissionFactory::new(db)
        .city_with_order("1", "Lima")
        .city_with_order("2", "Cusco")
        .build()
        .await?;
    let service = MissionService::new(db);

    let city = service
        .update_city(
            &created.id,
            "2",
            CityPatch {
                place: Some("Cuzco".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(city.order, "2");
    assert_eq!(city.place, "Cuzco");
    assert_eq!(service.get_city(&created.id, "2").await?, city);

    let missing = service
        .update_city(&created.id, "9", CityPatch::default())
        .await;
    assert!(matches!(
        missing,
        Err(AppError::CollectionErr(CollectionError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests reordering cities whose orders are stored as numbers.
///
/// Expected: Ok with the cities in the requested order
#[tokio::test]
async fn reorders_cities_with_numeric_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::helpers::insert_document(
        db,
        test_utils::fixture::MISSIONS,
        "numeric",
        serde_json::json!({
            "country": "Bolivia",
            "cities": [
                { "order": 1, "place": "La Paz", "map": "", "photo": "" },
                { "order": 2, "place": "Sucre", "map": "", "photo": "" }
            ]
        }),
    )
    .await?;
    let service = MissionService::new(db);

    let cities = service
        .reorder_cities(
            &created.id,
            ReorderParams {
                keys: vec!["2".to_string(), "1".to_string()],
            },
        )
        .await?;

    assert_eq!(cities[0].place, "Sucre");
    assert_eq!(cities[1].place, "La Paz");

    let listing = service.get_cities(&created.id).await?.into_cities_dto();
    assert_eq!(listing.mission_country, "Bolivia");
    assert_eq!(listing.cities[0].order, "2");

    Ok(())
}

/// Tests a reorder that lists a city twice and omits another.
///
/// Expected: Err(DuplicateKey) and nothing written
#[tokio::test]
async fn rejects_duplicate_reorder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::mission::MissionFactory::new(db)
        .city_with_order("1", "Lima")
        .city_with_order("2", "Cusco")
        .build()
        .await?;
    let service = MissionService::new(db);
    let before = service.find_one(&created.id).await?;

    let result = service
        .reorder_cities(
            &created.id,
            ReorderParams {
                keys: vec!["2".to_string(), "2".to_string()],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CollectionErr(CollectionError::DuplicateKey { .. }))
    ));
    assert_eq!(service.find_one(&created.id).await?, before);

    Ok(())
}

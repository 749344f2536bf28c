use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiListResponse, ApiResponse, DeletedDto, ErrorDto},
        mission::{
            CityDto, CityPatchDto, CreateCityDto, CreateMissionDto, MissionCitiesDto, MissionDto,
            ReorderCitiesDto, UpdateMissionDto,
        },
    },
    server::{
        controller::PageQuery,
        error::AppError,
        model::{
            mission::{CityPatch, CreateMissionParams, NewCityParams, UpdateMissionParams},
            ReorderParams,
        },
        service::mission::MissionService,
        state::AppState,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

/// Create a mission with its initial cities.
///
/// Cities sent without an `order` are keyed `elem_<missionId>_<index>`.
///
/// # Returns
/// - `201 Created` - The stored mission
/// - `400 Bad Request` - Blank country, blank place or fewer than two cities
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = ApiResponse<MissionDto>),
        (status = 400, description = "Invalid mission data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    payload: Result<Json<CreateMissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MissionService::new(&state.db);

    let params = CreateMissionParams::from_dto(payload)?;

    let mission = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Mission created successfully",
            mission.into_dto(),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 20)"),
        ("startAfter" = Option<String>, Query, description = "Id of the last mission of the previous page")
    ),
    responses(
        (status = 200, description = "Missions retrieved", body = ApiListResponse<MissionDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = MissionService::new(&state.db);

    let missions = service.find_all(query.into_params()?).await?;

    let data = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok(Json(ApiListResponse::new(
        "Missions retrieved successfully",
        data,
    )))
}

#[utoipa::path(
    get,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    responses(
        (status = 200, description = "Mission found", body = ApiResponse<MissionDto>),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let mission = service.find_one(&id).await?;

    Ok(Json(ApiResponse::new(
        "Mission retrieved successfully",
        mission.into_dto(),
    )))
}

/// Update mission fields and/or replace the whole cities array.
///
/// # Returns
/// - `200 OK` - The mission after the update
/// - `400 Bad Request` - Invalid fields or duplicate city orders
/// - `404 Not Found` - No mission with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    request_body = UpdateMissionDto,
    responses(
        (status = 200, description = "Mission updated", body = ApiResponse<MissionDto>),
        (status = 400, description = "Invalid mission data", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MissionService::new(&state.db);

    let params = UpdateMissionParams::from_dto(payload)?;

    let mission = service.update(&id, params).await?;

    Ok(Json(ApiResponse::new(
        "Mission updated successfully",
        mission.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    responses(
        (status = 200, description = "Mission deleted", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let deleted = service.remove(&id).await?;

    Ok(Json(ApiResponse::new(
        "Mission deleted successfully",
        deleted.into_dto(),
    )))
}

/// Append a city to a mission.
///
/// A client-supplied `order` is kept as the city's key; otherwise a fresh key is generated.
///
/// # Returns
/// - `201 Created` - The new city
/// - `400 Bad Request` - Blank place, or the `order` is already used by another city
/// - `404 Not Found` - No mission with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/missions/{id}/cities",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City added", body = ApiResponse<CityDto>),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_city(
    State(state): State<AppState>,
    Path(mission_id): Path<String>,
    payload: Result<Json<CreateCityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MissionService::new(&state.db);

    let params = NewCityParams::from_dto(payload)?;

    let city = service.add_city(&mission_id, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("City added successfully", city.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/missions/{id}/cities",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    responses(
        (status = 200, description = "Cities retrieved", body = ApiResponse<MissionCitiesDto>),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    Path(mission_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let mission = service.get_cities(&mission_id).await?;

    Ok(Json(ApiResponse::new(
        "Cities retrieved successfully",
        mission.into_cities_dto(),
    )))
}

/// Rearrange the cities of a mission.
///
/// The request must list every current city order exactly once.
///
/// # Returns
/// - `200 OK` - The cities in their new order
/// - `400 Bad Request` - Empty list, wrong number of orders or a repeated order
/// - `404 Not Found` - No mission with that id, or an order that is not one of its cities
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/missions/{id}/cities/reorder",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id")
    ),
    request_body = ReorderCitiesDto,
    responses(
        (status = 200, description = "Cities reordered", body = ApiResponse<Vec<CityDto>>),
        (status = 400, description = "Orders are not a permutation of the city orders", body = ErrorDto),
        (status = 404, description = "Mission or city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_cities(
    State(state): State<AppState>,
    Path(mission_id): Path<String>,
    payload: Result<Json<ReorderCitiesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MissionService::new(&state.db);

    let params = ReorderParams::from_keys("citiesOrder", payload.cities_order)?;

    let cities = service.reorder_cities(&mission_id, params).await?;

    let data: Vec<CityDto> = cities.into_iter().map(|c| c.into_dto()).collect();

    Ok(Json(ApiResponse::new("Cities reordered successfully", data)))
}

#[utoipa::path(
    get,
    path = "/api/missions/{id}/cities/{city_id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id"),
        ("city_id" = String, Path, description = "City order")
    ),
    responses(
        (status = 200, description = "City found", body = ApiResponse<CityDto>),
        (status = 404, description = "Mission or city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path((mission_id, city_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let city = service.get_city(&mission_id, &city_id).await?;

    Ok(Json(ApiResponse::new(
        "City retrieved successfully",
        city.into_dto(),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/missions/{id}/cities/{city_id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id"),
        ("city_id" = String, Path, description = "City order")
    ),
    request_body = CityPatchDto,
    responses(
        (status = 200, description = "City updated", body = ApiResponse<CityDto>),
        (status = 400, description = "Blank place", body = ErrorDto),
        (status = 404, description = "Mission or city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    Path((mission_id, city_id)): Path<(String, String)>,
    payload: Result<Json<CityPatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MissionService::new(&state.db);

    let patch = CityPatch::from_dto(payload)?;

    let city = service.update_city(&mission_id, &city_id, patch).await?;

    Ok(Json(ApiResponse::new(
        "City updated successfully",
        city.into_dto(),
    )))
}

/// Remove one city; the mission records the remaining count in `totalCities`.
#[utoipa::path(
    delete,
    path = "/api/missions/{id}/cities/{city_id}",
    tag = MISSION_TAG,
    params(
        ("id" = String, Path, description = "Mission id"),
        ("city_id" = String, Path, description = "City order")
    ),
    responses(
        (status = 200, description = "City removed", body = ApiResponse<MissionDto>),
        (status = 404, description = "Mission or city not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_city(
    State(state): State<AppState>,
    Path((mission_id, city_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = MissionService::new(&state.db);

    let mission = service.remove_city(&mission_id, &city_id).await?;

    Ok(Json(ApiResponse::new(
        format!("City {} removed successfully", city_id),
        mission.into_dto(),
    )))
}

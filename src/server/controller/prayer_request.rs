use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiListResponse, ApiResponse, DeletedDto, ErrorDto},
        prayer_request::{CreatePrayerRequestDto, PrayerRequestDto, UpdatePrayerRequestDto},
    },
    server::{
        error::AppError,
        model::{
            prayer_request::{CreatePrayerRequestParams, UpdatePrayerRequestParams},
            PageParams,
        },
        service::prayer_request::PrayerRequestService,
        state::AppState,
    },
};

/// Tag for grouping prayer request endpoints in OpenAPI documentation
pub static PRAYER_REQUEST_TAG: &str = "prayer-request";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequestQuery {
    pub requester: Option<String>,
    pub limit: Option<u64>,
    pub start_after: Option<String>,
}

/// Create a prayer request under a generated id.
///
/// # Returns
/// - `201 Created` - The stored prayer request
/// - `400 Bad Request` - Blank title or description
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/prayer-requests",
    tag = PRAYER_REQUEST_TAG,
    request_body = CreatePrayerRequestDto,
    responses(
        (status = 201, description = "Prayer request created", body = ApiResponse<PrayerRequestDto>),
        (status = 400, description = "Invalid prayer request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_prayer_request(
    State(state): State<AppState>,
    payload: Result<Json<CreatePrayerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = PrayerRequestService::new(&state.db);

    let params = CreatePrayerRequestParams::from_dto(payload)?;

    let request = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Prayer request created successfully",
            request.into_dto(),
        )),
    ))
}

/// List prayer requests, optionally only those of one requester.
#[utoipa::path(
    get,
    path = "/api/prayer-requests",
    tag = PRAYER_REQUEST_TAG,
    params(
        ("requester" = Option<String>, Query, description = "Only requests sent by this requester"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 20)"),
        ("startAfter" = Option<String>, Query, description = "Id of the last request of the previous page")
    ),
    responses(
        (status = 200, description = "Prayer requests retrieved", body = ApiListResponse<PrayerRequestDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prayer_requests(
    State(state): State<AppState>,
    query: Result<Query<PrayerRequestQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = PrayerRequestService::new(&state.db);

    let page = PageParams::from_query(query.limit, query.start_after)?;

    let requests = match query.requester.filter(|r| !r.trim().is_empty()) {
        Some(requester) => service.find_by_requester(&requester, page).await?,
        None => service.find_all(page).await?,
    };

    let data = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok(Json(ApiListResponse::new(
        "Prayer requests retrieved successfully",
        data,
    )))
}

#[utoipa::path(
    get,
    path = "/api/prayer-requests/{id}",
    tag = PRAYER_REQUEST_TAG,
    params(
        ("id" = String, Path, description = "Prayer request id")
    ),
    responses(
        (status = 200, description = "Prayer request found", body = ApiResponse<PrayerRequestDto>),
        (status = 404, description = "Prayer request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prayer_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerRequestService::new(&state.db);

    let request = service.find_one(&id).await?;

    Ok(Json(ApiResponse::new(
        "Prayer request retrieved successfully",
        request.into_dto(),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/prayer-requests/{id}",
    tag = PRAYER_REQUEST_TAG,
    params(
        ("id" = String, Path, description = "Prayer request id")
    ),
    request_body = UpdatePrayerRequestDto,
    responses(
        (status = 200, description = "Prayer request updated", body = ApiResponse<PrayerRequestDto>),
        (status = 400, description = "Invalid prayer request data", body = ErrorDto),
        (status = 404, description = "Prayer request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_prayer_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePrayerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = PrayerRequestService::new(&state.db);

    let params = UpdatePrayerRequestParams::from_dto(payload)?;

    let request = service.update(&id, params).await?;

    Ok(Json(ApiResponse::new(
        "Prayer request updated successfully",
        request.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/prayer-requests/{id}",
    tag = PRAYER_REQUEST_TAG,
    params(
        ("id" = String, Path, description = "Prayer request id")
    ),
    responses(
        (status = 200, description = "Prayer request deleted", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Prayer request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_prayer_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PrayerRequestService::new(&state.db);

    let deleted = service.remove(&id).await?;

    Ok(Json(ApiResponse::new(
        "Prayer request deleted successfully",
        deleted.into_dto(),
    )))
}

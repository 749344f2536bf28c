use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiListResponse, ErrorDto},
        country::CountryDto,
        store::{StoreCollectionDto, StoreHealthDto},
    },
    server::{
        controller::PageQuery, error::AppError, service::store::StoreService, state::AppState,
    },
};

/// Tag for grouping store diagnostic endpoints in OpenAPI documentation
pub static STORE_TAG: &str = "store";

/// Check connectivity to the document store.
///
/// The probe result is always returned as a body; only the status code tells the
/// two outcomes apart.
///
/// # Returns
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store probe failed, `error` holds the reason
#[utoipa::path(
    get,
    path = "/api/store/health",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "Store reachable", body = StoreHealthDto),
        (status = 503, description = "Store probe failed", body = StoreHealthDto)
    ),
)]
pub async fn get_store_health(State(state): State<AppState>) -> impl IntoResponse {
    let service = StoreService::new(&state.db);

    let health = service.health().await;

    let (status, message) = if health.is_healthy() {
        (StatusCode::OK, "Document store connected successfully!")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Document store connection failed")
    };

    (
        status,
        Json(StoreHealthDto {
            success: health.is_healthy(),
            message: message.to_string(),
            timestamp: health.checked_at,
            error: health.error,
        }),
    )
}

/// List the raw documents of any collection.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `collection` - Collection name
/// - `query` - Pagination (`limit`, `startAfter`)
///
/// # Returns
/// - `200 OK` - Documents with their ids and timestamps
/// - `400 Bad Request` - Invalid pagination
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/store/collections/{collection}",
    tag = STORE_TAG,
    params(
        ("collection" = String, Path, description = "Collection name"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 20)"),
        ("startAfter" = Option<String>, Query, description = "Id of the last document of the previous page")
    ),
    responses(
        (status = 200, description = "Documents of the collection", body = StoreCollectionDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_collection(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = StoreService::new(&state.db);

    let page = query.into_params()?;
    let documents = service.list_collection(&collection, page).await?;

    let data: Vec<_> = documents.into_iter().map(|d| d.into_value()).collect();

    Ok(Json(StoreCollectionDto {
        message: format!("Collection {} retrieved successfully", collection),
        collection,
        count: data.len(),
        data,
    }))
}

/// Write the sample countries.
///
/// Seeding is idempotent: existing documents under the sample ids are replaced.
///
/// # Returns
/// - `201 Created` - The seeded countries
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/store/seed/countries",
    tag = STORE_TAG,
    responses(
        (status = 201, description = "Countries seeded", body = ApiListResponse<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_countries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StoreService::new(&state.db);

    let countries = service.seed_countries().await?;

    let data = countries.into_iter().map(|c| c.into_dto()).collect();

    Ok((
        StatusCode::CREATED,
        Json(ApiListResponse::new("Countries seeded successfully", data)),
    ))
}

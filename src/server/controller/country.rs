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
        country::{ContinentSearchDto, CountryDto, CreateCountryDto, UpdateCountryDto},
    },
    server::{
        error::AppError,
        model::{
            country::{CreateCountryParams, UpdateCountryParams},
            PageParams,
        },
        service::country::CountryService,
        state::AppState,
    },
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryQuery {
    pub region: Option<String>,
    pub limit: Option<u64>,
    pub start_after: Option<String>,
}

/// Create a country under a client-chosen id.
///
/// Writing to an id that already exists replaces the stored country.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Country id and descriptive fields
///
/// # Returns
/// - `201 Created` - The stored country
/// - `400 Bad Request` - Invalid country data
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created", body = ApiResponse<CountryDto>),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    payload: Result<Json<CreateCountryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = CountryService::new(&state.db);

    let params = CreateCountryParams::from_dto(payload)?;

    let country = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Country created successfully",
            country.into_dto(),
        )),
    ))
}

/// List countries, optionally only those of one region.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `region` plus pagination (`limit`, `startAfter`)
///
/// # Returns
/// - `200 OK` - Countries in id order
/// - `400 Bad Request` - Invalid pagination
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    params(
        ("region" = Option<String>, Query, description = "Only countries of this region"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 20)"),
        ("startAfter" = Option<String>, Query, description = "Id of the last country of the previous page")
    ),
    responses(
        (status = 200, description = "Countries retrieved", body = ApiListResponse<CountryDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(
    State(state): State<AppState>,
    query: Result<Query<CountryQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = CountryService::new(&state.db);

    let page = PageParams::from_query(query.limit, query.start_after)?;

    let countries = match query.region.filter(|r| !r.trim().is_empty()) {
        Some(region) => service.find_by_region(&region, page).await?,
        None => service.find_all(page).await?,
    };

    let data = countries.into_iter().map(|c| c.into_dto()).collect();

    Ok(Json(ApiListResponse::new(
        "Countries retrieved successfully",
        data,
    )))
}

/// List the countries whose continents include the given one.
///
/// # Returns
/// - `200 OK` - Matching countries, possibly none
/// - `400 Bad Request` - Blank continent
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/countries/continent/{continent}",
    tag = COUNTRY_TAG,
    params(
        ("continent" = String, Path, description = "Continent name, e.g. Europe")
    ),
    responses(
        (status = 200, description = "Countries of the continent", body = ContinentSearchDto),
        (status = 400, description = "Continent not provided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries_by_continent(
    State(state): State<AppState>,
    Path(continent): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let countries = service.find_by_continent(&continent).await?;

    let data: Vec<CountryDto> = countries.into_iter().map(|c| c.into_dto()).collect();

    Ok(Json(ContinentSearchDto {
        message: format!(
            "Countries containing continent \"{}\" retrieved successfully",
            continent
        ),
        count: data.len(),
        data,
        searched_continent: continent,
    }))
}

/// Get a country by id.
///
/// # Returns
/// - `200 OK` - The country
/// - `404 Not Found` - No country with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = String, Path, description = "Country id")
    ),
    responses(
        (status = 200, description = "Country found", body = ApiResponse<CountryDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let country = service.find_one(&id).await?;

    Ok(Json(ApiResponse::new(
        "Country retrieved successfully",
        country.into_dto(),
    )))
}

/// Update the fields present in the request; absent fields keep their stored value.
///
/// # Returns
/// - `200 OK` - The country after the update
/// - `400 Bad Request` - Invalid country data
/// - `404 Not Found` - No country with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = String, Path, description = "Country id")
    ),
    request_body = UpdateCountryDto,
    responses(
        (status = 200, description = "Country updated", body = ApiResponse<CountryDto>),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCountryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = CountryService::new(&state.db);

    let params = UpdateCountryParams::from_dto(payload)?;

    let country = service.update(&id, params).await?;

    Ok(Json(ApiResponse::new(
        "Country updated successfully",
        country.into_dto(),
    )))
}

/// Delete a country.
///
/// # Returns
/// - `200 OK` - The country was deleted
/// - `404 Not Found` - No country with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    tag = COUNTRY_TAG,
    params(
        ("id" = String, Path, description = "Country id")
    ),
    responses(
        (status = 200, description = "Country deleted", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CountryService::new(&state.db);

    let deleted = service.remove(&id).await?;

    Ok(Json(ApiResponse::new(
        "Country deleted successfully",
        deleted.into_dto(),
    )))
}

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
        topic::{
            CreateElementDto, CreateTopicDto, ElementPatchDto, ReorderElementsDto, TopicDto,
            TopicElementDto, TopicElementsDto, UpdateTopicDto,
        },
    },
    server::{
        controller::PageQuery,
        error::AppError,
        model::{
            topic::{CreateTopicParams, ElementPatch, NewElementParams, UpdateTopicParams},
            ReorderParams,
        },
        service::topic::TopicService,
        state::AppState,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Create a topic with its initial elements.
///
/// Elements receive ids `elem_<topicId>_<index>` in the order given.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Theme and at least two elements
///
/// # Returns
/// - `201 Created` - The stored topic
/// - `400 Bad Request` - Blank theme or fewer than two elements
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = TOPIC_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Topic created", body = ApiResponse<TopicDto>),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    payload: Result<Json<CreateTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = TopicService::new(&state.db);

    let params = CreateTopicParams::from_dto(payload)?;

    let topic = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Topic created successfully", topic.into_dto())),
    ))
}

/// List topics in id order.
///
/// # Returns
/// - `200 OK` - One page of topics
/// - `400 Bad Request` - Invalid pagination
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default: 20)"),
        ("startAfter" = Option<String>, Query, description = "Id of the last topic of the previous page")
    ),
    responses(
        (status = 200, description = "Topics retrieved", body = ApiListResponse<TopicDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = TopicService::new(&state.db);

    let topics = service.find_all(query.into_params()?).await?;

    let data = topics.into_iter().map(|t| t.into_dto()).collect();

    Ok(Json(ApiListResponse::new("Topics retrieved successfully", data)))
}

/// Get a topic by id.
///
/// # Returns
/// - `200 OK` - The topic
/// - `404 Not Found` - No topic with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Topic found", body = ApiResponse<TopicDto>),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topic = service.find_one(&id).await?;

    Ok(Json(ApiResponse::new(
        "Topic retrieved successfully",
        topic.into_dto(),
    )))
}

/// Update the theme and/or replace the whole elements array.
///
/// Elements sent without an id are assigned `elem_<millis>_<index>`.
///
/// # Returns
/// - `200 OK` - The topic after the update
/// - `400 Bad Request` - Blank theme or duplicate element ids
/// - `404 Not Found` - No topic with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    request_body = UpdateTopicDto,
    responses(
        (status = 200, description = "Topic updated", body = ApiResponse<TopicDto>),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = TopicService::new(&state.db);

    let params = UpdateTopicParams::from_dto(payload)?;

    let topic = service.update(&id, params).await?;

    Ok(Json(ApiResponse::new(
        "Topic updated successfully",
        topic.into_dto(),
    )))
}

/// Delete a topic together with its elements.
///
/// # Returns
/// - `200 OK` - The topic was deleted
/// - `404 Not Found` - No topic with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Topic deleted", body = ApiResponse<DeletedDto>),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let deleted = service.remove(&id).await?;

    Ok(Json(ApiResponse::new(
        "Topic deleted successfully",
        deleted.into_dto(),
    )))
}

/// Append an element to a topic.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `topic_id` - Topic to append to
/// - `payload` - Element text and picture
///
/// # Returns
/// - `201 Created` - The new element with its generated id
/// - `404 Not Found` - No topic with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/api/topics/{id}/elements",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    request_body = CreateElementDto,
    responses(
        (status = 201, description = "Element added", body = ApiResponse<TopicElementDto>),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_element(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
    payload: Result<Json<CreateElementDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = TopicService::new(&state.db);

    let element = service
        .add_element(&topic_id, NewElementParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Element added successfully",
            element.into_dto(),
        )),
    ))
}

/// List the elements of a topic in display order.
#[utoipa::path(
    get,
    path = "/api/topics/{id}/elements",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Elements retrieved", body = ApiResponse<TopicElementsDto>),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_elements(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topic = service.get_elements(&topic_id).await?;

    Ok(Json(ApiResponse::new(
        "Elements retrieved successfully",
        topic.into_elements_dto(),
    )))
}

/// Rearrange the elements of a topic.
///
/// The request must list every current element id exactly once.
///
/// # Returns
/// - `200 OK` - The elements in their new order
/// - `400 Bad Request` - Empty list, wrong number of ids or a repeated id
/// - `404 Not Found` - No topic with that id, or an id that is not one of its elements
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/topics/{id}/elements/reorder",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    request_body = ReorderElementsDto,
    responses(
        (status = 200, description = "Elements reordered", body = ApiResponse<Vec<TopicElementDto>>),
        (status = 400, description = "Ids are not a permutation of the element ids", body = ErrorDto),
        (status = 404, description = "Topic or element not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_elements(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
    payload: Result<Json<ReorderElementsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = TopicService::new(&state.db);

    let params = ReorderParams::from_keys("elementIds", payload.element_ids)?;

    let elements = service.reorder_elements(&topic_id, params).await?;

    let data: Vec<TopicElementDto> = elements.into_iter().map(|e| e.into_dto()).collect();

    Ok(Json(ApiResponse::new("Elements reordered successfully", data)))
}

/// Get one element of a topic.
#[utoipa::path(
    get,
    path = "/api/topics/{id}/elements/{element_id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id"),
        ("element_id" = String, Path, description = "Element id")
    ),
    responses(
        (status = 200, description = "Element found", body = ApiResponse<TopicElementDto>),
        (status = 404, description = "Topic or element not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_element(
    State(state): State<AppState>,
    Path((topic_id, element_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let element = service.get_element(&topic_id, &element_id).await?;

    Ok(Json(ApiResponse::new(
        "Element retrieved successfully",
        element.into_dto(),
    )))
}

/// Update the text and/or picture of one element.
///
/// # Returns
/// - `200 OK` - The element after the update
/// - `404 Not Found` - No topic or element with that id; nothing is written
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/api/topics/{id}/elements/{element_id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id"),
        ("element_id" = String, Path, description = "Element id")
    ),
    request_body = ElementPatchDto,
    responses(
        (status = 200, description = "Element updated", body = ApiResponse<TopicElementDto>),
        (status = 404, description = "Topic or element not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_element(
    State(state): State<AppState>,
    Path((topic_id, element_id)): Path<(String, String)>,
    payload: Result<Json<ElementPatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = TopicService::new(&state.db);

    let element = service
        .update_element(&topic_id, &element_id, ElementPatch::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::new(
        "Element updated successfully",
        element.into_dto(),
    )))
}

/// Remove one element; the topic records the remaining count in `totalElements`.
///
/// # Returns
/// - `200 OK` - The topic after the removal
/// - `404 Not Found` - No topic or element with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/api/topics/{id}/elements/{element_id}",
    tag = TOPIC_TAG,
    params(
        ("id" = String, Path, description = "Topic id"),
        ("element_id" = String, Path, description = "Element id")
    ),
    responses(
        (status = 200, description = "Element removed", body = ApiResponse<TopicDto>),
        (status = 404, description = "Topic or element not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_element(
    State(state): State<AppState>,
    Path((topic_id, element_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topic = service.remove_element(&topic_id, &element_id).await?;

    Ok(Json(ApiResponse::new(
        format!("Element {} removed successfully", element_id),
        topic.into_dto(),
    )))
}

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        country::{
            ContinentSearchDto, CountryDto, CountryFieldsDto, CreateCountryDto, GeopointDto,
            UpdateCountryDto,
        },
        mission::{
            CityDto, CityPatchDto, CreateCityDto, CreateMissionDto, MissionCitiesDto, MissionDto,
            ReorderCitiesDto, UpdateMissionDto,
        },
        prayer_request::{CreatePrayerRequestDto, PrayerRequestDto, UpdatePrayerRequestDto},
        store::{ConfigInfoDto, StoreCollectionDto, StoreHealthDto},
        topic::{
            CreateElementDto, CreateTopicDto, ElementPatchDto, ReorderElementsDto, TopicDto,
            TopicElementDto, TopicElementsDto, UpdateElementDto, UpdateTopicDto,
        },
    },
    server::{
        controller::{
            config::{self, CONFIG_TAG},
            country::{self, COUNTRY_TAG},
            mission::{self, MISSION_TAG},
            prayer_request::{self, PRAYER_REQUEST_TAG},
            store::{self, STORE_TAG},
            topic::{self, TOPIC_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "inter-backend", description = "Topics, missions, countries and prayer requests"),
    paths(
        config::welcome,
        config::get_config_info,
        store::get_store_health,
        store::list_collection,
        store::seed_countries,
        country::create_country,
        country::get_countries,
        country::get_countries_by_continent,
        country::get_country,
        country::update_country,
        country::delete_country,
        topic::create_topic,
        topic::get_topics,
        topic::get_topic,
        topic::update_topic,
        topic::delete_topic,
        topic::add_element,
        topic::get_elements,
        topic::reorder_elements,
        topic::get_element,
        topic::update_element,
        topic::remove_element,
        mission::create_mission,
        mission::get_missions,
        mission::get_mission,
        mission::update_mission,
        mission::delete_mission,
        mission::add_city,
        mission::get_cities,
        mission::reorder_cities,
        mission::get_city,
        mission::update_city,
        mission::remove_city,
        prayer_request::create_prayer_request,
        prayer_request::get_prayer_requests,
        prayer_request::get_prayer_request,
        prayer_request::update_prayer_request,
        prayer_request::delete_prayer_request,
    ),
    components(schemas(
        ErrorDto,
        DeletedDto,
        ConfigInfoDto,
        StoreHealthDto,
        StoreCollectionDto,
        GeopointDto,
        CountryFieldsDto,
        CreateCountryDto,
        UpdateCountryDto,
        CountryDto,
        ContinentSearchDto,
        TopicElementDto,
        TopicDto,
        CreateElementDto,
        CreateTopicDto,
        UpdateElementDto,
        UpdateTopicDto,
        ElementPatchDto,
        ReorderElementsDto,
        TopicElementsDto,
        CityDto,
        MissionDto,
        CreateCityDto,
        CreateMissionDto,
        UpdateMissionDto,
        CityPatchDto,
        ReorderCitiesDto,
        MissionCitiesDto,
        PrayerRequestDto,
        CreatePrayerRequestDto,
        UpdatePrayerRequestDto,
    )),
    tags(
        (name = CONFIG_TAG, description = "Service greeting and configuration summary"),
        (name = STORE_TAG, description = "Document store diagnostics"),
        (name = COUNTRY_TAG, description = "Country management"),
        (name = TOPIC_TAG, description = "Topics and their ordered elements"),
        (name = MISSION_TAG, description = "Missions and their ordered cities"),
        (name = PRAYER_REQUEST_TAG, description = "Prayer request management"),
    )
)]
pub struct ApiDoc;

/// Builds the API router with every route under `/api`.
///
/// Unmatched routes fall through to [`route_not_found`]. CORS is permissive and every
/// request is traced.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(config::welcome))
        .route("/config", get(config::welcome))
        .route("/config/info", get(config::get_config_info))
        .route("/store/health", get(store::get_store_health))
        .route("/store/collections/{collection}", get(store::list_collection))
        .route("/store/seed/countries", post(store::seed_countries))
        .route(
            "/countries",
            post(country::create_country).get(country::get_countries),
        )
        .route(
            "/countries/continent/{continent}",
            get(country::get_countries_by_continent),
        )
        .route(
            "/countries/{id}",
            get(country::get_country)
                .patch(country::update_country)
                .delete(country::delete_country),
        )
        .route("/topics", post(topic::create_topic).get(topic::get_topics))
        .route(
            "/topics/{id}",
            get(topic::get_topic)
                .patch(topic::update_topic)
                .delete(topic::delete_topic),
        )
        .route(
            "/topics/{id}/elements",
            post(topic::add_element).get(topic::get_elements),
        )
        .route(
            "/topics/{id}/elements/reorder",
            patch(topic::reorder_elements),
        )
        .route(
            "/topics/{id}/elements/{element_id}",
            get(topic::get_element)
                .patch(topic::update_element)
                .delete(topic::remove_element),
        )
        .route(
            "/missions",
            post(mission::create_mission).get(mission::get_missions),
        )
        .route(
            "/missions/{id}",
            get(mission::get_mission)
                .patch(mission::update_mission)
                .delete(mission::delete_mission),
        )
        .route(
            "/missions/{id}/cities",
            post(mission::add_city).get(mission::get_cities),
        )
        .route(
            "/missions/{id}/cities/reorder",
            patch(mission::reorder_cities),
        )
        .route(
            "/missions/{id}/cities/{city_id}",
            get(mission::get_city)
                .patch(mission::update_city)
                .delete(mission::remove_city),
        )
        .route(
            "/prayer-requests",
            post(prayer_request::create_prayer_request).get(prayer_request::get_prayer_requests),
        )
        .route(
            "/prayer-requests/{id}",
            get(prayer_request::get_prayer_request)
                .patch(prayer_request::update_prayer_request)
                .delete(prayer_request::delete_prayer_request),
        );

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Uniform 404 for requests no route matches.
async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::new(
            StatusCode::NOT_FOUND,
            format!("Route {} {} not found", method, uri.path()),
        )),
    )
}

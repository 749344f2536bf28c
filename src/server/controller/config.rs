use axum::{extract::State, response::IntoResponse, Json};

use crate::{model::store::ConfigInfoDto, server::state::AppState};

/// Tag for grouping config endpoints in OpenAPI documentation
pub static CONFIG_TAG: &str = "config";

/// Greeting served at the API root.
#[utoipa::path(
    get,
    path = "/api",
    tag = CONFIG_TAG,
    responses(
        (status = 200, description = "Greeting", body = String)
    ),
)]
pub async fn welcome() -> &'static str {
    "Welcome to the backend!"
}

/// Get the runtime configuration summary.
///
/// Reports the environment name and port the process was started with. Connection
/// strings are never included.
///
/// # Returns
/// - `200 OK` - Configuration summary
#[utoipa::path(
    get,
    path = "/api/config/info",
    tag = CONFIG_TAG,
    responses(
        (status = 200, description = "Configuration summary", body = ConfigInfoDto)
    ),
)]
pub async fn get_config_info(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;

    Json(ConfigInfoDto {
        environment: config.environment.to_string(),
        port: config.port,
        is_production: config.is_production(),
    })
}

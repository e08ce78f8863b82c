use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::{DEFAULT_LOCATION_ID, JSON_CONTENT_TYPE, PROVINCE};
use crate::error::error_response;
use crate::locations;
use crate::models::LocationList;
use crate::service::WeatherService;

pub fn router(service: WeatherService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(get_weather))
        .route("/api/weather", get(get_weather))
        .route("/api/locations", get(get_locations))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(service)
}

pub async fn run(host: &str, port: u16, service: WeatherService) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    tracing::info!("Weather endpoint listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .await
        .context("HTTP server failed")
}

async fn get_weather(
    State(service): State<WeatherService>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::error!("Rejected query string: {}", rejection);
            return error_response();
        }
    };
    let location_id = requested_location(&pairs);

    match service.get_weather_report(location_id).await {
        Ok(report) => json_response(StatusCode::OK, &report),
        Err(e) => e.into_response(),
    }
}

/// Last `location_id` wins; absent or empty means the default
fn requested_location(pairs: &[(String, String)]) -> &str {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == "location_id")
        .map(|(_, value)| value.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_LOCATION_ID)
}

async fn get_locations() -> Response {
    let list = LocationList {
        province: PROVINCE,
        locations: locations::all(),
    };
    json_response(StatusCode::OK, &list)
}

async fn health_check() -> Response {
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            error_response()
        }
    }
}

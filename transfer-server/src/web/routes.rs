//! HTTP route handlers.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use futures::future::join_all;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::warn;

use crate::planner::{FeedSet, compute_recommendation};

use super::dto::{ErrorResponse, RecommendationResponse};
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory (the
/// single-page UI). CORS headers are attached to every response so
/// the page can be hosted separately from the API.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/recommendation", get(recommendation))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute and return the current transfer recommendation.
///
/// Fetches the train board and all configured bus boards concurrently,
/// then runs the pure planner over whatever arrived. A failed train
/// fetch is a hard error; a failed bus fetch only omits that feed.
async fn recommendation(State(state): State<AppState>) -> Result<Response, AppError> {
    let now = Utc::now();
    let plan = &state.plan;

    let train_fut = state.feeds.get_train_departures(&plan.origin, now);
    let bus_futs = join_all(
        plan.routes
            .iter()
            .map(|r| state.feeds.get_bus_departures(&r.stop, &r.route, now)),
    );

    let (train, bus_results) = tokio::join!(train_fut, bus_futs);

    let train = train.map_err(|e| AppError::Upstream {
        message: e.to_string(),
    })?;

    let mut buses = HashMap::new();
    for (route_cfg, result) in plan.routes.iter().zip(bus_results) {
        match result {
            Ok(feed) => {
                buses.insert(
                    (route_cfg.station.clone(), route_cfg.route.clone()),
                    (*feed).clone(),
                );
            }
            Err(e) => {
                // Degrade to the feeds we do have.
                warn!(route = %route_cfg.route, stop = %route_cfg.stop, error = %e,
                    "bus feed unavailable, omitting its itineraries");
            }
        }
    }

    let feeds = FeedSet {
        train: (*train).clone(),
        buses,
    };

    let result = compute_recommendation(now, &feeds, plan);

    Ok(Json(RecommendationResponse::from_recommendation(&result)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Upstream { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Upstream { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream fetch failed".to_string(),
                message,
            ),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error, message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upstream_error_maps_to_500_with_error_and_message() {
        let err = AppError::Upstream {
            message: "API error 503: down".to_string(),
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "upstream fetch failed");
        assert!(json["message"].as_str().unwrap().contains("503"));
    }
}

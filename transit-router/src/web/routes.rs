//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::catalogue::{BusInfo, StopInfo};
use crate::network::Network;
use crate::requests::{Document, RequestError, RequestHandler, StatRequest, StatResponse};
use crate::router::Route;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/buses/:name", get(bus_info))
        .route("/stops/:name", get(stop_info))
        .route("/route", get(route))
        .route("/network", post(replace_network))
        .route("/stats", post(stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn bus_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusInfo>, AppError> {
    let snapshot = state.snapshot().await;
    snapshot
        .network()
        .bus_info(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown bus: {name}"),
        })
}

async fn stop_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopInfo>, AppError> {
    let snapshot = state.snapshot().await;
    snapshot
        .network()
        .stop_info(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown stop: {name}"),
        })
}

/// Fastest route between two stops, served from the snapshot's cache.
async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Route>, AppError> {
    let snapshot = state.snapshot().await;
    let route = snapshot
        .route(&query.from, &query.to)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route from {} to {}", query.from, query.to),
        })?;

    Ok(Json(Route::clone(&route)))
}

/// Build a new network from the body and swap it in.
///
/// The build runs on the blocking pool; queries keep using the old network
/// until it finishes.
async fn replace_network(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<Json<NetworkSummary>, AppError> {
    let network = tokio::task::spawn_blocking(move || Network::from_document(&document))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Network build panicked: {e}"),
        })??;

    let summary = NetworkSummary::of(&network);
    state.swap(network).await;
    Ok(Json(summary))
}

/// Answer a batch of stat requests against the current network.
async fn stats(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Json<Vec<StatResponse>> {
    let snapshot = state.snapshot().await;
    Json(RequestHandler::new(snapshot.network()).answer_all(&requests))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Io(_) => AppError::Internal {
                message: e.to_string(),
            },
            RequestError::Json(_) | RequestError::Catalogue(_) | RequestError::Router(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::requests::{BaseRequest, StatQuery};
    use crate::router::RouterError;
    use serde_json::json;

    fn document() -> Document {
        serde_json::from_value(json!({
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0,
                 "road_distances": {"B": 2000}},
                {"type": "Stop", "name": "B", "latitude": 55.02, "longitude": 37.0},
                {"type": "Stop", "name": "C", "latitude": 55.04, "longitude": 37.0},
                {"type": "Bus", "name": "12", "stops": ["A", "B"]}
            ],
            "routing_settings": {"bus_wait_time": 4, "bus_velocity": 60}
        }))
        .unwrap()
    }

    fn state() -> AppState {
        let network = Network::from_document(&document()).unwrap();
        AppState::new(network, CacheConfig::default())
    }

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn bus_and_stop_lookups() {
        let state = state();

        let Json(info) = bus_info(State(state.clone()), Path("12".into())).await.unwrap();
        assert_eq!(info.stop_count, 3);

        let Json(info) = stop_info(State(state.clone()), Path("C".into())).await.unwrap();
        assert!(info.buses.is_empty());

        let err = bus_info(State(state.clone()), Path("99".into())).await.unwrap_err();
        assert_eq!(status(err), StatusCode::NOT_FOUND);

        let err = stop_info(State(state), Path("Z".into())).await.unwrap_err();
        assert_eq!(status(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn route_lookup() {
        let state = state();
        let query = |from: &str, to: &str| {
            Query(RouteQuery {
                from: from.into(),
                to: to.into(),
            })
        };

        let Json(found) = route(State(state.clone()), query("A", "B")).await.unwrap();
        assert_eq!(found.total_time, 6.0);
        assert_eq!(found.bus_count(), 1);

        let err = route(State(state), query("A", "C")).await.unwrap_err();
        assert_eq!(status(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn replacing_the_network() {
        let state = AppState::new(Network::empty(), CacheConfig::default());

        let Json(summary) = replace_network(State(state.clone()), Json(document()))
            .await
            .unwrap();
        assert_eq!(
            summary,
            NetworkSummary {
                stops: 3,
                buses: 1,
                routed_stops: 2
            }
        );

        let Json(found) = route(
            State(state.clone()),
            Query(RouteQuery {
                from: "B".into(),
                to: "A".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(found.total_time, 6.0);
    }

    #[tokio::test]
    async fn bad_network_keeps_the_old_one() {
        let state = state();
        let mut bad = document();
        bad.base_requests.push(BaseRequest::Bus(crate::requests::BusRequest {
            name: "13".into(),
            stops: vec!["Ghost".into()],
            is_roundtrip: true,
        }));

        let err = replace_network(State(state.clone()), Json(bad)).await.unwrap_err();
        assert_eq!(status(err), StatusCode::BAD_REQUEST);

        let snapshot = state.snapshot().await;
        assert!(snapshot.network().bus_info("12").is_some());
    }

    #[tokio::test]
    async fn stats_batch() {
        let Json(responses) = stats(
            State(state()),
            Json(vec![
                StatRequest {
                    id: 1,
                    query: StatQuery::Stop { name: "A".into() },
                },
                StatRequest {
                    id: 2,
                    query: StatQuery::Unsupported,
                },
            ]),
        )
        .await;

        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!([{"request_id": 1, "buses": ["12"]}])
        );
    }

    #[test]
    fn request_errors_map_to_status() {
        let err = AppError::from(RequestError::Router(RouterError::InvalidWaitTime(0)));
        assert_eq!(status(err), StatusCode::BAD_REQUEST);

        let io = std::io::Error::other("disk gone");
        assert_eq!(
            status(AppError::from(RequestError::Io(io))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

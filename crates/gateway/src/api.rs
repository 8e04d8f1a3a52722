//! HTTP surface of the validation gateway: one POST route per lifecycle hook
//! and record category.
//!
//! Failing verdicts are successful calls (status 200). Error responses are
//! reserved for the operational channel: undecodable payloads and remote
//! metadata faults.

use {
    axum::{
        Router,
        extract::{DefaultBodyLimit, MatchedPath, Request},
        http::StatusCode,
        middleware::{self, Next},
        response::{IntoResponse, Json, Response},
    },
    serde::{Deserialize, Serialize},
    std::{borrow::Cow, sync::Arc},
    tower_http::{cors::CorsLayer, trace::TraceLayer},
    validation::RecordValidator,
};

mod admin_records;
mod game_binary_records;
mod game_records;
mod player_binary_records;
mod player_records;

/// Centralized application state shared across all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<RecordValidator>,
}

const MAX_JSON_BODY_PAYLOAD: u64 = 1024 * 16;

pub fn handle_all_routes(validator: Arc<RecordValidator>) -> Router {
    let state = Arc::new(AppState { validator });

    let api_router = Router::new()
        .route(
            "/v1/game-records/before-write",
            axum::routing::post(game_records::before_write),
        )
        .route(
            "/v1/game-records/after-read",
            axum::routing::post(game_records::after_read),
        )
        .route(
            "/v1/game-records/after-bulk-read",
            axum::routing::post(game_records::after_bulk_read),
        )
        .route(
            "/v1/player-records/before-write",
            axum::routing::post(player_records::before_write),
        )
        .route(
            "/v1/player-records/after-read",
            axum::routing::post(player_records::after_read),
        )
        .route(
            "/v1/player-records/after-bulk-read",
            axum::routing::post(player_records::after_bulk_read),
        )
        .route(
            "/v1/admin/game-records/before-write",
            axum::routing::post(admin_records::before_write_game_record),
        )
        .route(
            "/v1/admin/player-records/before-write",
            axum::routing::post(admin_records::before_write_player_record),
        )
        .route(
            "/v1/game-binary-records/before-write",
            axum::routing::post(game_binary_records::before_write),
        )
        .route(
            "/v1/game-binary-records/after-read",
            axum::routing::post(game_binary_records::after_read),
        )
        .route(
            "/v1/game-binary-records/after-bulk-read",
            axum::routing::post(game_binary_records::after_bulk_read),
        )
        .route(
            "/v1/player-binary-records/before-write",
            axum::routing::post(player_binary_records::before_write),
        )
        .route(
            "/v1/player-binary-records/after-read",
            axum::routing::post(player_binary_records::after_read),
        )
        .route(
            "/v1/player-binary-records/after-bulk-read",
            axum::routing::post(player_binary_records::after_bulk_read),
        )
        .with_state(state)
        .layer(middleware::from_fn(with_request_metrics));

    finalize_router(api_router)
}

/// Middleware tracking a request counter per matched route and status code.
async fn with_request_metrics(req: Request, next: Next) -> Response {
    let metrics = ApiMetrics::instance(observe::metrics::get_storage_registry()).unwrap();

    let method = req.method().as_str().to_owned();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unknown".to_owned());

    let route = format!("{method} {matched_path}");
    let response = next.run(req).await;
    metrics
        .requests_complete
        .with_label_values(&[route.as_str(), response.status().as_str()])
        .inc();

    response
}

#[derive(prometheus_metric_storage::MetricStorage, Clone, Debug)]
#[metric(subsystem = "api")]
struct ApiMetrics {
    /// Number of completed API requests.
    #[metric(labels("route", "status_code"))]
    requests_complete: prometheus::IntCounterVec,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub error_type: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

pub fn error(error_type: &'static str, description: impl AsRef<str>) -> Json<Error> {
    Json(Error {
        error_type: error_type.into(),
        description: Cow::Owned(description.as_ref().to_owned()),
    })
}

// Newtype wrapper for the core's operational errors to allow IntoResponse
// implementation (orphan rules prevent implementing IntoResponse directly on
// external types).
pub(crate) struct ValidationErrorWrapper(pub(crate) validation::Error);

impl IntoResponse for ValidationErrorWrapper {
    fn into_response(self) -> Response {
        match self.0 {
            err @ validation::Error::Decode { .. } => {
                tracing::debug!(?err, "rejecting undecodable record payload");
                (
                    StatusCode::BAD_REQUEST,
                    error("InvalidPayload", err.to_string()),
                )
                    .into_response()
            }
            err @ validation::Error::SizeFetch(_) => {
                tracing::warn!(?err, "unable to determine remote binary size");
                (
                    StatusCode::BAD_GATEWAY,
                    error("BinarySizeUnavailable", err.to_string()),
                )
                    .into_response()
            }
        }
    }
}

/// Sets up the metrics endpoint, cors and log tracing for all routes. Takes
/// a router with versioned routes and nests it under /api.
fn finalize_router(api_router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(vec![axum::http::Method::POST, axum::http::Method::OPTIONS])
        .allow_headers(vec![
            axum::http::header::ORIGIN,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .nest("/api", api_router)
        .route("/metrics", axum::routing::get(metrics_handler))
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_PAYLOAD as usize))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn metrics_handler() -> String {
    observe::metrics::encode(observe::metrics::get_registry())
}

#[cfg(test)]
pub(crate) async fn response_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[cfg(test)]
pub(crate) fn test_router() -> Router {
    test_router_with(Arc::new(
        validation::size_fetching::MockBinarySizeFetching::new(),
    ))
}

#[cfg(test)]
pub(crate) fn test_router_with(
    size_fetcher: Arc<dyn validation::size_fetching::BinarySizeFetching>,
) -> Router {
    handle_all_routes(Arc::new(RecordValidator::new(
        validation::Limits::default(),
        size_fetcher,
    )))
}

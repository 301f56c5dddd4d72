pub mod probe;
pub mod submit;

pub use probe::probe;
pub use submit::submit;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::constants::MAX_SUBMISSION_BYTES;
use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let log_requests = state.config.log_requests;

    let app = Router::new()
        .route("/", get(probe).post(submit))
        .layer(DefaultBodyLimit::max(MAX_SUBMISSION_BYTES))
        .layer(cors)
        .with_state(state);

    if log_requests {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

fn cors_layer(config: &crate::Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

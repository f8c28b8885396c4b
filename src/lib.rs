pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/auth", post(routes::auth::authenticate))
        .layer(TraceLayer::new_for_http())
}

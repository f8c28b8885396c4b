use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Errors raised while turning [`crate::auth::AuthOptions`] into an authenticator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("auth mode \"api\" requires a non-empty api endpoint")]
    MissingApiEndpoint,
    #[error("unknown auth mode: {0}")]
    UnknownMode(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

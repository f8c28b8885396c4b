use axum::{body::Bytes, Json};
use serde::Serialize;

use crate::error::ApiError;

/// Identifier handed back for every accepted request.
pub const STUB_USER_ID: &str = "user123";

#[derive(Serialize)]
pub struct AuthResponse {
    pub ok: bool,
    pub id: String,
}

/// POST /auth
///
/// Accepts any JSON value, logs it, and acknowledges with a fixed user id.
/// The body is read as raw bytes so callers that omit `Content-Type` are still served.
pub async fn authenticate(body: Bytes) -> Result<Json<AuthResponse>, ApiError> {
    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting auth request with malformed JSON body");
        ApiError::BadRequest(format!("invalid JSON body: {}", e))
    })?;

    tracing::info!(%payload, "auth request received");

    Ok(Json(AuthResponse {
        ok: true,
        id: STUB_USER_ID.to_string(),
    }))
}

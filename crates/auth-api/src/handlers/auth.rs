// ============================================================================
// Auth API - Session Handlers
// File: crates/auth-api/src/handlers/auth.rs
// ============================================================================
//! Login, logout, and session check handlers

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::response::{LoginResponse, LogoutResponse, SessionStatusResponse};
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    /// Any JSON value; only its truthiness matters.
    pub password: Option<Value>,
}

/// Logout request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub session_id: Option<String>,
}

/// Bodies are parsed as JSON whatever the request content type says. A body
/// that cannot be buffered (over the size limit, aborted) counts as malformed.
fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
    let body = body.map_err(|e| {
        warn!("Failed to read request body: {}", e);
        ApiError::InvalidRequestFormat
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected request body: {}", e);
        ApiError::InvalidRequestFormat
    })
}

/// Text handed to the session service for a password value. Falsy JSON
/// (`null`, `false`, `0`, `""`) becomes empty, anything else is non-empty.
fn password_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Login handler - POST /api/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload: LoginRequest = parse_body(body)?;
    let password = password_text(payload.password.as_ref());

    let result = state
        .session_service
        .login(payload.email.as_deref().unwrap_or_default(), &password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        session_id: result.session_id,
        user: result.user.into(),
    }))
}

/// Logout handler - POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LogoutResponse>, ApiError> {
    let payload: LogoutRequest = parse_body(body)?;

    state
        .session_service
        .logout(payload.session_id.as_deref())
        .await?;

    Ok(Json(LogoutResponse { success: true }))
}

/// Session check handler - GET /api/check-session?sessionId=ID
pub async fn check_session(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SessionStatusResponse>, ApiError> {
    let user = state
        .session_service
        .check_session(params.get("sessionId").map(String::as_str))
        .await?;

    Ok(Json(SessionStatusResponse::from_user(user)))
}

/// Unknown API route or method
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound
}

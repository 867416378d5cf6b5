//! Request body validation middleware
//!
//! Each validator buffers the body, checks it against its schema and either
//! rejects the request with a 400 or hands the untouched bytes to the next
//! handler. Bodies not sent as JSON are validated as an empty object.

use axum::{
    body::{self, Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::AppError, state::AppState, validation::RequestSchema};

/// Signup body validation
pub async fn signup_validation(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let limit = state.config().server.max_body_bytes;
    validate_request(&state.schemas().signup, limit, request, next).await
}

/// Login body validation
pub async fn login_validation(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let limit = state.config().server.max_body_bytes;
    validate_request(&state.schemas().login, limit, request, next).await
}

async fn validate_request(
    schema: &RequestSchema,
    limit: usize,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path().to_string();

    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        debug!(path = %path, limit, "Request body over limit");
        return Err(AppError::PayloadTooLarge(limit));
    }

    let bytes = body::to_bytes(body, limit).await.map_err(|e| {
        debug!(path = %path, error = %e, "Failed to read request body");
        AppError::InvalidInput("Request body could not be read".to_string())
    })?;

    let payload = if is_json(&parts.headers) {
        parse_payload(&bytes)?
    } else {
        Value::Object(Map::new())
    };

    if let Err(failure) = schema.check(&payload) {
        debug!(
            schema = schema.name(),
            path = %path,
            violations = failure.details().len(),
            "Request body rejected"
        );
        return Err(failure.into());
    }

    debug!(schema = schema.name(), path = %path, "Request body accepted");
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// An empty body validates as an empty object
fn parse_payload(bytes: &Bytes) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::InvalidInput(format!("Malformed JSON body: {}", e)))
}

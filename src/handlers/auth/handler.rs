//! Authentication handler implementations

use axum::{Json, http::StatusCode};
use tracing::info;

use crate::error::AppResult;

use super::{
    request::{LoginRequest, SignupRequest},
    response::{LoginAcceptedResponse, SignupAcceptedResponse},
};

/// Accept a validated signup body
pub async fn signup(
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupAcceptedResponse>)> {
    info!(college_email = %payload.college_email, "Signup request accepted");

    let response = SignupAcceptedResponse {
        message: "Signup request accepted".to_string(),
        full_name: payload.full_name,
        college_email: payload.college_email,
    };

    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Accept a validated login body
pub async fn login(
    Json(payload): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginAcceptedResponse>)> {
    info!(college_email = %payload.college_email, "Login request accepted");

    let response = LoginAcceptedResponse {
        message: "Login request accepted".to_string(),
        college_email: payload.college_email,
    };

    Ok((StatusCode::ACCEPTED, Json(response)))
}

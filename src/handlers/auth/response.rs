//! Authentication response DTOs

use serde::Serialize;

/// Acknowledgement for a signup body that passed validation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupAcceptedResponse {
    pub message: String,
    pub full_name: String,
    pub college_email: String,
}

/// Acknowledgement for a login body that passed validation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAcceptedResponse {
    pub message: String,
    pub college_email: String,
}

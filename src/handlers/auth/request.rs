//! Authentication request DTOs
//!
//! These mirror bodies that already passed validation, so they carry no
//! constraints of their own.

use serde::Deserialize;
use serde_json::Value;

/// Signup request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    /// Number or numeric string, as sent by the client
    pub graduation_year: Value,
    pub college_email: String,
    pub course: String,
    pub usn: String,
    pub field_of_study: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub password: String,
    pub confirm_password: Value,
    pub profile_photo: Option<Value>,
}

/// Login request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub college_email: String,
    pub password: String,
}

//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default maximum accepted request body size in bytes (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Top-level message of every validation rejection
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// Earliest accepted graduation year
pub const MIN_GRADUATION_YEAR: i64 = 2024;

/// How many years past the current one a graduation year may lie
pub const GRADUATION_YEARS_AHEAD: i64 = 50;

/// Minimum full name length (characters)
pub const MIN_FULL_NAME_LENGTH: u64 = 3;

/// Minimum course length (characters)
pub const MIN_COURSE_LENGTH: u64 = 2;

/// Minimum USN length (characters)
pub const MIN_USN_LENGTH: u64 = 2;

/// Minimum field of study length (characters)
pub const MIN_FIELD_OF_STUDY_LENGTH: u64 = 2;

/// Minimum password length (characters)
pub const MIN_PASSWORD_LENGTH: u64 = 2;

/// Request body field names, as sent by the web client
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const GRADUATION_YEAR: &str = "graduationYear";
    pub const COLLEGE_EMAIL: &str = "collegeEmail";
    pub const COURSE: &str = "course";
    pub const USN: &str = "usn";
    pub const FIELD_OF_STUDY: &str = "fieldOfStudy";
    pub const LINKEDIN: &str = "linkedin";
    pub const GITHUB: &str = "github";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const PROFILE_PHOTO: &str = "profilePhoto";
}

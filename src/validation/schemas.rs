//! Signup and login request schemas
//!
//! Several messages quote a different minimum than the rule enforces (USN,
//! field of study, login password). The enforced minimums are the ones the
//! web client is built against, so both are kept as they are.

use crate::constants::{
    GRADUATION_YEARS_AHEAD, MIN_COURSE_LENGTH, MIN_FIELD_OF_STUDY_LENGTH, MIN_FULL_NAME_LENGTH,
    MIN_GRADUATION_YEAR, MIN_PASSWORD_LENGTH, MIN_USN_LENGTH, fields,
};

use super::{FieldConstraint, Limit, RequestSchema};

/// Schemas for every validated endpoint, built once at startup
#[derive(Debug, Clone)]
pub struct ValidationSchemas {
    pub signup: RequestSchema,
    pub login: RequestSchema,
}

impl ValidationSchemas {
    pub fn new() -> Self {
        Self {
            signup: signup_schema(),
            login: login_schema(),
        }
    }
}

impl Default for ValidationSchemas {
    fn default() -> Self {
        Self::new()
    }
}

fn college_email() -> FieldConstraint {
    FieldConstraint::string(fields::COLLEGE_EMAIL)
        .required("College Email is required")
        .type_message("College Email must be a string")
        .email("Please provide a valid email address")
}

/// Signup body: profile details, optional social links and a confirmed password
pub fn signup_schema() -> RequestSchema {
    RequestSchema::new("signup")
        .field(
            FieldConstraint::string(fields::FULL_NAME)
                .required("Full Name is required")
                .type_message("Full Name must be a string")
                .min_length(MIN_FULL_NAME_LENGTH, "Full Name must be at least 3 characters long"),
        )
        .field(
            FieldConstraint::number(fields::GRADUATION_YEAR)
                .required("Graduation year is required")
                .type_message("Graduation year must be a valid number")
                .integer("Graduation year must be an integer")
                .min(
                    Limit::Fixed(MIN_GRADUATION_YEAR),
                    "Graduation year must be at least 2024",
                )
                .max(
                    Limit::CurrentYearPlus(GRADUATION_YEARS_AHEAD),
                    "Graduation year must be a valid future year",
                ),
        )
        .field(college_email())
        .field(
            FieldConstraint::string(fields::COURSE)
                .required("Course is required")
                .type_message("Course must be a string")
                .min_length(MIN_COURSE_LENGTH, "Course must be at least 2 characters long"),
        )
        .field(
            FieldConstraint::string(fields::USN)
                .required("USN is required")
                .type_message("USN must be a string")
                .min_length(MIN_USN_LENGTH, "USN must be at least 8 characters long"),
        )
        .field(
            FieldConstraint::string(fields::FIELD_OF_STUDY)
                .required("Field of Study is required")
                .type_message("Field of Study must be a string")
                .min_length(
                    MIN_FIELD_OF_STUDY_LENGTH,
                    "Field of Study must be at least 3 characters long",
                ),
        )
        .field(
            FieldConstraint::string(fields::LINKEDIN)
                .type_message("LinkedIn must be a string")
                .uri("LinkedIn must be a valid URL"),
        )
        .field(
            FieldConstraint::string(fields::GITHUB)
                .type_message("GitHub must be a string")
                .uri("GitHub must be a valid URL"),
        )
        .field(
            FieldConstraint::string(fields::PASSWORD)
                .required("Password is required")
                .type_message("Password must be a string")
                .min_length(MIN_PASSWORD_LENGTH, "Password must be at least 2 characters long"),
        )
        .field(
            FieldConstraint::any(fields::CONFIRM_PASSWORD)
                .required("Confirm password is required")
                .equals_field(fields::PASSWORD, "Confirm password must match password"),
        )
        .field(FieldConstraint::any(fields::PROFILE_PHOTO))
}

/// Login body: college email and password
pub fn login_schema() -> RequestSchema {
    RequestSchema::new("login")
        .field(college_email())
        .field(
            FieldConstraint::string(fields::PASSWORD)
                .required("Password is required")
                .type_message("Password must be a string")
                .min_length(MIN_PASSWORD_LENGTH, "Password must be at least 6 characters long"),
        )
}

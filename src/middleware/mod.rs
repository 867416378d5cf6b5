//! HTTP middleware

pub mod logging;
pub mod validation;

pub use logging::logging_middleware;
pub use validation::{login_validation, signup_validation};

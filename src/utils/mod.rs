//! Utility functions

pub mod time;
pub mod validation;

pub use time::current_year;
pub use validation::{is_valid_email, is_valid_uri, utf16_length};

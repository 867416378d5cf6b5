//! Input validation utilities

use validator::{ValidateEmail, ValidateUrl};

/// Check email syntax without restricting the top-level domain
///
/// The domain must still have at least two dot-separated segments, so
/// `user@localhost` is rejected while `a@b.com` passes.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            let segments: Vec<&str> = domain.split('.').collect();
            segments.len() >= 2 && segments.iter().all(|s| !s.is_empty())
        }
        None => false,
    }
}

/// Check that a string is an absolute URI with a scheme
pub fn is_valid_uri(uri: &str) -> bool {
    uri.validate_url()
}

/// Length in UTF-16 code units, as web clients count it
///
/// Characters outside the Basic Multilingual Plane (most emoji) count as two.
pub fn utf16_length(input: &str) -> u64 {
    input.encode_utf16().count() as u64
}

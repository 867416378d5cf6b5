//! Time utilities

use chrono::{Datelike, Utc};

/// Current calendar year in UTC
pub fn current_year() -> i64 {
    i64::from(Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_plausible() {
        let year = current_year();
        assert!(year >= 2024);
        assert!(year < 3000);
    }
}

//! Database utility functions.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with microsecond precision.
///
/// Microseconds keep consecutive writes distinguishable, which the
/// `updated_at DESC` list order depends on.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let ts = current_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn timestamps_sort_lexicographically() {
        let a = current_timestamp();
        let b = current_timestamp();
        assert!(a <= b);
    }
}

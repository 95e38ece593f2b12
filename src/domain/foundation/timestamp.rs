//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-readable format used in tables and export headers.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact format used in export filenames.
pub const FILENAME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Formats as `YYYY-MM-DD HH:MM:SS`.
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Formats as `YYYYMMDD_HHMMSS`.
    pub fn compact(&self) -> String {
        self.0.format(FILENAME_FORMAT).to_string()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn display_uses_date_time_with_seconds() {
        assert_eq!(fixed().display(), "2024-03-07 09:05:01");
    }

    #[test]
    fn compact_is_filename_safe() {
        assert_eq!(fixed().compact(), "20240307_090501");
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
        assert_eq!(back.as_datetime().year(), 2024);
    }

    #[test]
    fn is_before_compares_instants() {
        let earlier = fixed();
        let later = Timestamp::now();
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }
}

//! Score value object for 1-10 slider ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Values strictly above the midline count as "high" on an axis.
pub const MIDLINE: u8 = 5;

/// Lowest accepted score.
pub const MIN_SCORE: u8 = 1;

/// Highest accepted score.
pub const MAX_SCORE: u8 = 10;

/// Integer rating on a 1 (lowest) to 10 (highest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Creates a Score, returning error if outside 1-10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        Self::for_field("score", value)
    }

    /// Like [`Score::try_new`] but names the field in the error.
    pub fn for_field(field: &str, value: u8) -> Result<Self, ValidationError> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                field,
                MIN_SCORE as i32,
                MAX_SCORE as i32,
                value as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when the score is strictly above the midline.
    pub fn is_high(&self) -> bool {
        self.0 > MIDLINE
    }

    /// True when the score sits within `band` of the midline.
    pub fn is_near_midline(&self, band: u8) -> bool {
        self.0.abs_diff(MIDLINE) <= band
    }
}

impl Default for Score {
    /// Sliders start at the midline.
    fn default() -> Self {
        Self(MIDLINE)
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_full_range() {
        for v in 1..=10 {
            assert_eq!(Score::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn score_rejects_zero_and_eleven() {
        assert!(Score::try_new(0).is_err());
        assert!(Score::try_new(11).is_err());
    }

    #[test]
    fn for_field_names_field_in_error() {
        let err = Score::for_field("power", 42).unwrap_err();
        assert_eq!(err.field(), "power");
    }

    #[test]
    fn midline_is_not_high() {
        assert!(!Score::try_new(5).unwrap().is_high());
        assert!(Score::try_new(6).unwrap().is_high());
    }

    #[test]
    fn near_midline_band_is_inclusive() {
        assert!(Score::try_new(4).unwrap().is_near_midline(1));
        assert!(Score::try_new(6).unwrap().is_near_midline(1));
        assert!(!Score::try_new(7).unwrap().is_near_midline(1));
        assert!(!Score::try_new(3).unwrap().is_near_midline(1));
    }

    #[test]
    fn default_is_midline() {
        assert_eq!(Score::default().value(), MIDLINE);
    }

    #[test]
    fn score_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Score::try_new(8).unwrap()).unwrap();
        assert_eq!(json, "8");
    }

    #[test]
    fn score_deserialization_validates_range() {
        assert!(serde_json::from_str::<Score>("7").is_ok());
        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("12").is_err());
    }
}

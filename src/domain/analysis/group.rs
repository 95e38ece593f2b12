//! Stakeholder groups - the four power/attention quadrants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Score, ValidationError};

/// Management quadrant for a stakeholder rated on power and a paired axis.
///
/// "High" means strictly above the midline on that axis, so a score of 5
/// always lands on the low side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StakeholderGroup {
    #[serde(rename = "Key Players")]
    KeyPlayers,
    #[serde(rename = "Keep Satisfied")]
    KeepSatisfied,
    #[serde(rename = "Keep Informed")]
    KeepInformed,
    #[serde(rename = "Monitor")]
    Monitor,
}

impl StakeholderGroup {
    /// Returns all groups in display order.
    pub fn all() -> &'static [StakeholderGroup] {
        &[
            StakeholderGroup::KeyPlayers,
            StakeholderGroup::KeepSatisfied,
            StakeholderGroup::KeepInformed,
            StakeholderGroup::Monitor,
        ]
    }

    /// Places a stakeholder by power and the paired axis score.
    pub fn classify(power: Score, other: Score) -> Self {
        match (power.is_high(), other.is_high()) {
            (true, true) => StakeholderGroup::KeyPlayers,
            (true, false) => StakeholderGroup::KeepSatisfied,
            (false, true) => StakeholderGroup::KeepInformed,
            (false, false) => StakeholderGroup::Monitor,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StakeholderGroup::KeyPlayers => "Key Players",
            StakeholderGroup::KeepSatisfied => "Keep Satisfied",
            StakeholderGroup::KeepInformed => "Keep Informed",
            StakeholderGroup::Monitor => "Monitor",
        }
    }

    /// Management strategy recommended for the quadrant.
    pub fn strategy(&self) -> &'static str {
        match self {
            StakeholderGroup::KeyPlayers => "Manage Closely",
            StakeholderGroup::KeepSatisfied => "Keep Satisfied",
            StakeholderGroup::KeepInformed => "Keep Informed",
            StakeholderGroup::Monitor => "Monitor",
        }
    }

    /// Short guidance shown next to the strategy.
    pub fn guidance(&self) -> &'static str {
        match self {
            StakeholderGroup::KeyPlayers => "Key players",
            StakeholderGroup::KeepSatisfied => "Important but passive",
            StakeholderGroup::KeepInformed => "Show consideration",
            StakeholderGroup::Monitor => "Minimal effort",
        }
    }
}

impl fmt::Display for StakeholderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StakeholderGroup {
    type Err = ValidationError;

    /// Accepts the display name or a slug such as `key-players`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        StakeholderGroup::all()
            .iter()
            .find(|g| g.display_name().eq_ignore_ascii_case(&normalized))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("group", format!("unknown stakeholder group '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    #[test]
    fn classify_covers_all_four_quadrants() {
        assert_eq!(StakeholderGroup::classify(score(8), score(9)), StakeholderGroup::KeyPlayers);
        assert_eq!(StakeholderGroup::classify(score(8), score(2)), StakeholderGroup::KeepSatisfied);
        assert_eq!(StakeholderGroup::classify(score(2), score(8)), StakeholderGroup::KeepInformed);
        assert_eq!(StakeholderGroup::classify(score(3), score(2)), StakeholderGroup::Monitor);
    }

    #[test]
    fn power_at_midline_is_low() {
        assert_eq!(StakeholderGroup::classify(score(5), score(7)), StakeholderGroup::KeepInformed);
        assert_eq!(StakeholderGroup::classify(score(6), score(5)), StakeholderGroup::KeepSatisfied);
    }

    #[test]
    fn parses_display_names_and_slugs() {
        assert_eq!("Key Players".parse::<StakeholderGroup>().unwrap(), StakeholderGroup::KeyPlayers);
        assert_eq!("keep-informed".parse::<StakeholderGroup>().unwrap(), StakeholderGroup::KeepInformed);
        assert_eq!("keep_satisfied".parse::<StakeholderGroup>().unwrap(), StakeholderGroup::KeepSatisfied);
        assert!("bystanders".parse::<StakeholderGroup>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&StakeholderGroup::KeepSatisfied).unwrap();
        assert_eq!(json, "\"Keep Satisfied\"");
    }
}

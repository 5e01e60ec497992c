use std::fmt::{self, Display};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::MeetupError;

/// The health condition an agent carries.
///
/// `Sick`, `Dying` and `Dead` lie along a severity axis; the `improve` and
/// `worsen` rule tables move a condition one step along it. `Healthy` and
/// `Dead` never change through a meeting, and an agent holding `Cure` keeps
/// it while improving whoever it meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Cure,
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl Condition {
    /// One step toward `Healthy`: `Sick` recovers, `Dying` stabilizes to
    /// `Sick`, everything else is a fixed point.
    #[must_use]
    pub fn improve(self) -> Condition {
        match self {
            Condition::Sick => Condition::Healthy,
            Condition::Dying => Condition::Sick,
            other => other,
        }
    }

    /// One step toward `Dead`: `Sick` deteriorates to `Dying`, `Dying` dies,
    /// everything else is a fixed point.
    #[must_use]
    pub fn worsen(self) -> Condition {
        match self {
            Condition::Sick => Condition::Dying,
            Condition::Dying => Condition::Dead,
            other => other,
        }
    }

    /// Whether an agent with this condition takes part in meetings. `Healthy`
    /// and `Dead` agents sit rounds out.
    #[must_use]
    pub fn participates(self) -> bool {
        matches!(self, Condition::Cure | Condition::Sick | Condition::Dying)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Cure => "CURE",
            Condition::Healthy => "HEALTHY",
            Condition::Sick => "SICK",
            Condition::Dying => "DYING",
            Condition::Dead => "DEAD",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = MeetupError;

    /// Parses a category name, case-insensitively. Any name outside the five
    /// variants fails fast with `MeetupError::InvalidCategory` rather than
    /// mapping to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CURE" => Ok(Condition::Cure),
            "HEALTHY" => Ok(Condition::Healthy),
            "SICK" => Ok(Condition::Sick),
            "DYING" => Ok(Condition::Dying),
            "DEAD" => Ok(Condition::Dead),
            _ => Err(MeetupError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Condition; 5] = [
        Condition::Cure,
        Condition::Healthy,
        Condition::Sick,
        Condition::Dying,
        Condition::Dead,
    ];

    #[test]
    fn test_improve_rule_table() {
        assert_eq!(Condition::Sick.improve(), Condition::Healthy);
        assert_eq!(Condition::Dying.improve(), Condition::Sick);
        assert_eq!(Condition::Cure.improve(), Condition::Cure);
        assert_eq!(Condition::Healthy.improve(), Condition::Healthy);
        assert_eq!(Condition::Dead.improve(), Condition::Dead);
    }

    #[test]
    fn test_worsen_rule_table() {
        assert_eq!(Condition::Sick.worsen(), Condition::Dying);
        assert_eq!(Condition::Dying.worsen(), Condition::Dead);
        assert_eq!(Condition::Cure.worsen(), Condition::Cure);
        assert_eq!(Condition::Healthy.worsen(), Condition::Healthy);
        assert_eq!(Condition::Dead.worsen(), Condition::Dead);
    }

    #[test]
    fn test_transitions_stay_in_enum() {
        // Both rules are total and closed over the five variants.
        for condition in ALL {
            assert!(ALL.contains(&condition.improve()));
            assert!(ALL.contains(&condition.worsen()));
        }
    }

    #[test]
    fn test_participation() {
        assert!(Condition::Cure.participates());
        assert!(Condition::Sick.participates());
        assert!(Condition::Dying.participates());
        assert!(!Condition::Healthy.participates());
        assert!(!Condition::Dead.participates());
    }

    #[test]
    fn test_from_str_accepts_all_names() {
        for condition in ALL {
            assert_eq!(condition.as_str().parse::<Condition>().unwrap(), condition);
        }
        // Case-insensitive.
        assert_eq!("dying".parse::<Condition>().unwrap(), Condition::Dying);
        assert_eq!("Sick".parse::<Condition>().unwrap(), Condition::Sick);
    }

    #[test]
    fn test_from_str_rejects_unknown_category() {
        let error = "ZOMBIE".parse::<Condition>();
        match error {
            Err(MeetupError::InvalidCategory(name)) => assert_eq!(name, "ZOMBIE"),
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for condition in ALL {
            let displayed = condition.to_string();
            assert_eq!(displayed.parse::<Condition>().unwrap(), condition);
        }
    }
}

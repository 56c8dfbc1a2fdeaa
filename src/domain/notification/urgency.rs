//! Urgency value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidUrgencyError;

/// All urgency levels, lowest first
pub const ALL_URGENCIES: &[Urgency] = &[Urgency::Low, Urgency::Normal, Urgency::Critical];

/// Coarse priority hint attached to a notification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Urgency {
    /// Get the string identifier for this urgency
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }

    /// Value of the `u=` key in kitty's OSC 99 metadata
    pub const fn osc99_level(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::Critical => 2,
        }
    }
}

impl FromStr for Urgency {
    type Err = InvalidUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "critical" => Ok(Self::Critical),
            _ => Err(InvalidUrgencyError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Urgency::default(), Urgency::Normal);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LOW".parse::<Urgency>().unwrap(), Urgency::Low);
        assert_eq!(" critical ".parse::<Urgency>().unwrap(), Urgency::Critical);
        assert!("urgent".parse::<Urgency>().is_err());
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Urgency::Low < Urgency::Normal);
        assert!(Urgency::Normal < Urgency::Critical);
    }

    #[test]
    fn osc99_levels() {
        let levels: Vec<u8> = ALL_URGENCIES.iter().map(Urgency::osc99_level).collect();
        assert_eq!(levels, vec![0, 1, 2]);
    }
}

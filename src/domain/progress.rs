//! Progress indicator state machine

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::InvalidProgressModeError;

/// Highest progress percentage
pub const MAX_PROGRESS: u8 = 100;

/// Mode of a determinate progress report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    #[default]
    Normal,
    Error,
    Paused,
}

impl FromStr for ProgressMode {
    type Err = InvalidProgressModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "error" => Ok(Self::Error),
            "paused" => Ok(Self::Paused),
            _ => Err(InvalidProgressModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Progress indicator state as shown by the terminal (tab, taskbar, dock)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum ProgressState {
    #[default]
    Cleared,
    Normal(u8),
    Error(u8),
    Paused(u8),
    Indeterminate,
}

impl ProgressState {
    /// Determinate state with the value clamped to `0..=100`
    pub fn determinate(mode: ProgressMode, value: u32) -> Self {
        let value = value.min(u32::from(MAX_PROGRESS)) as u8;
        match mode {
            ProgressMode::Normal => Self::Normal(value),
            ProgressMode::Error => Self::Error(value),
            ProgressMode::Paused => Self::Paused(value),
        }
    }

    /// State number in the `OSC 9;4` grammar
    pub const fn wire_state(&self) -> u8 {
        match self {
            Self::Cleared => 0,
            Self::Normal(_) => 1,
            Self::Error(_) => 2,
            Self::Indeterminate => 3,
            Self::Paused(_) => 4,
        }
    }

    /// Percentage, if the state carries one
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::Normal(v) | Self::Error(v) | Self::Paused(v) => Some(*v),
            Self::Cleared | Self::Indeterminate => None,
        }
    }
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleared => write!(f, "cleared"),
            Self::Normal(v) => write!(f, "normal ({}%)", v),
            Self::Error(v) => write!(f, "error ({}%)", v),
            Self::Paused(v) => write!(f, "paused ({}%)", v),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Tracks the last progress state reported to the terminal.
///
/// Every state may follow every other one and `Cleared` is not terminal.
/// Transitions are never deduplicated: terminals keep no state we could
/// rely on, so repeating a state re-sends it.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    current: ProgressState,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ProgressState {
        self.current
    }

    /// Move to `next` and return it
    pub fn transition(&mut self, next: ProgressState) -> ProgressState {
        self.current = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        assert_eq!(ProgressTracker::new().current(), ProgressState::Cleared);
    }

    #[test]
    fn determinate_clamps_value() {
        assert_eq!(
            ProgressState::determinate(ProgressMode::Normal, 250),
            ProgressState::Normal(100)
        );
        assert_eq!(
            ProgressState::determinate(ProgressMode::Paused, 40),
            ProgressState::Paused(40)
        );
    }

    #[test]
    fn wire_states() {
        assert_eq!(ProgressState::Cleared.wire_state(), 0);
        assert_eq!(ProgressState::Normal(10).wire_state(), 1);
        assert_eq!(ProgressState::Error(10).wire_state(), 2);
        assert_eq!(ProgressState::Indeterminate.wire_state(), 3);
        assert_eq!(ProgressState::Paused(10).wire_state(), 4);
    }

    #[test]
    fn every_state_reaches_cleared_and_back() {
        let mut tracker = ProgressTracker::new();
        let states = [
            ProgressState::Normal(0),
            ProgressState::Normal(50),
            ProgressState::Error(100),
            ProgressState::Cleared,
            ProgressState::Paused(20),
            ProgressState::Cleared,
            ProgressState::Indeterminate,
            ProgressState::Cleared,
            ProgressState::Normal(5),
        ];
        for state in states {
            assert_eq!(tracker.transition(state), state);
            assert_eq!(tracker.current(), state);
        }
    }

    #[test]
    fn parses_modes() {
        assert_eq!("error".parse(), Ok(ProgressMode::Error));
        assert_eq!("Paused".parse(), Ok(ProgressMode::Paused));
        assert!("indeterminate".parse::<ProgressMode>().is_err());
    }

    #[test]
    fn value_only_for_determinate_states() {
        assert_eq!(ProgressState::Error(7).value(), Some(7));
        assert_eq!(ProgressState::Indeterminate.value(), None);
        assert_eq!(ProgressState::Cleared.value(), None);
    }
}

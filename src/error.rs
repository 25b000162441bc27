//! Error taxonomy for the game core
//!
//! The simulation itself is pure, so most errors are caller contract
//! violations. None of them leave the game in a half-updated state.

use crate::sim::GamePhase;

/// Errors returned by game operations and settings loading
#[derive(Debug)]
pub enum GameError {
    /// Unknown difficulty key (or otherwise unusable preset input)
    InvalidConfiguration(String),

    /// Operation not accepted in the current phase
    InvalidStateTransition {
        from: GamePhase,
        action: &'static str,
    },

    /// Settings file could not be read
    SettingsIo(std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    SettingsParse(serde_json::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(key) => write!(f, "Invalid configuration: unknown difficulty '{}'", key),
            Self::InvalidStateTransition { from, action } => {
                write!(f, "Invalid state transition: cannot {} while {:?}", action, from)
            }
            Self::SettingsIo(e) => write!(f, "Settings read failed: {}", e),
            Self::SettingsParse(e) => write!(f, "Settings parse failed: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SettingsIo(e) => Some(e),
            Self::SettingsParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        Self::SettingsIo(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        Self::SettingsParse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_names_the_key() {
        let err = GameError::InvalidConfiguration("nightmare".into());
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn test_transition_error_names_phase() {
        let err = GameError::InvalidStateTransition {
            from: GamePhase::Menu,
            action: "restart",
        };
        let msg = err.to_string();
        assert!(msg.contains("restart"));
        assert!(msg.contains("Menu"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = GameError::from(parse);
        assert!(err.source().is_some());
    }
}

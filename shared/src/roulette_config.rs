use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_EXTRA_TURNS, MIN_EXTRA_TURNS, SPIN_DURATION_MS};
use crate::error::RouletteError;
use crate::validation::validate_turn_range;

/// Tunables for the spin animation. None of them affect which item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_turn_range"))]
pub struct RouletteConfig {
    #[validate(range(min = 1, max = 60000))]
    pub spin_duration_ms: u32,
    // At least one turn, so every spin moves the wheel forward.
    #[validate(range(min = 1))]
    pub min_extra_turns: u32,
    #[validate(range(max = 100))]
    pub max_extra_turns: u32,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            min_extra_turns: MIN_EXTRA_TURNS,
            max_extra_turns: MAX_EXTRA_TURNS,
        }
    }
}

impl RouletteConfig {
    pub fn validated(self) -> Result<Self, RouletteError> {
        self.validate()?;
        Ok(self)
    }

    /// Number of distinct extra-turn counts a spin can pick from.
    pub fn turn_choices(&self) -> usize {
        self.max_extra_turns.saturating_sub(self.min_extra_turns) as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouletteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spin_duration_ms, 4000);
        assert_eq!(config.turn_choices(), 3);
    }

    #[test]
    fn test_inverted_turn_range_rejected() {
        let config = RouletteConfig { min_extra_turns: 8, max_extra_turns: 5, ..Default::default() };
        let err = config.validated().unwrap_err();
        assert!(matches!(err, RouletteError::InvalidConfig(_)));
    }

    #[test]
    fn test_turn_choices_never_underflow() {
        let config = RouletteConfig { min_extra_turns: 8, max_extra_turns: 5, ..Default::default() };
        assert_eq!(config.turn_choices(), 1);
    }

    #[test]
    fn test_zero_extra_turns_rejected() {
        let config = RouletteConfig { min_extra_turns: 0, max_extra_turns: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = RouletteConfig { spin_duration_ms: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: RouletteConfig = serde_json::from_str(r#"{"max_extra_turns": 9}"#).unwrap();
        assert_eq!(config.min_extra_turns, 5);
        assert_eq!(config.max_extra_turns, 9);
        assert_eq!(config.spin_duration_ms, 4000);
        assert!(config.validated().is_ok());
    }
}

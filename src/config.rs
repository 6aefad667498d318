use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_OPENING_UNTIL: u8 = 30;
pub const DEFAULT_ENDGAME_FROM: u8 = 55;

/// Piece-count thresholds that decide which heuristic picks the move.
///
/// Below `opening_until` pieces the opening heuristic is used, from
/// `endgame_from` pieces on the endgame one, and the midgame one in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    pub opening_until: u8,
    pub endgame_from: u8,
}

impl EvaluatorConfig {
    pub fn new(opening_until: u8, endgame_from: u8) -> Result<Self, ConfigError> {
        Self {
            opening_until,
            endgame_from,
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.opening_until > self.endgame_from {
            return Err(ConfigError::ThresholdsOutOfOrder {
                opening_until: self.opening_until,
                endgame_from: self.endgame_from,
            });
        }
        Ok(self)
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            opening_until: DEFAULT_OPENING_UNTIL,
            endgame_from: DEFAULT_ENDGAME_FROM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EvaluatorConfig = serde_json::from_str(r#"{"endgame_from": 50}"#).unwrap();

        assert_eq!(config.opening_until, 30);
        assert_eq!(config.endgame_from, 50);
    }

    #[test]
    fn thresholds_must_be_ordered() {
        assert!(EvaluatorConfig::new(30, 30).is_ok());
        assert_eq!(
            EvaluatorConfig::new(40, 20),
            Err(ConfigError::ThresholdsOutOfOrder {
                opening_until: 40,
                endgame_from: 20,
            })
        );
    }
}

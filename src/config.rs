use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// defaults a card source applies to fields the input omits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// apr used when a card does not specify one
    pub default_apr: Rate,
    /// due-date label used when a card does not specify one
    pub default_due_date: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_apr: Rate::from_percentage(dec!(18)),
            default_due_date: "15th".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn with_default_apr(mut self, apr: Rate) -> Self {
        self.default_apr = apr;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_planner() {
        let config = PlannerConfig::default();
        assert_eq!(config.default_apr.as_percentage(), dec!(18));
        assert_eq!(config.default_due_date, "15th");
    }
}

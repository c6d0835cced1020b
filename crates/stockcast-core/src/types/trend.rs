//! Short-term directional bias.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-state trend derived from recent closing prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    /// Direction as a sign: `1.0`, `-1.0` or `0.0`.
    pub fn bias(&self) -> f64 {
        match self {
            Trend::Up => 1.0,
            Trend::Down => -1.0,
            Trend::Neutral => 0.0,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_bias() {
        assert_eq!(Trend::Up.bias(), 1.0);
        assert_eq!(Trend::Down.bias(), -1.0);
        assert_eq!(Trend::Neutral.bias(), 0.0);
    }

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::Up.to_string(), "up");
        assert_eq!(Trend::Neutral.to_string(), "neutral");
    }

    #[test]
    fn test_trend_serde() {
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"down\"");
    }
}

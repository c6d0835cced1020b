//! Forecast horizon in trading days.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

/// Number of trading days to forecast, `1..=30`.
///
/// Weekends never count against the horizon; they are skipped when dates are
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Horizon(usize);

impl Horizon {
    /// Shortest horizon offered.
    pub const MIN: usize = 1;
    /// Longest horizon offered.
    pub const MAX: usize = 30;
    /// Horizon used until the user picks another.
    pub const DEFAULT: Horizon = Horizon(7);

    /// Create a horizon, rejecting values outside `1..=30`.
    pub fn new(days: i64) -> Result<Self, ForecastError> {
        if days < Self::MIN as i64 || days > Self::MAX as i64 {
            return Err(ForecastError::InvalidHorizon {
                requested: days,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(days as usize))
    }

    /// Number of trading days.
    #[inline]
    pub fn days(&self) -> usize {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Horizon {
    type Error = ForecastError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl TryFrom<usize> for Horizon {
    type Error = ForecastError;

    fn try_from(days: usize) -> Result<Self, Self::Error> {
        Self::new(i64::try_from(days).unwrap_or(i64::MAX))
    }
}

impl From<Horizon> for usize {
    fn from(horizon: Horizon) -> usize {
        horizon.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

impl FromStr for Horizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('d').unwrap_or(trimmed);
        let days: i64 = trimmed
            .parse()
            .map_err(|_| format!("Invalid horizon: {}", s))?;
        Self::new(days).map_err(|e| e.to_string())
    }
}

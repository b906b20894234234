//! Nearest-rank percentile selection.

use std::time::Duration;

use thiserror::Error;

/// Errors from order-statistics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("percentile of an empty sample set is undefined")]
    EmptySamples,

    #[error("percentile {0} is outside 0..=100")]
    PercentileOutOfRange(u8),
}

/// Select the `p`th percentile of `sorted` (ascending).
///
/// The rank is `floor(p/100 * (n-1) + 0.5)`, i.e. round-half-up onto the
/// nearest element. No interpolation happens between neighbours.
pub fn percentile(sorted: &[Duration], p: u8) -> Result<Duration, StatsError> {
    if p > 100 {
        return Err(StatsError::PercentileOutOfRange(p));
    }
    if sorted.is_empty() {
        return Err(StatsError::EmptySamples);
    }

    let last = (sorted.len() - 1) as f64;
    let index = (last * f64::from(p) / 100.0 + 0.5).floor() as usize;
    Ok(sorted[index.min(sorted.len() - 1)])
}

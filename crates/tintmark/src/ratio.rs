//! BPM ratio between two snap divisions.

use crate::error::DivisionByZeroError;

/// Scales `bpm` from `base_snap` to `desired_snap`: `bpm * desired / base`.
///
/// Returns the raw value; callers format it (two decimals for display).
///
/// # Example
///
/// ```rust
/// use tintmark::compute_ratio;
///
/// assert_eq!(compute_ratio(120.0, 8, 4), Ok(240.0));
/// assert!(compute_ratio(120.0, 8, 0).is_err());
/// ```
pub fn compute_ratio(
    bpm: f64,
    desired_snap: i64,
    base_snap: i64,
) -> Result<f64, DivisionByZeroError> {
    if base_snap == 0 {
        tracing::debug!(bpm, desired_snap, "rejected zero base snap");
        return Err(DivisionByZeroError);
    }
    Ok(bpm * desired_snap as f64 / base_snap as f64)
}

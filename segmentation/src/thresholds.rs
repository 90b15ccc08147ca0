//! Hysteresis threshold calibration.

use common::Field;
use serde::{Deserialize, Serialize};

/// Absolute low/high hysteresis thresholds in magnitude units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f32,
    pub high: f32,
}

impl Thresholds {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Clamps both thresholds into `[0, max_magnitude]` and swaps them if
    /// they arrive in the wrong order. NaN thresholds become 0.
    pub fn normalized(self, max_magnitude: f32) -> Self {
        let max = if max_magnitude.is_nan() {
            0.0
        } else {
            max_magnitude.max(0.0)
        };
        let clamp = |t: f32| if t.is_nan() { 0.0 } else { t.clamp(0.0, max) };

        let low = clamp(self.low);
        let high = clamp(self.high);
        if low > high {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }
}

/// Derives absolute thresholds as fractions of the largest magnitude.
///
/// Fractions may be given in either order and outside `[0, 1]`; the result is
/// always normalized. An all-zero field calibrates to `(0, 0)`.
pub fn calibrate_thresholds(
    magnitude: &Field<f32>,
    fraction_low: f32,
    fraction_high: f32,
) -> Thresholds {
    let max = magnitude.max_value().max(0.0);
    let thresholds = Thresholds::new(fraction_low * max, fraction_high * max).normalized(max);

    tracing::trace!(
        max,
        low = thresholds.low,
        high = thresholds.high,
        "calibrated hysteresis thresholds"
    );

    thresholds
}

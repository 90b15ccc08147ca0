//! Non-maximum suppression with two-threshold classification.
//!
//! Every interior pixel whose magnitude reaches the low threshold is a
//! candidate: `Weak` below the high threshold, `Strong` at or above it. A
//! candidate survives only if it is a local maximum along its gradient
//! direction. Survivors are recorded in per-class worklists for the linker.


use common::{Field, PixelCoord};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_same_dims, Result};
use crate::thresholds::Thresholds;

/// Ordered list of classified pixel coordinates.
pub type Worklist = Vec<PixelCoord>;

/// Per-pixel hysteresis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    #[default]
    Background,
    Weak,
    Strong,
}

impl Classification {
    pub const BACKGROUND_VALUE: f32 = 0.0;
    pub const WEAK_VALUE: f32 = 0.5;
    pub const STRONG_VALUE: f32 = 1.0;

    /// Numeric sentinel used when the field is handed to display code.
    #[inline]
    pub fn intensity(self) -> f32 {
        match self {
            Classification::Background => Self::BACKGROUND_VALUE,
            Classification::Weak => Self::WEAK_VALUE,
            Classification::Strong => Self::STRONG_VALUE,
        }
    }
}

/// Converts a classification field into its 0 / 0.5 / 1.0 numeric form.
pub fn to_intensity(classification: &Field<Classification>) -> Field<f32> {
    classification.map(|c| c.intensity())
}

/// Direction discretization used by the local-maximum test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborMode {
    /// Buckets at 0° and 90°, ±45° windows.
    #[default]
    Four,
    /// Buckets at 0°, 45°, 90° and 135°, ±22.5° windows.
    Eight,
}

/// A gradient direction bucket: its centre angle and the `(row, col)` step
/// towards one of the two compared neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionBucket {
    pub angle: f32,
    pub d_row: isize,
    pub d_col: isize,
}

const EAST: DirectionBucket = DirectionBucket {
    angle: 0.0,
    d_row: 0,
    d_col: 1,
};
const SOUTH_EAST: DirectionBucket = DirectionBucket {
    angle: 45.0,
    d_row: 1,
    d_col: 1,
};
const SOUTH: DirectionBucket = DirectionBucket {
    angle: 90.0,
    d_row: 1,
    d_col: 0,
};
const SOUTH_WEST: DirectionBucket = DirectionBucket {
    angle: 135.0,
    d_row: 1,
    d_col: -1,
};

const BUCKETS_4: [DirectionBucket; 2] = [EAST, SOUTH];
const BUCKETS_8: [DirectionBucket; 4] = [EAST, SOUTH_EAST, SOUTH, SOUTH_WEST];

impl NeighborMode {
    #[inline]
    pub fn buckets(self) -> &'static [DirectionBucket] {
        match self {
            NeighborMode::Four => &BUCKETS_4,
            NeighborMode::Eight => &BUCKETS_8,
        }
    }

    /// Half-width of each bucket's window in degrees.
    #[inline]
    pub fn tolerance(self) -> f32 {
        90.0 / self.buckets().len() as f32
    }

    /// Bucket whose window `[angle - tol, angle + tol)` contains `direction`.
    ///
    /// Directions are folded modulo 180° since a gradient and its reverse
    /// select the same neighbour pair. Non-finite input maps to the 0° bucket.
    pub fn bucket_for(self, direction: f32) -> DirectionBucket {
        let buckets = self.buckets();
        let tolerance = self.tolerance();
        let folded = direction.rem_euclid(180.0);
        // `as usize` saturates NaN to 0.
        let idx = ((folded + tolerance) / (2.0 * tolerance)) as usize % buckets.len();
        buckets[idx]
    }
}

/// True when neither neighbour along the pixel's gradient direction has a
/// strictly greater magnitude. Ties keep the centre pixel.
///
/// Neighbours that fall outside the field are not compared, so ring pixels
/// are judged against their single in-field neighbour.
///
/// # Panics
///
/// Panics if `coord` lies outside either field.
pub fn is_local_maximum(
    magnitude: &Field<f32>,
    direction: &Field<f32>,
    coord: PixelCoord,
    mode: NeighborMode,
) -> bool {
    let bucket = mode.bucket_for(direction[coord]);
    let center = magnitude[coord];
    let greater = |d_row: isize, d_col: isize| {
        coord
            .offset(d_row, d_col)
            .and_then(|n| magnitude.checked_get(n.row, n.col))
            .is_some_and(|&m| m > center)
    };

    !(greater(bucket.d_row, bucket.d_col) || greater(-bucket.d_row, -bucket.d_col))
}

/// Output of [`suppress`].
#[derive(Debug, Clone)]
pub struct Suppression {
    pub classification: Field<Classification>,
    pub strong: Worklist,
    pub weak: Worklist,
    /// Thresholds after normalization against the field maximum.
    pub thresholds: Thresholds,
}

/// Classifies every pixel as background, weak or strong.
///
/// Thresholds are normalized first (clamped into `[0, max]`, swapped if
/// reversed). Border pixels are always background. A pixel with zero
/// magnitude is never a candidate, even when the low threshold normalizes to
/// 0 on a field that has non-zero pixels elsewhere.
pub fn suppress(
    magnitude: &Field<f32>,
    direction: &Field<f32>,
    thresholds: Thresholds,
    mode: NeighborMode,
) -> Result<Suppression> {
    ensure_same_dims("direction field", magnitude, direction)?;

    let thresholds = thresholds.normalized(magnitude.max_value());
    let (width, height) = magnitude.dims();
    let mut classification = Field::new_filled(width, height, Classification::Background);
    let mut strong = Worklist::new();
    let mut weak = Worklist::new();
    let mut suppressed = 0usize;

    for coord in magnitude.interior() {
        let m = magnitude[coord];
        if !(m > 0.0 && m >= thresholds.low) {
            continue;
        }

        if !is_local_maximum(magnitude, direction, coord, mode) {
            suppressed += 1;
            continue;
        }

        if m >= thresholds.high {
            classification[coord] = Classification::Strong;
            strong.push(coord);
        } else {
            classification[coord] = Classification::Weak;
            weak.push(coord);
        }
    }

    tracing::debug!(
        width,
        height,
        ?mode,
        low = thresholds.low,
        high = thresholds.high,
        strong = strong.len(),
        weak = weak.len(),
        suppressed,
        "non-maximum suppression done"
    );

    Ok(Suppression {
        classification,
        strong,
        weak,
        thresholds,
    })
}

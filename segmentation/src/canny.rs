//! Hysteresis edge detection over a precomputed gradient.
//!
//! Chains threshold calibration, non-maximum suppression and edge linking.
//! Gradient computation happens upstream; callers hand in magnitude and
//! direction fields of the same size.

use common::Field;

use crate::config::{CannyConfig, ThresholdMode};
use crate::error::Result;
use crate::linking::link_edges;
use crate::suppression::{suppress, to_intensity, Classification};
use crate::thresholds::{calibrate_thresholds, Thresholds};

/// Output of [`detect_edges`].
#[derive(Debug, Clone)]
pub struct EdgeDetection {
    /// Final classification; only `Background` and `Strong` remain.
    pub edges: Field<Classification>,
    /// Absolute thresholds actually applied.
    pub thresholds: Thresholds,
    /// Strong pixels found by suppression.
    pub strong_seeds: usize,
    /// Weak pixels promoted by linking.
    pub promoted: usize,
    /// Weak pixels demoted by linking.
    pub demoted: usize,
}

impl EdgeDetection {
    /// Number of edge pixels in the final field.
    pub fn edge_count(&self) -> usize {
        self.strong_seeds + self.promoted
    }

    /// Binary `0.0` / `1.0` edge field.
    pub fn to_intensity(&self) -> Field<f32> {
        to_intensity(&self.edges)
    }
}

/// Runs calibrate (fractional mode only), suppress and link.
///
/// Any threshold pair is accepted: out-of-range, reversed or NaN values are
/// normalized against the field maximum rather than rejected.
pub fn detect_edges(
    magnitude: &Field<f32>,
    direction: &Field<f32>,
    config: &CannyConfig,
) -> Result<EdgeDetection> {
    let thresholds = match config.threshold_mode {
        ThresholdMode::Fractional => calibrate_thresholds(magnitude, config.low, config.high),
        ThresholdMode::Absolute => Thresholds::new(config.low, config.high),
    };

    let suppression = suppress(magnitude, direction, thresholds, config.neighbor_mode)?;
    let strong_seeds = suppression.strong.len();

    let mut edges = suppression.classification;
    let stats = link_edges(&mut edges, suppression.strong, &suppression.weak)?;

    let detection = EdgeDetection {
        edges,
        thresholds: suppression.thresholds,
        strong_seeds,
        promoted: stats.promoted,
        demoted: stats.demoted,
    };

    tracing::debug!(
        width = magnitude.width(),
        height = magnitude.height(),
        mode = ?config.threshold_mode,
        edges = detection.edge_count(),
        "edge detection done"
    );

    Ok(detection)
}

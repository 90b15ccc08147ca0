//! Segmentation - hysteresis edge detection and region labeling.
//!
//! Two independent cores operate on dense 2D fields:
//! - Edge detection: threshold calibration, non-maximum suppression along
//!   the gradient direction and 8-connected hysteresis linking.
//! - Region segmentation: single-sweep raster labeling of a category field
//!   with union-find reconciliation of the recorded equivalences.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use segmentation::{detect_edges, segment_regions, CannyConfig, RegionConfig};
//!
//! // magnitude/direction come from an upstream gradient operator.
//! let edges = detect_edges(&magnitude, &direction, &CannyConfig::default())?;
//! println!("{} edge pixels", edges.edge_count());
//!
//! let regions = segment_regions(&categories, &RegionConfig::default())?;
//! println!("{} regions", regions.region_count);
//! ```

pub mod canny;
pub mod categorize;
pub mod config;
pub mod error;
pub mod labeling;
pub mod linking;
pub mod reconcile;
pub mod regions;
pub mod suppression;
pub mod thresholds;

#[cfg(test)]
mod testing;

pub use common::{Field, PixelCoord};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use config::{CannyConfig, Config, RegionConfig, ThresholdMode};
pub use error::{Error, Result};

// ============================================================================
// Edge detection
// ============================================================================

pub use canny::{detect_edges, EdgeDetection};
pub use linking::{link_edges, LinkStats};
pub use suppression::{
    is_local_maximum, suppress, to_intensity, Classification, DirectionBucket, NeighborMode,
    Suppression, Worklist,
};
pub use thresholds::{calibrate_thresholds, Thresholds};

// ============================================================================
// Region segmentation
// ============================================================================

pub use categorize::{categorize, luma, Categorize, GrayBuckets};
pub use labeling::{label_regions, EquivalencePairs, Label, RasterLabels, ScanBias};
pub use reconcile::{apply_mapping, apply_mapping_into, reconcile, LabelMapping};
pub use regions::{segment_regions, segment_rgb, Segmentation};

//! Region segmentation: raster labeling followed by reconciliation.

use common::Field;

use crate::categorize::{categorize, GrayBuckets};
use crate::config::RegionConfig;
use crate::error::{Error, Result};
use crate::labeling::{label_regions, Label};
use crate::reconcile::{apply_mapping, reconcile, LabelMapping};

/// Output of [`segment_regions`].
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Canonical labels; `None` on the outermost ring.
    pub labels: Field<Option<Label>>,
    /// Provisional to canonical mapping that produced `labels`.
    pub mapping: LabelMapping,
    /// Distinct regions in `labels`.
    pub region_count: usize,
}

/// Labels 4-connected regions of equal category.
///
/// The reconciled mapping is applied to the provisional labels exactly once.
/// `config.max_categories` is not consulted here.
pub fn segment_regions<T: PartialEq>(
    categories: &Field<T>,
    config: &RegionConfig,
) -> Result<Segmentation> {
    let raster = label_regions(categories, config.bias);
    let mut mapping = reconcile(&raster.equivalences, raster.label_count)?;
    if config.compact_labels {
        mapping = mapping.compacted();
    }

    let mut labels = raster.labels;
    apply_mapping(&mut labels, &mapping)?;
    let region_count = mapping.region_count();

    tracing::debug!(
        width = categories.width(),
        height = categories.height(),
        provisional = raster.label_count,
        regions = region_count,
        "region segmentation done"
    );

    Ok(Segmentation {
        labels,
        mapping,
        region_count,
    })
}

/// Buckets RGB pixels by luma into `config.max_categories` gray levels, then
/// segments the result.
///
/// Fails with [`Error::InvalidConfig`] when `max_categories` is zero.
pub fn segment_rgb(pixels: &Field<[u8; 3]>, config: &RegionConfig) -> Result<Segmentation> {
    if config.max_categories == 0 {
        return Err(Error::InvalidConfig {
            field: "max_categories",
            reason: "must be positive",
        });
    }
    let categories = categorize(pixels, &GrayBuckets::new(config.max_categories));
    segment_regions(&categories, config)
}

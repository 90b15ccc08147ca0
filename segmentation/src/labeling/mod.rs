//! Single-sweep raster labeling of a category field.
//!
//! Pixels are visited row-major, skipping the outermost ring. A pixel inherits
//! the label of its north or west neighbour when that neighbour has the same
//! category; when both match with different labels the pair is recorded so
//! the reconciler can merge them. Otherwise a fresh label is issued.


use common::Field;
use serde::{Deserialize, Serialize};

/// Provisional region identifier.
pub type Label = u32;

/// Pairs of provisional labels that name the same region.
pub type EquivalencePairs = Vec<(Label, Label)>;

/// Which neighbour's label wins when both north and west match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanBias {
    #[default]
    North,
    West,
}

/// Output of [`label_regions`].
#[derive(Debug, Clone)]
pub struct RasterLabels {
    /// Provisional labels; `None` on the outermost ring.
    pub labels: Field<Option<Label>>,
    /// Number of labels issued. Labels are `0..label_count`.
    pub label_count: Label,
    /// `(north, west)` label pairs discovered to be the same region.
    pub equivalences: EquivalencePairs,
}

/// Assigns provisional labels in one top-to-bottom, left-to-right sweep.
///
/// The north neighbour is only consulted from the second interior row on and
/// the west neighbour from the second interior column on, since the ring
/// itself carries no labels.
pub fn label_regions<T: PartialEq>(categories: &Field<T>, bias: ScanBias) -> RasterLabels {
    let (width, height) = categories.dims();
    let mut labels: Field<Option<Label>> = Field::new_filled(width, height, None);
    let mut equivalences = EquivalencePairs::new();
    let mut next_label: Label = 0;

    for coord in categories.interior() {
        let (row, col) = (coord.row, coord.col);
        let here = &categories[coord];

        let north = if row > 1 && *here == categories[(row - 1, col)] {
            labels[(row - 1, col)]
        } else {
            None
        };
        let west = if col > 1 && *here == categories[(row, col - 1)] {
            labels[(row, col - 1)]
        } else {
            None
        };

        let label = match (north, west) {
            (Some(n), Some(w)) => {
                if n != w {
                    equivalences.push((n, w));
                }
                match bias {
                    ScanBias::North => n,
                    ScanBias::West => w,
                }
            }
            (Some(n), None) => n,
            (None, Some(w)) => w,
            (None, None) => {
                let fresh = next_label;
                next_label += 1;
                fresh
            }
        };
        labels[coord] = Some(label);
    }

    tracing::debug!(
        width,
        height,
        ?bias,
        labels = next_label,
        equivalences = equivalences.len(),
        "raster labeling done"
    );

    RasterLabels {
        labels,
        label_count: next_label,
        equivalences,
    }
}

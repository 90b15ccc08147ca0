//! Hysteresis edge linking.
//!
//! Strong pixels seed an explicit frontier. Any weak pixel 8-adjacent to a
//! frontier pixel is promoted and pushed in turn. Weak pixels never reached
//! are demoted to background afterwards.
//!
//! Linking is always 8-connected, independent of the [`NeighborMode`] used
//! during suppression.
//!
//! [`NeighborMode`]: crate::suppression::NeighborMode


use common::{Field, PixelCoord};

use crate::error::{Error, Result};
use crate::suppression::{Classification, Worklist};

/// Counts reported by [`link_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Weak pixels promoted to strong.
    pub promoted: usize,
    /// Weak pixels demoted to background.
    pub demoted: usize,
}

/// Promotes weak pixels connected to strong ones and clears the rest, in place.
///
/// `strong` is consumed as the frontier (processed LIFO; the resulting field
/// does not depend on the order). `weak` bounds the final demotion sweep:
/// only recorded weak coordinates are revisited, so a weak value that
/// appears nowhere in `weak` survives. Every coordinate in both lists is
/// bounds-checked before the field is touched.
pub fn link_edges(
    classification: &mut Field<Classification>,
    strong: Worklist,
    weak: &[PixelCoord],
) -> Result<LinkStats> {
    ensure_in_bounds(classification, &strong)?;
    ensure_in_bounds(classification, weak)?;

    let seeds = strong.len();
    let mut frontier = strong;
    let mut stats = LinkStats::default();

    while let Some(coord) = frontier.pop() {
        for neighbor in classification.neighbors8(coord) {
            let state = &mut classification[neighbor];
            if *state == Classification::Weak {
                *state = Classification::Strong;
                frontier.push(neighbor);
                stats.promoted += 1;
            }
        }
    }

    for &coord in weak {
        let state = &mut classification[coord];
        if *state == Classification::Weak {
            *state = Classification::Background;
            stats.demoted += 1;
        }
    }

    tracing::debug!(
        seeds,
        promoted = stats.promoted,
        demoted = stats.demoted,
        "edge linking done"
    );

    Ok(stats)
}

fn ensure_in_bounds<T>(field: &Field<T>, coords: &[PixelCoord]) -> Result<()> {
    match coords.iter().find(|&&c| !field.contains(c)) {
        Some(&PixelCoord { row, col }) => Err(Error::CoordinateOutOfBounds {
            row,
            col,
            width: field.width(),
            height: field.height(),
        }),
        None => Ok(()),
    }
}

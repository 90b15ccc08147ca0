//! Label equivalence resolution using union-find.
//!
//! Equivalence pairs recorded by the raster sweep are treated as edges of a
//! label graph. Each provisional label resolves to the smallest label of its
//! connected class, so the mapping is deterministic and idempotent.


use common::Field;

use crate::error::{ensure_same_dims, Error, Result};
use crate::labeling::Label;

// ============================================================================
// Union-Find
// ============================================================================

/// Union-find over a dense label range. Unions always hang the larger root
/// under the smaller one, so every root is the minimum of its class.
#[derive(Debug)]
struct UnionFind {
    parent: Vec<Label>,
}

impl UnionFind {
    fn new(label_count: Label) -> Self {
        Self {
            parent: (0..label_count).collect(),
        }
    }

    /// Find root with iterative path compression (two-pass).
    fn find(&mut self, label: Label) -> Label {
        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = label;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    fn union(&mut self, a: Label, b: Label) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (smaller, larger) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[larger as usize] = smaller;
        }
    }
}

// ============================================================================
// LabelMapping
// ============================================================================

/// Provisional label to canonical label, indexed by provisional label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMapping {
    canonical: Vec<Label>,
}

impl LabelMapping {
    /// The mapping that leaves every label unchanged.
    pub fn identity(label_count: Label) -> Self {
        Self {
            canonical: (0..label_count).collect(),
        }
    }

    #[inline]
    pub fn canonical(&self, label: Label) -> Option<Label> {
        self.canonical.get(label as usize).copied()
    }

    /// Number of provisional labels covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Number of distinct canonical labels.
    pub fn region_count(&self) -> usize {
        let mut seen = vec![false; self.canonical.len()];
        self.canonical
            .iter()
            .filter(|&&c| !std::mem::replace(&mut seen[c as usize], true))
            .count()
    }

    /// `(provisional, canonical)` pairs in provisional order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, Label)> + '_ {
        self.canonical
            .iter()
            .enumerate()
            .map(|(label, &canonical)| (label as Label, canonical))
    }

    /// Renumbers canonical labels to `0..region_count()` in order of first
    /// appearance, keeping the partition.
    pub fn compacted(&self) -> Self {
        let mut renumbered = vec![Label::MAX; self.canonical.len()];
        let mut next: Label = 0;
        let canonical = self
            .canonical
            .iter()
            .map(|&root| {
                let slot = &mut renumbered[root as usize];
                if *slot == Label::MAX {
                    *slot = next;
                    next += 1;
                }
                *slot
            })
            .collect();
        Self { canonical }
    }

    /// Rewrites `labels` in place. See [`apply_mapping`].
    pub fn apply(&self, labels: &mut Field<Option<Label>>) -> Result<()> {
        apply_mapping(labels, self)
    }

    /// Composes `self` with itself. Equals `self` for every mapping produced
    /// by [`reconcile`].
    pub fn reapplied(&self) -> Self {
        let canonical = self
            .canonical
            .iter()
            .map(|&c| self.canonical.get(c as usize).copied().unwrap_or(c))
            .collect();
        Self { canonical }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Resolves equivalence pairs over labels `0..label_count` into a canonical
/// mapping. Each label maps to the smallest label of its class.
pub fn reconcile(pairs: &[(Label, Label)], label_count: Label) -> Result<LabelMapping> {
    if let Some(&label) = pairs
        .iter()
        .flat_map(|(a, b)| [a, b])
        .find(|&&l| l >= label_count)
    {
        return Err(Error::UnknownLabel {
            label,
            label_count: label_count as usize,
        });
    }

    let mut uf = UnionFind::new(label_count);
    for &(a, b) in pairs {
        uf.union(a, b);
    }

    let canonical: Vec<Label> = (0..label_count).map(|label| uf.find(label)).collect();
    let mapping = LabelMapping { canonical };

    tracing::debug!(
        labels = label_count,
        pairs = pairs.len(),
        regions = mapping.region_count(),
        "label equivalences reconciled"
    );

    Ok(mapping)
}

/// Rewrites every labeled pixel through `mapping`, in place.
///
/// All labels are checked against the mapping before any pixel changes.
pub fn apply_mapping(labels: &mut Field<Option<Label>>, mapping: &LabelMapping) -> Result<()> {
    ensure_covered(labels, mapping)?;

    for slot in labels.iter_mut() {
        if let Some(label) = slot {
            *label = mapping.canonical[*label as usize];
        }
    }

    Ok(())
}

/// [`apply_mapping`] into a caller-owned output field of the same dimensions.
pub fn apply_mapping_into(
    labels: &Field<Option<Label>>,
    mapping: &LabelMapping,
    output: &mut Field<Option<Label>>,
) -> Result<()> {
    ensure_same_dims("label output field", labels, output)?;
    ensure_covered(labels, mapping)?;

    for (out, &label) in output.iter_mut().zip(labels.iter()) {
        *out = label.map(|l| mapping.canonical[l as usize]);
    }

    Ok(())
}

fn ensure_covered(labels: &Field<Option<Label>>, mapping: &LabelMapping) -> Result<()> {
    match labels
        .iter()
        .flatten()
        .copied()
        .find(|&l| mapping.canonical(l).is_none())
    {
        Some(label) => Err(Error::UnknownLabel {
            label,
            label_count: mapping.len(),
        }),
        None => Ok(()),
    }
}

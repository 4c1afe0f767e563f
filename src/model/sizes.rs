//! Per-pane explicit sizes, keyed by pane index
//!
//! The map is never mutated in place by the update loop: every transition
//! builds a new `PaneSizes` from the previous one, so a drag step can be
//! inspected (and tested) as a plain function of its inputs.

use std::collections::BTreeMap;

use serde::Serialize;

use super::geometry::{Axis, Bounds};

/// Explicit size overrides for the panes of one container.
///
/// A pane without an entry uses flexible sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PaneSizes {
    sizes: BTreeMap<usize, Bounds>,
}

impl PaneSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes captured from measured pane bounds, in pane order
    pub fn from_measured(bounds: impl IntoIterator<Item = Bounds>) -> Self {
        bounds.into_iter().enumerate().collect()
    }

    /// Explicit size of the pane at `index`
    pub fn get(&self, index: usize) -> Option<&Bounds> {
        self.sizes.get(&index)
    }

    /// Explicit extent of the pane at `index` along `axis`
    pub fn extent(&self, index: usize, axis: Axis) -> Option<f32> {
        self.get(index).map(|b| b.extent(axis))
    }

    /// A new map with the pane at `index` set to `size`
    #[must_use]
    pub fn with_size(&self, index: usize, size: Bounds) -> Self {
        let mut sizes = self.sizes.clone();
        sizes.insert(index, size);
        Self { sizes }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(usize, Bounds)> for PaneSizes {
    fn from_iter<T: IntoIterator<Item = (usize, Bounds)>>(iter: T) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_leaves_original_untouched() {
        let original = PaneSizes::from_measured([Bounds::new(0.0, 0.0, 100.0, 50.0)]);
        let updated = original.with_size(0, Bounds::new(0.0, 0.0, 120.0, 50.0));

        assert_eq!(original.extent(0, Axis::SideBySide), Some(100.0));
        assert_eq!(updated.extent(0, Axis::SideBySide), Some(120.0));
    }

    #[test]
    fn test_from_measured_keys_by_position() {
        let sizes = PaneSizes::from_measured([
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            Bounds::new(20.0, 0.0, 30.0, 10.0),
        ]);
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.extent(1, Axis::SideBySide), Some(30.0));
        assert_eq!(sizes.extent(2, Axis::SideBySide), None);
    }

    #[test]
    fn test_serializes_as_index_map() {
        let sizes = PaneSizes::from_measured([Bounds::new(0.0, 0.0, 10.0, 20.0)]);
        let json = serde_json::to_value(&sizes).unwrap();
        assert_eq!(json["0"]["width"], 10.0);
        assert_eq!(json["0"]["height"], 20.0);
    }
}

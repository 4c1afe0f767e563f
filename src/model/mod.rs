//! Container model - the complete state of one split container
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod geometry;
pub mod layout;
pub mod sizes;

pub use drag::DragSession;
pub use geometry::{Axis, Bounds, PaneGeometry, Point, Rect};
pub use layout::{compute_layout, DividerBar, SplitLayout, DIVIDER_THICKNESS};
pub use sizes::PaneSizes;

use crate::config::SplitConfig;

/// The complete state of a split container
#[derive(Debug, Clone)]
pub struct SplitModel {
    /// Stacking axis, fixed at construction
    pub axis: Axis,
    /// Number of child panes
    pub pane_count: usize,
    /// Rectangle the container fills
    pub container: Rect,
    /// Explicit pane sizes (empty until mount)
    pub sizes: PaneSizes,
    /// Divider drag in progress, if any
    pub drag: DragSession,
    /// Whether the container is mounted and listening for pointer events
    pub mounted: bool,
}

impl SplitModel {
    /// Create an unmounted container with flexible pane sizes
    pub fn new(config: SplitConfig, pane_count: usize, container: Rect) -> Self {
        Self {
            axis: Axis::from_horizontal(config.horizontal),
            pane_count,
            container,
            sizes: PaneSizes::new(),
            drag: DragSession::Idle,
            mounted: false,
        }
    }

    /// Number of dividers (one between each adjacent pair of panes)
    #[inline]
    pub fn divider_count(&self) -> usize {
        self.pane_count.saturating_sub(1)
    }

    /// Lay out panes and dividers for the current state
    pub fn layout(&self) -> SplitLayout {
        compute_layout(self.container, self.axis, self.pane_count, &self.sizes)
    }

    /// Extent of every pane along the axis, as currently laid out
    pub fn pane_extents(&self) -> Vec<f32> {
        self.layout()
            .panes
            .iter()
            .map(|r| self.axis.main_extent(*r))
            .collect()
    }
}

//! Split layout - pane and divider rectangles for one container
//!
//! Panes with an explicit size keep exactly that extent along the axis.
//! Panes without one share whatever is left over equally. A fixed-thickness
//! divider sits between every adjacent pair; none follows the last pane.

use super::geometry::{Axis, Bounds, PaneGeometry, Rect};
use super::sizes::PaneSizes;

/// Thickness of divider bars in pixels, borders included
pub const DIVIDER_THICKNESS: f32 = 10.0;

/// A draggable divider between pane `index` and pane `index + 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBar {
    /// Index of the pane before this divider
    pub index: usize,
    /// The hit-testing and painting rectangle for this divider
    pub rect: Rect,
    /// Axis of the container the divider belongs to
    pub axis: Axis,
}

/// Computed rectangles for every pane and divider of a container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitLayout {
    pub axis: Axis,
    pub panes: Vec<Rect>,
    pub dividers: Vec<DividerBar>,
}

impl SplitLayout {
    /// Find the divider at a given point (for drag handling)
    pub fn divider_at_point(&self, x: f32, y: f32) -> Option<usize> {
        self.dividers
            .iter()
            .find(|d| d.rect.contains(x, y))
            .map(|d| d.index)
    }

    /// Total extent of panes and dividers along the axis
    pub fn content_extent(&self) -> f32 {
        let panes: f32 = self.panes.iter().map(|r| self.axis.main_extent(*r)).sum();
        panes + self.dividers.len() as f32 * DIVIDER_THICKNESS
    }
}

impl PaneGeometry for SplitLayout {
    fn pane_bounds(&self, index: usize) -> Option<Bounds> {
        self.panes.get(index).copied().map(Bounds::from)
    }
}

/// Lay out `pane_count` panes inside `container`.
pub fn compute_layout(
    container: Rect,
    axis: Axis,
    pane_count: usize,
    sizes: &PaneSizes,
) -> SplitLayout {
    if pane_count == 0 {
        return SplitLayout {
            axis,
            ..Default::default()
        };
    }

    let divider_count = pane_count - 1;
    let available = axis.main_extent(container) - divider_count as f32 * DIVIDER_THICKNESS;

    let explicit: Vec<Option<f32>> = (0..pane_count)
        .map(|i| sizes.extent(i, axis).map(|e| e.max(0.0)))
        .collect();
    let fixed: f32 = explicit.iter().flatten().sum();
    let flexible = explicit.iter().filter(|e| e.is_none()).count();
    let flex_size = if flexible > 0 {
        ((available - fixed) / flexible as f32).max(0.0)
    } else {
        0.0
    };

    let mut panes = Vec::with_capacity(pane_count);
    let mut dividers = Vec::with_capacity(divider_count);
    let mut offset = 0.0;

    for (i, extent) in explicit.iter().enumerate() {
        let size = extent.unwrap_or(flex_size);
        let pane = match axis {
            Axis::SideBySide => Rect::new(container.x + offset, container.y, size, container.height),
            Axis::Stacked => Rect::new(container.x, container.y + offset, container.width, size),
        };
        panes.push(pane);
        offset += size;

        // Add divider between children (not after last child)
        if i < divider_count {
            let rect = match axis {
                Axis::SideBySide => Rect::new(
                    container.x + offset,
                    container.y,
                    DIVIDER_THICKNESS,
                    container.height,
                ),
                Axis::Stacked => Rect::new(
                    container.x,
                    container.y + offset,
                    container.width,
                    DIVIDER_THICKNESS,
                ),
            };
            dividers.push(DividerBar {
                index: i,
                rect,
                axis,
            });
            offset += DIVIDER_THICKNESS;
        }
    }

    SplitLayout {
        axis,
        panes,
        dividers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pane_fills_container_without_dividers() {
        let layout = compute_layout(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Axis::SideBySide,
            1,
            &PaneSizes::new(),
        );
        assert_eq!(layout.panes, vec![Rect::new(0.0, 0.0, 300.0, 200.0)]);
        assert!(layout.dividers.is_empty());
    }

    #[test]
    fn test_empty_container_has_nothing() {
        let layout = compute_layout(
            Rect::new(0.0, 0.0, 300.0, 200.0),
            Axis::Stacked,
            0,
            &PaneSizes::new(),
        );
        assert!(layout.panes.is_empty());
        assert!(layout.dividers.is_empty());
        assert_eq!(layout.divider_at_point(1.0, 1.0), None);
    }

    #[test]
    fn test_flexible_panes_share_remaining_space() {
        let sizes = PaneSizes::new().with_size(0, Bounds::new(0.0, 0.0, 50.0, 100.0));
        let layout = compute_layout(Rect::new(0.0, 0.0, 270.0, 100.0), Axis::SideBySide, 3, &sizes);
        // 270 - 2 dividers (20) - 50 explicit = 200 shared by two panes
        assert_eq!(layout.panes[0].width, 50.0);
        assert_eq!(layout.panes[1].width, 100.0);
        assert_eq!(layout.panes[2].width, 100.0);
        assert_eq!(layout.panes[1].x, 60.0);
        assert_eq!(layout.panes[2].x, 170.0);
    }

    #[test]
    fn test_flexible_panes_never_go_negative() {
        let sizes = PaneSizes::new().with_size(0, Bounds::new(0.0, 0.0, 500.0, 100.0));
        let layout = compute_layout(Rect::new(0.0, 0.0, 200.0, 100.0), Axis::SideBySide, 2, &sizes);
        assert_eq!(layout.panes[1].width, 0.0);
    }
}

//! Divider drag step - computes new pane sizes from a pointer position
//!
//! The step is a pure function of the axis, the dragged pane, the pointer,
//! the measured pane geometry and the previous size map. It either returns
//! a new size map or the reason the move was rejected.

use crate::model::{Axis, PaneGeometry, PaneSizes, Point};

/// Gap kept between the pointer and the dragged pane's leading edge
pub const DRAG_MARGIN: f32 = 10.0;
/// Buffer kept before the previous pane's trailing edge
pub const PREV_PANE_BUFFER: f32 = 30.0;
/// Buffer kept before the next pane's trailing edge
pub const NEXT_PANE_BUFFER: f32 = 10.0;

/// Why a pointer move did not resize anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The dragged pane has no measurable bounds
    PaneMissing,
    /// Pointer is before the dragged pane's leading edge plus the margin
    BeforeLeadingEdge,
    /// Pointer would cross into the previous pane
    IntoPreviousPane,
    /// Pointer would cross into the next pane
    IntoNextPane,
}

/// Resize pane `pane_index` so its trailing edge follows the pointer.
///
/// When a next pane exists it absorbs the size delta, so the sum of both
/// extents along `axis` is unchanged.
pub fn resize_step<G>(
    axis: Axis,
    pane_index: usize,
    pointer: Point,
    geometry: &G,
    sizes: &PaneSizes,
) -> Result<PaneSizes, Rejection>
where
    G: PaneGeometry + ?Sized,
{
    let current = geometry
        .pane_bounds(pane_index)
        .ok_or(Rejection::PaneMissing)?;
    let coord = axis.coordinate(pointer);
    let leading = current.leading(axis);

    if coord < leading + DRAG_MARGIN {
        return Err(Rejection::BeforeLeadingEdge);
    }

    let new_extent = coord - leading - DRAG_MARGIN;

    if let Some(prev) = pane_index
        .checked_sub(1)
        .and_then(|i| geometry.pane_bounds(i))
    {
        if coord <= prev.trailing(axis) + PREV_PANE_BUFFER {
            return Err(Rejection::IntoPreviousPane);
        }
    }

    let mut next_sizes = sizes.clone();

    let next_index = pane_index + 1;
    if let Some(next) = geometry.pane_bounds(next_index) {
        if coord >= next.trailing(axis) - NEXT_PANE_BUFFER {
            return Err(Rejection::IntoNextPane);
        }
        let next_extent = next.extent(axis) + (current.extent(axis) - new_extent);
        next_sizes = next_sizes.with_size(next_index, next.with_extent(axis, next_extent));
    }

    Ok(next_sizes.with_size(pane_index, current.with_extent(axis, new_extent)))
}

//! Geometry primitives: rectangles, points, measured bounds and the split axis

use serde::{Deserialize, Serialize};

// ============================================================================
// Layout Primitives
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A point in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Axis
// ============================================================================

/// Direction along which panes are stacked and resized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Panes arranged left-to-right, separated by vertical dividers
    #[default]
    SideBySide,
    /// Panes arranged top-to-bottom, separated by horizontal dividers
    Stacked,
}

impl Axis {
    /// Map the container's `horizontal` flag to an axis.
    ///
    /// `horizontal` names the orientation of the dividers, so `true` stacks
    /// panes vertically.
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Axis::Stacked
        } else {
            Axis::SideBySide
        }
    }

    #[inline]
    pub fn is_stacked(self) -> bool {
        self == Axis::Stacked
    }

    /// The pointer coordinate measured along this axis
    #[inline]
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            Axis::SideBySide => point.x,
            Axis::Stacked => point.y,
        }
    }

    /// Length of `rect` along this axis
    #[inline]
    pub fn main_extent(self, rect: Rect) -> f32 {
        match self {
            Axis::SideBySide => rect.width,
            Axis::Stacked => rect.height,
        }
    }
}

// ============================================================================
// Measured Bounds
// ============================================================================

/// On-screen rectangle of a pane, as measured from the rendered layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Build bounds from a position and size
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Edge the pane starts at along `axis` (left or top)
    #[inline]
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::SideBySide => self.left,
            Axis::Stacked => self.top,
        }
    }

    /// Edge the pane ends at along `axis` (right or bottom)
    #[inline]
    pub fn trailing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::SideBySide => self.right,
            Axis::Stacked => self.bottom,
        }
    }

    /// Size of the pane along `axis` (width or height)
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::SideBySide => self.width,
            Axis::Stacked => self.height,
        }
    }

    /// Copy of these bounds with the extent along `axis` replaced.
    /// The leading edge stays put; the trailing edge follows.
    pub fn with_extent(&self, axis: Axis, extent: f32) -> Self {
        match axis {
            Axis::SideBySide => Self {
                width: extent,
                right: self.left + extent,
                ..*self
            },
            Axis::Stacked => Self {
                height: extent,
                bottom: self.top + extent,
                ..*self
            },
        }
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Source of measured pane bounds.
///
/// The rendered layout implements this, and so does a plain slice of
/// bounds, which lets the resize logic run against synthetic rectangles.
pub trait PaneGeometry {
    /// Bounds of the pane at `index`, or `None` if no such pane is registered
    fn pane_bounds(&self, index: usize) -> Option<Bounds>;
}

impl PaneGeometry for [Bounds] {
    fn pane_bounds(&self, index: usize) -> Option<Bounds> {
        self.get(index).copied()
    }
}

impl PaneGeometry for Vec<Bounds> {
    fn pane_bounds(&self, index: usize) -> Option<Bounds> {
        self.as_slice().pane_bounds(index)
    }
}

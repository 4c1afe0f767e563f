//! View module - paints a split container into a pixel buffer
//!
//! Painting is split from presentation: [`paint_split`] draws into any
//! `Frame`, and [`Renderer`] copies the result to a window surface.

pub mod frame;
pub mod renderer;

pub use frame::Frame;
pub use renderer::Renderer;

use crate::model::{Axis, DividerBar, Rect, SplitLayout};
use crate::theme::{Color, SplitStyle, DIVIDER_BORDER_WIDTH};

/// Something that can be rendered inside a pane
pub trait PaneContent {
    /// Paint into `rect`. Drawing is clipped to the pane.
    fn paint(&self, frame: &mut Frame, rect: Rect);
}

/// A pane filled with one color and a subtle inner outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidPane {
    pub color: Color,
}

impl SolidPane {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl PaneContent for SolidPane {
    fn paint(&self, frame: &mut Frame, rect: Rect) {
        frame.fill_rect(rect, self.color.to_argb_u32());
        frame.stroke_rect(rect, self.color.darken(0.08).to_argb_u32());
    }
}

/// Paint a laid-out container: background, panes, then dividers.
///
/// `children` pairs with `layout.panes` by index; panes without content
/// show the container background.
pub fn paint_split<C>(frame: &mut Frame, layout: &SplitLayout, children: &[C], style: &SplitStyle)
where
    C: PaneContent,
{
    frame.clear(style.background.to_argb_u32());

    for (rect, child) in layout.panes.iter().zip(children) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            continue;
        }
        frame.set_clip(*rect);
        child.paint(frame, *rect);
        frame.clear_clip();
    }

    for divider in &layout.dividers {
        paint_divider(frame, divider, style);
    }
}

/// Divider fill with a border on each long side
fn paint_divider(frame: &mut Frame, divider: &DividerBar, style: &SplitStyle) {
    let rect = divider.rect;
    frame.fill_rect(rect, style.divider.to_argb_u32());

    let border = style.divider_border.to_argb_u32();
    let (first, second) = match divider.axis {
        // Vertical bar: borders on the left and right edges
        Axis::SideBySide => (
            Rect::new(rect.x, rect.y, DIVIDER_BORDER_WIDTH, rect.height),
            Rect::new(
                rect.right() - DIVIDER_BORDER_WIDTH,
                rect.y,
                DIVIDER_BORDER_WIDTH,
                rect.height,
            ),
        ),
        // Horizontal bar: borders on the top and bottom edges
        Axis::Stacked => (
            Rect::new(rect.x, rect.y, rect.width, DIVIDER_BORDER_WIDTH),
            Rect::new(
                rect.x,
                rect.bottom() - DIVIDER_BORDER_WIDTH,
                rect.width,
                DIVIDER_BORDER_WIDTH,
            ),
        ),
    };
    frame.fill_rect(first, border);
    frame.fill_rect(second, border);
}

//! Mouse event translation for the split container
//!
//! winit reports cursor positions and button changes separately; the
//! container consumes document-wide pointer events. This module bridges
//! the two and picks the cursor icon to show over dividers.

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::CursorIcon;

use splitpane::events::PointerEvent;
use splitpane::model::Axis;

/// Primary-button pointer event for a winit window event, if it is one.
///
/// `last_position` is the most recent cursor position; button events carry
/// no coordinates of their own.
pub fn pointer_event(event: &WindowEvent, last_position: Option<(f64, f64)>) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(PointerEvent::moved(position.x as f32, position.y as f32))
        }
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            let (x, y) = last_position?;
            let (x, y) = (x as f32, y as f32);
            Some(match state {
                ElementState::Pressed => PointerEvent::down(x, y),
                ElementState::Released => PointerEvent::up(x, y),
            })
        }
        _ => None,
    }
}

/// Cursor to show over a divider of a container laid out along `axis`
pub fn divider_cursor(axis: Axis) -> CursorIcon {
    match axis {
        Axis::SideBySide => CursorIcon::ColResize,
        Axis::Stacked => CursorIcon::RowResize,
    }
}

//! Split container message handlers (mount lifecycle, divider drag)

use tracing::trace;

use super::resize::resize_step;
use crate::commands::Cmd;
use crate::messages::SplitMsg;
use crate::model::{Bounds, DragSession, PaneSizes, Point, SplitModel};

/// Handle split container messages
pub fn update_split(model: &mut SplitModel, msg: SplitMsg) -> Option<Cmd> {
    match msg {
        SplitMsg::Mount => {
            let layout = model.layout();
            model.sizes = PaneSizes::from_measured(layout.panes.iter().copied().map(Bounds::from));
            model.drag = DragSession::Idle;
            model.mounted = true;
            Some(Cmd::Redraw)
        }

        SplitMsg::Unmount => {
            model.drag = DragSession::Idle;
            model.mounted = false;
            None
        }

        SplitMsg::PointerDown { divider } => {
            if !model.mounted || divider >= model.divider_count() {
                return None;
            }
            model.drag = DragSession::Dragging {
                pane_index: divider,
            };
            None
        }

        SplitMsg::PointerMove { x, y } => drag_to(model, Point::new(x, y)),

        SplitMsg::PointerUp => {
            if !model.drag.is_active() {
                return None;
            }
            model.drag = DragSession::Idle;
            Some(Cmd::Redraw)
        }
    }
}

/// Apply one drag step for the active session, if any
fn drag_to(model: &mut SplitModel, pointer: Point) -> Option<Cmd> {
    let pane_index = model.drag.pane_index()?;
    let layout = model.layout();

    match resize_step(model.axis, pane_index, pointer, &layout, &model.sizes) {
        Ok(sizes) => {
            model.sizes = sizes;
            Some(Cmd::Redraw)
        }
        Err(rejection) => {
            trace!(target: "drag", pane_index, ?rejection, "move rejected");
            None
        }
    }
}

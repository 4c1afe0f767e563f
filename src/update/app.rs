//! Application message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{Rect, SplitModel};

/// Handle application messages
pub fn update_app(model: &mut SplitModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            // The container is absolutely positioned and fills the window
            model.container = Rect::new(0.0, 0.0, width as f32, height as f32);
            Some(Cmd::Redraw)
        }
    }
}

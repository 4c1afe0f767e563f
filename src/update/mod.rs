//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
pub mod resize;
mod split;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SplitModel;

#[cfg(debug_assertions)]
use crate::tracing::SizeSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use resize::{resize_step, Rejection, DRAG_MARGIN, NEXT_PANE_BUFFER, PREV_PANE_BUFFER};
pub use split::update_split;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut SplitModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut SplitModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Split(m) => split::update_split(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after pane sizes and logs diffs for debugging.
/// Pointer moves without an active drag are too noisy to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SplitModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::SplitMsg;

    let is_noisy =
        matches!(&msg, Msg::Split(SplitMsg::PointerMove { .. })) && !model.drag.is_active();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SizeSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SizeSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "sizes", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Split::PointerDown { divider: 0 }`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Split(m) => format!("Split::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Split container messages (mount lifecycle and pointer interaction)
#[derive(Debug, Clone, PartialEq)]
pub enum SplitMsg {
    /// Container was mounted; capture every pane's bounds as its explicit size
    Mount,
    /// Container was unmounted; any drag in progress is abandoned
    Unmount,
    /// Pointer pressed on a divider (index of the pane before it)
    PointerDown { divider: usize },
    /// Pointer moved anywhere in the document
    PointerMove { x: f32, y: f32 },
    /// Pointer released anywhere in the document
    PointerUp,
}

/// Application-level messages (window events)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized; the container fills the window
    Resize(u32, u32),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Split container messages
    Split(SplitMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pointer-down-on-divider message
    pub fn pointer_down(divider: usize) -> Self {
        Msg::Split(SplitMsg::PointerDown { divider })
    }

    /// Create a pointer-move message
    pub fn pointer_move(x: f32, y: f32) -> Self {
        Msg::Split(SplitMsg::PointerMove { x, y })
    }

    /// Create a pointer-up message
    pub fn pointer_up() -> Self {
        Msg::Split(SplitMsg::PointerUp)
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}

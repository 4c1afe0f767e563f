//! Drag session state for the divider being dragged

/// Transient record of which divider is being dragged.
///
/// Owned by exactly one container; at most one session is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No drag in progress
    #[default]
    Idle,
    /// The divider after pane `pane_index` is being dragged
    Dragging { pane_index: usize },
}

impl DragSession {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Index of the pane being resized, if a drag is active
    #[inline]
    pub fn pane_index(&self) -> Option<usize> {
        match self {
            DragSession::Idle => None,
            DragSession::Dragging { pane_index } => Some(*pane_index),
        }
    }
}

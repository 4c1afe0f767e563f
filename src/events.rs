//! Document-wide pointer event target
//!
//! Components subscribe to pointer events that happen anywhere in the
//! window, not just over their own rectangles. A subscription lives exactly
//! as long as the [`ListenerGuard`] returned by [`EventTarget::add_listener`];
//! dropping the guard removes the handler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::commands::Cmd;
use crate::model::Point;

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// A pointer event in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            pos: Point::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pos: Point::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            pos: Point::new(x, y),
        }
    }
}

type Handler = Rc<RefCell<dyn FnMut(&PointerEvent) -> Option<Cmd>>>;

struct Listener {
    id: u64,
    kind: PointerEventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Dispatch target shared by every component in a window
#[derive(Clone, Default)]
pub struct EventTarget {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    ///
    /// The handler stays registered until the returned guard is dropped.
    pub fn add_listener<F>(&self, kind: PointerEventKind, handler: F) -> ListenerGuard
    where
        F: FnMut(&PointerEvent) -> Option<Cmd> + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        tracing::trace!(target: "events", id, ?kind, "listener added");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of registered listeners (all kinds)
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Number of registered listeners for one kind
    pub fn listeners_for(&self, kind: PointerEventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Deliver `event` to every listener registered for its kind.
    ///
    /// Handlers may add or drop listeners while running; the set of handlers
    /// invoked is fixed when dispatch starts.
    pub fn dispatch(&self, event: PointerEvent) -> Option<Cmd> {
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        let cmds = handlers.iter().filter_map(|handler| {
            // A handler that re-enters dispatch does not see its own event twice
            let mut handler = handler.try_borrow_mut().ok()?;
            (&mut *handler)(&event)
        });
        Cmd::batch(cmds)
    }
}

/// Scoped registration of one listener; dropping it unregisters the handler
#[must_use = "dropping the guard immediately unregisters the listener"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Take the listener out before it drops, so a handler's own Drop
        // can't observe the registry borrowed
        let removed = {
            let mut registry = registry.borrow_mut();
            registry
                .listeners
                .iter()
                .position(|l| l.id == self.id)
                .map(|pos| registry.listeners.remove(pos))
        };
        if removed.is_some() {
            tracing::trace!(target: "events", id = self.id, "listener removed");
        }
    }
}

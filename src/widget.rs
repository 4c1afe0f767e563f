//! Split container component
//!
//! `SplitPane` owns one container's model. Mounting it subscribes to the
//! document-wide pointer-move and pointer-up events; the returned
//! [`Mounted`] handle keeps those subscriptions alive and unmounts the
//! component when dropped. Pointer-down is only accepted over a divider,
//! through [`SplitPane::pointer_down`].

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::commands::Cmd;
use crate::config::SplitConfig;
use crate::events::{EventTarget, ListenerGuard, PointerEventKind};
use crate::messages::{Msg, SplitMsg};
use crate::model::{Rect, SplitLayout, SplitModel};
use crate::update::update;

/// One split container instance
#[derive(Debug)]
pub struct SplitPane {
    model: Rc<RefCell<SplitModel>>,
}

impl SplitPane {
    pub fn new(config: SplitConfig, pane_count: usize, container: Rect) -> Self {
        Self {
            model: Rc::new(RefCell::new(SplitModel::new(config, pane_count, container))),
        }
    }

    /// Mount the container: measure every pane and start listening for
    /// document-wide pointer moves and releases.
    pub fn mount(&self, document: &EventTarget) -> Mounted {
        update(&mut self.model.borrow_mut(), Msg::Split(SplitMsg::Mount));

        let on_move = {
            let model = Rc::downgrade(&self.model);
            document.add_listener(PointerEventKind::Move, move |event| {
                send(&model, Msg::pointer_move(event.pos.x, event.pos.y))
            })
        };
        let on_up = {
            let model = Rc::downgrade(&self.model);
            document.add_listener(PointerEventKind::Up, move |_| send(&model, Msg::pointer_up()))
        };

        tracing::debug!(
            panes = self.model.borrow().pane_count,
            "split container mounted"
        );

        Mounted {
            model: Rc::downgrade(&self.model),
            _on_move: on_move,
            _on_up: on_up,
        }
    }

    /// Pointer pressed at `(x, y)`. Starts a drag when the point is over a divider.
    pub fn pointer_down(&self, x: f32, y: f32) -> Option<Cmd> {
        let divider = self.divider_at(x, y)?;
        update(&mut self.model.borrow_mut(), Msg::pointer_down(divider))
    }

    /// Index of the divider under `(x, y)`, if any
    pub fn divider_at(&self, x: f32, y: f32) -> Option<usize> {
        self.model.borrow().layout().divider_at_point(x, y)
    }

    /// Resize the container to fill a `width` x `height` window
    pub fn resize(&self, width: u32, height: u32) -> Option<Cmd> {
        update(&mut self.model.borrow_mut(), Msg::resize(width, height))
    }

    /// Feed a message straight into the update loop
    pub fn send(&self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model.borrow_mut(), msg)
    }

    /// Current pane and divider rectangles
    pub fn layout(&self) -> SplitLayout {
        self.model.borrow().layout()
    }

    /// Read-only view of the model
    pub fn model(&self) -> Ref<'_, SplitModel> {
        self.model.borrow()
    }
}

/// Route a message to a component that may already be gone
fn send(model: &Weak<RefCell<SplitModel>>, msg: Msg) -> Option<Cmd> {
    let model = model.upgrade()?;
    let mut model = model.try_borrow_mut().ok()?;
    update(&mut model, msg)
}

/// A mounted container. Dropping it removes the pointer listeners and
/// abandons any drag in progress.
///
/// Drop it only while no [`SplitPane::model`] borrow is live: the listeners
/// are still removed, but the model keeps its mounted flag and drag session.
#[must_use = "dropping the handle immediately unmounts the container"]
#[derive(Debug)]
pub struct Mounted {
    model: Weak<RefCell<SplitModel>>,
    _on_move: ListenerGuard,
    _on_up: ListenerGuard,
}

impl Mounted {
    /// Unmount explicitly (same as dropping the handle)
    pub fn unmount(self) {}
}

impl Drop for Mounted {
    fn drop(&mut self) {
        // Listener guards drop after this, unregistering both handlers
        let Some(model) = self.model.upgrade() else {
            return;
        };
        match model.try_borrow_mut() {
            Ok(mut model) => {
                update(&mut model, Msg::Split(SplitMsg::Unmount));
                tracing::debug!("split container unmounted");
            }
            Err(_) => {
                tracing::warn!("split container model still borrowed; unmount state not reset");
            }
        };
    }
}

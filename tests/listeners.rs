//! Tests for document-wide listener registration and the mounted component

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::mounted_split;
use splitpane::commands::Cmd;
use splitpane::config::SplitConfig;
use splitpane::events::{EventTarget, PointerEvent, PointerEventKind};
use splitpane::model::{DragSession, Rect};
use splitpane::widget::SplitPane;

// ============================================================================
// Mount / unmount
// ============================================================================

#[test]
fn test_mount_registers_move_and_up_listeners() {
    let (document, _split, _mounted) = mounted_split();

    assert_eq!(document.listener_count(), 2);
    assert_eq!(document.listeners_for(PointerEventKind::Move), 1);
    assert_eq!(document.listeners_for(PointerEventKind::Up), 1);
    assert_eq!(document.listeners_for(PointerEventKind::Down), 0);
}

#[test]
fn test_unmount_removes_listeners() {
    let (document, split, mounted) = mounted_split();

    mounted.unmount();

    assert_eq!(document.listener_count(), 0);
    assert!(!split.model().mounted);
}

#[test]
fn test_dropping_handle_unmounts() {
    let (document, split, mounted) = mounted_split();
    split.pointer_down(105.0, 100.0);
    assert!(split.model().drag.is_active());

    drop(mounted);

    assert_eq!(document.listener_count(), 0);
    assert_eq!(split.model().drag, DragSession::Idle);
}

#[test]
fn test_dropping_handle_during_model_borrow() {
    let (document, split, mounted) = mounted_split();
    split.pointer_down(105.0, 100.0);

    {
        let model = split.model();
        drop(mounted);
        // Listeners go away even though the model could not be updated
        assert_eq!(document.listener_count(), 0);
        assert!(model.mounted);
        assert!(model.drag.is_active());
    }

    // Later events reach nothing
    document.dispatch(PointerEvent::moved(130.0, 100.0));
    assert_eq!(split.model().pane_extents(), vec![100.0, 100.0, 100.0]);
}

#[test]
fn test_events_after_unmount_change_nothing() {
    let (document, split, mounted) = mounted_split();
    split.pointer_down(105.0, 100.0);
    mounted.unmount();
    let before = split.model().sizes.clone();

    assert_eq!(document.dispatch(PointerEvent::moved(130.0, 100.0)), None);
    assert_eq!(document.dispatch(PointerEvent::up(130.0, 100.0)), None);
    assert_eq!(split.model().sizes, before);
}

#[test]
fn test_two_containers_on_one_document() {
    let document = EventTarget::new();
    let a = SplitPane::new(SplitConfig::default(), 3, Rect::new(0.0, 0.0, 320.0, 200.0));
    let b = SplitPane::new(SplitConfig::default(), 2, Rect::new(0.0, 0.0, 210.0, 200.0));
    let _ma = a.mount(&document);
    let mb = b.mount(&document);
    assert_eq!(document.listener_count(), 4);

    drop(mb);
    assert_eq!(document.listener_count(), 2);

    // The surviving container still drags
    a.pointer_down(105.0, 100.0);
    document.dispatch(PointerEvent::moved(130.0, 100.0));
    assert_eq!(a.model().pane_extents(), vec![120.0, 80.0, 100.0]);
}

#[test]
fn test_component_dropped_before_handle() {
    let document = EventTarget::new();
    let split = SplitPane::new(SplitConfig::default(), 2, Rect::new(0.0, 0.0, 210.0, 100.0));
    let mounted = split.mount(&document);

    drop(split);
    // Listeners outlive the component but ignore events
    assert_eq!(document.dispatch(PointerEvent::moved(50.0, 50.0)), None);

    drop(mounted);
    assert_eq!(document.listener_count(), 0);
}

// ============================================================================
// Dragging through the document
// ============================================================================

#[test]
fn test_drag_through_document_events() {
    let (document, split, _mounted) = mounted_split();

    assert_eq!(split.divider_at(105.0, 100.0), Some(0));
    split.pointer_down(105.0, 100.0);
    document.dispatch(PointerEvent::down(105.0, 100.0));

    assert_eq!(document.dispatch(PointerEvent::moved(130.0, 100.0)), Some(Cmd::Redraw));
    assert_eq!(split.model().pane_extents(), vec![120.0, 80.0, 100.0]);

    // Moves continue to apply when the pointer leaves the divider
    document.dispatch(PointerEvent::moved(60.0, 180.0));
    assert_eq!(split.model().pane_extents(), vec![50.0, 150.0, 100.0]);

    document.dispatch(PointerEvent::up(60.0, 180.0));
    assert!(!split.model().drag.is_active());

    document.dispatch(PointerEvent::moved(150.0, 100.0));
    assert_eq!(split.model().pane_extents(), vec![50.0, 150.0, 100.0]);
}

#[test]
fn test_pointer_down_off_divider_does_not_start_drag() {
    let (document, split, _mounted) = mounted_split();

    assert_eq!(split.pointer_down(50.0, 100.0), None);
    document.dispatch(PointerEvent::moved(130.0, 100.0));

    assert_eq!(split.model().pane_extents(), vec![100.0, 100.0, 100.0]);
}

// ============================================================================
// Event target
// ============================================================================

#[test]
fn test_dropped_guard_stops_delivery() {
    let document = EventTarget::new();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let guard = document.add_listener(PointerEventKind::Up, move |_| {
        counter.set(counter.get() + 1);
        None
    });
    document.dispatch(PointerEvent::up(0.0, 0.0));
    drop(guard);
    document.dispatch(PointerEvent::up(0.0, 0.0));

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_guard_outliving_target() {
    let document = EventTarget::new();
    let guard = document.add_listener(PointerEventKind::Move, |_| None);
    drop(document);
    // Nothing to unregister from; must not panic
    drop(guard);
}

//! Tests for the drag session message flow

mod common;

use common::{assert_extent, mounted_model, test_model};
use splitpane::commands::Cmd;
use splitpane::messages::{Msg, SplitMsg};
use splitpane::model::{Axis, DragSession};
use splitpane::update::update;

// ============================================================================
// Mount
// ============================================================================

#[test]
fn test_mount_captures_measured_sizes() {
    let mut model = test_model(Axis::SideBySide, 3, 320.0, 200.0);
    assert!(model.sizes.is_empty());

    let cmd = update(&mut model, Msg::Split(SplitMsg::Mount));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.mounted);
    assert_eq!(model.sizes.len(), 3);
    for i in 0..3 {
        assert_extent(model.sizes.extent(i, Axis::SideBySide).unwrap(), 100.0);
    }
}

#[test]
fn test_mount_with_no_panes() {
    let mut model = test_model(Axis::SideBySide, 0, 320.0, 200.0);
    update(&mut model, Msg::Split(SplitMsg::Mount));
    assert!(model.sizes.is_empty());
    assert_eq!(model.divider_count(), 0);
}

// ============================================================================
// Pointer flow
// ============================================================================

#[test]
fn test_full_drag_sequence() {
    let mut model = mounted_model();

    update(&mut model, Msg::pointer_down(0));
    assert_eq!(model.drag, DragSession::Dragging { pane_index: 0 });

    assert_eq!(update(&mut model, Msg::pointer_move(130.0, 50.0)), Some(Cmd::Redraw));
    assert_eq!(model.pane_extents(), vec![120.0, 80.0, 100.0]);

    assert_eq!(update(&mut model, Msg::pointer_up()), Some(Cmd::Redraw));
    assert_eq!(model.drag, DragSession::Idle);
}

#[test]
fn test_each_step_measures_the_current_layout() {
    let mut model = mounted_model();

    update(&mut model, Msg::pointer_down(0));
    update(&mut model, Msg::pointer_move(130.0, 50.0));
    update(&mut model, Msg::pointer_move(150.0, 50.0));

    // Second step starts from 120/80, not from the sizes at pointer-down
    assert_eq!(model.pane_extents(), vec![140.0, 60.0, 100.0]);
}

#[test]
fn test_last_divider_only_touches_last_two_panes() {
    // Four panes of 100: dividers at 100, 210 and 320
    let mut model = test_model(Axis::SideBySide, 4, 430.0, 200.0);
    update(&mut model, Msg::Split(SplitMsg::Mount));
    assert_eq!(model.divider_count(), 3);

    update(&mut model, Msg::pointer_down(2));
    assert_eq!(update(&mut model, Msg::pointer_move(350.0, 50.0)), Some(Cmd::Redraw));
    assert_eq!(model.pane_extents(), vec![100.0, 100.0, 120.0, 80.0]);

    update(&mut model, Msg::pointer_move(260.0, 50.0));
    assert_eq!(model.pane_extents(), vec![100.0, 100.0, 30.0, 170.0]);
    assert_eq!(model.layout().content_extent(), 430.0);
}

#[test]
fn test_move_without_drag_changes_nothing() {
    let mut model = mounted_model();
    let before = model.sizes.clone();

    assert_eq!(update(&mut model, Msg::pointer_move(130.0, 50.0)), None);
    assert_eq!(model.sizes, before);
}

#[test]
fn test_move_after_pointer_up_changes_nothing() {
    let mut model = mounted_model();

    update(&mut model, Msg::pointer_down(0));
    update(&mut model, Msg::pointer_move(130.0, 50.0));
    update(&mut model, Msg::pointer_up());
    let before = model.sizes.clone();

    update(&mut model, Msg::pointer_move(60.0, 50.0));
    assert_eq!(model.sizes, before);
}

#[test]
fn test_rejected_move_keeps_sizes_and_session() {
    let mut model = mounted_model();
    update(&mut model, Msg::pointer_down(1));
    let before = model.sizes.clone();

    // Into pane 0's buffer
    assert_eq!(update(&mut model, Msg::pointer_move(120.0, 50.0)), None);
    assert_eq!(model.sizes, before);
    assert!(model.drag.is_active());

    // Still dragging; a valid move applies
    update(&mut model, Msg::pointer_move(240.0, 50.0));
    assert_eq!(model.pane_extents(), vec![100.0, 120.0, 80.0]);
}

#[test]
fn test_pointer_up_while_idle_is_a_noop() {
    let mut model = mounted_model();
    assert_eq!(update(&mut model, Msg::pointer_up()), None);
    assert_eq!(model.drag, DragSession::Idle);
}

#[test]
fn test_pointer_down_on_unknown_divider_is_ignored() {
    let mut model = mounted_model();
    assert_eq!(model.divider_count(), 2);

    update(&mut model, Msg::pointer_down(2));
    assert_eq!(model.drag, DragSession::Idle);
}

#[test]
fn test_pointer_down_before_mount_is_ignored() {
    let mut model = test_model(Axis::SideBySide, 3, 320.0, 200.0);
    update(&mut model, Msg::pointer_down(0));
    assert_eq!(model.drag, DragSession::Idle);
}

#[test]
fn test_new_pointer_down_replaces_active_session() {
    let mut model = mounted_model();
    update(&mut model, Msg::pointer_down(0));
    update(&mut model, Msg::pointer_down(1));
    assert_eq!(model.drag.pane_index(), Some(1));
}

#[test]
fn test_unmount_abandons_drag() {
    let mut model = mounted_model();
    update(&mut model, Msg::pointer_down(0));

    update(&mut model, Msg::Split(SplitMsg::Unmount));

    assert!(!model.mounted);
    assert_eq!(model.drag, DragSession::Idle);
}

// ============================================================================
// Stacked containers
// ============================================================================

#[test]
fn test_stacked_drag_changes_heights() {
    let mut model = test_model(Axis::Stacked, 2, 200.0, 210.0);
    update(&mut model, Msg::Split(SplitMsg::Mount));

    update(&mut model, Msg::pointer_down(0));
    update(&mut model, Msg::pointer_move(5.0, 60.0));

    assert_eq!(model.pane_extents(), vec![50.0, 150.0]);
    let layout = model.layout();
    assert_eq!(layout.dividers[0].rect.y, 50.0);
    assert_eq!(layout.panes[1].y, 60.0);
}

// ============================================================================
// Window resize
// ============================================================================

#[test]
fn test_resize_updates_container() {
    let mut model = mounted_model();
    assert_eq!(update(&mut model, Msg::resize(640, 480)), Some(Cmd::Redraw));
    assert_eq!(model.container.width, 640.0);
    assert_eq!(model.container.height, 480.0);
    // Explicit sizes survive the resize
    assert_eq!(model.pane_extents(), vec![100.0, 100.0, 100.0]);
}

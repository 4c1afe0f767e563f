//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use splitpane::config::SplitConfig;
use splitpane::events::EventTarget;
use splitpane::model::{Axis, Bounds, Rect, SplitModel};
use splitpane::update::update;
use splitpane::widget::{Mounted, SplitPane};
use splitpane::Msg;

/// Side-by-side panes with the given widths, separated by 10px dividers
pub fn row(widths: &[f32]) -> Vec<Bounds> {
    let mut left = 0.0;
    widths
        .iter()
        .map(|&w| {
            let b = Bounds::new(left, 0.0, w, 200.0);
            left += w + 10.0;
            b
        })
        .collect()
}

/// Stacked panes with the given heights, separated by 10px dividers
pub fn column(heights: &[f32]) -> Vec<Bounds> {
    let mut top = 0.0;
    heights
        .iter()
        .map(|&h| {
            let b = Bounds::new(0.0, top, 200.0, h);
            top += h + 10.0;
            b
        })
        .collect()
}

/// Unmounted model for `pane_count` panes in a `width` x `height` container
pub fn test_model(axis: Axis, pane_count: usize, width: f32, height: f32) -> SplitModel {
    SplitModel::new(
        SplitConfig {
            horizontal: axis.is_stacked(),
        },
        pane_count,
        Rect::new(0.0, 0.0, width, height),
    )
}

/// Three side-by-side panes of 100px each (container 320 x 200), mounted
pub fn mounted_model() -> SplitModel {
    let mut model = test_model(Axis::SideBySide, 3, 320.0, 200.0);
    update(&mut model, Msg::Split(splitpane::messages::SplitMsg::Mount));
    model
}

/// Three side-by-side panes of 100px each, mounted on a fresh document
pub fn mounted_split() -> (EventTarget, SplitPane, Mounted) {
    let document = EventTarget::new();
    let split = SplitPane::new(
        SplitConfig::default(),
        3,
        Rect::new(0.0, 0.0, 320.0, 200.0),
    );
    let mounted = split.mount(&document);
    (document, split, mounted)
}

/// Assert two extents agree within float noise
pub fn assert_extent(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected extent {}, got {}",
        expected,
        actual
    );
}

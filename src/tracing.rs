//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! divider drags and pane size transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=sizes=debug,drag=trace` - scoped filtering
//! - `RUST_LOG=splitpane::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/splitpane/logs/splitpane.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DragSession, SplitModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/splitpane/logs/splitpane.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_NAME,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of pane sizes and drag state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSnapshot {
    pub drag: DragSession,
    /// Explicit extent along the axis per pane (`None` = flexible)
    pub extents: Vec<Option<f32>>,
}

impl SizeSnapshot {
    pub fn from_model(model: &SplitModel) -> Self {
        Self {
            drag: model.drag,
            extents: (0..model.pane_count)
                .map(|i| model.sizes.extent(i, model.axis))
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SizeSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.drag != other.drag {
            changes.push(format!("drag: {:?} → {:?}", self.drag, other.drag));
        }

        if self.extents.len() != other.extents.len() {
            changes.push(format!(
                "pane count: {} → {}",
                self.extents.len(),
                other.extents.len()
            ));
        } else {
            for (i, (before, after)) in self.extents.iter().zip(&other.extents).enumerate() {
                if before != after {
                    changes.push(format!(
                        "#{}: {} → {}",
                        i,
                        fmt_extent(*before),
                        fmt_extent(*after)
                    ));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn fmt_extent(extent: Option<f32>) -> String {
    match extent {
        Some(e) => format!("{}", e),
        None => "flex".to_string(),
    }
}

//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the demo:
//! - `app` - ApplicationHandler and window management
//! - `mouse` - winit mouse events to document pointer events

pub mod app;
pub mod mouse;

pub use app::App;

//! Split Pane - Elm-style resizable split container
//!
//! This crate provides a container that lays out an ordered sequence of panes
//! along one axis, separated by draggable dividers. Dragging a divider moves
//! space between the pane before it and the pane after it, keeping the
//! container's total size constant.
//!
//! State changes flow through [`update::update`] following the Elm
//! Architecture pattern; [`widget::SplitPane`] wires that loop to a
//! document-wide [`events::EventTarget`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod events;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{DemoConfig, SplitConfig};
pub use events::EventTarget;
pub use messages::Msg;
pub use model::SplitModel;
pub use widget::SplitPane;

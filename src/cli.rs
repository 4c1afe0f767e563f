//! Command-line argument parsing for the demo window
//!
//! CLI values override whatever the config file says.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DemoConfig, SplitConfig};
use crate::theme::Color;

/// Upper bound on panes the demo will create
pub const MAX_PANES: usize = 32;

/// A resizable split-pane container demo
#[derive(Parser, Debug, Default)]
#[command(name = "splitpane", version, about = "A resizable split-pane demo")]
pub struct CliArgs {
    /// Stack panes vertically (horizontal dividers)
    #[arg(long)]
    pub horizontal: bool,

    /// Number of panes to show (colors cycle through the configured list)
    #[arg(short = 'p', long, value_name = "N")]
    pub panes: Option<usize>,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Options for the split container
    pub split: SplitConfig,
    /// One color per pane, in order
    pub pane_colors: Vec<Color>,
    /// Initial window size (logical pixels)
    pub window_size: (u32, u32),
}

impl CliArgs {
    /// Load the config file this invocation points at
    pub fn load_config(&self) -> DemoConfig {
        match &self.config {
            Some(path) => DemoConfig::load_from(path),
            None => DemoConfig::load(),
        }
    }

    /// Merge parsed CLI args over `file` into a startup configuration
    pub fn into_config(self, file: DemoConfig) -> Result<StartupConfig, String> {
        let palette = file.pane_colors();
        let pane_count = self.panes.unwrap_or(palette.len());

        if pane_count > MAX_PANES {
            return Err(format!("At most {} panes are supported", MAX_PANES));
        }
        if palette.is_empty() && pane_count > 0 {
            return Err("Config lists no pane colors".to_string());
        }

        let pane_colors = palette.iter().copied().cycle().take(pane_count).collect();

        let width = self.width.unwrap_or(file.window_width);
        let height = self.height.unwrap_or(file.window_height);
        if width == 0 || height == 0 {
            return Err("Window size must be non-zero".to_string());
        }

        Ok(StartupConfig {
            split: SplitConfig {
                horizontal: self.horizontal || file.horizontal,
            },
            pane_colors,
            window_size: (width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_file() {
        let config = CliArgs::default()
            .into_config(DemoConfig::default())
            .unwrap();
        assert!(!config.split.horizontal);
        assert_eq!(config.pane_colors.len(), 3);
        assert_eq!(config.window_size, (800, 600));
    }

    #[test]
    fn test_horizontal_flag_overrides_file() {
        let args = CliArgs {
            horizontal: true,
            ..Default::default()
        };
        let config = args.into_config(DemoConfig::default()).unwrap();
        assert!(config.split.horizontal);
    }

    #[test]
    fn test_pane_colors_cycle() {
        let args = CliArgs {
            panes: Some(5),
            ..Default::default()
        };
        let config = args.into_config(DemoConfig::default()).unwrap();
        assert_eq!(config.pane_colors.len(), 5);
        assert_eq!(config.pane_colors[3], config.pane_colors[0]);
    }

    #[test]
    fn test_zero_panes_is_allowed() {
        let args = CliArgs {
            panes: Some(0),
            ..Default::default()
        };
        let config = args.into_config(DemoConfig::default()).unwrap();
        assert!(config.pane_colors.is_empty());
    }

    #[test]
    fn test_too_many_panes() {
        let args = CliArgs {
            panes: Some(MAX_PANES + 1),
            ..Default::default()
        };
        assert!(args.into_config(DemoConfig::default()).is_err());
    }

    #[test]
    fn test_zero_window_size_is_rejected() {
        let args = CliArgs {
            width: Some(0),
            ..Default::default()
        };
        assert!(args.into_config(DemoConfig::default()).is_err());
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from(["splitpane", "--horizontal", "-p", "4", "--width", "640"]);
        assert!(args.horizontal);
        assert_eq!(args.panes, Some(4));
        assert_eq!(args.width, Some(640));
        assert_eq!(args.height, None);
    }
}

//! Container and demo configuration
//!
//! `SplitConfig` is the component option set. `DemoConfig` is what the demo
//! window persists in `~/.config/splitpane/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Color;

/// Options accepted by a split container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// `false` = side-by-side panes with vertical dividers,
    /// `true` = stacked panes with horizontal dividers
    #[serde(default)]
    pub horizontal: bool,
}

/// Demo window configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Stack panes vertically instead of side by side
    #[serde(default)]
    pub horizontal: bool,
    /// Background color of each pane ("#RRGGBB"), one entry per pane
    #[serde(default = "default_panes")]
    pub panes: Vec<String>,
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_panes() -> Vec<String> {
    vec![
        "#FDF6E3".to_string(),
        "#EEF4FB".to_string(),
        "#F3EFF8".to_string(),
    ]
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            horizontal: false,
            panes: default_panes(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl DemoConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Component options derived from this config
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig {
            horizontal: self.horizontal,
        }
    }

    /// Parsed pane colors; invalid entries fall back to white
    pub fn pane_colors(&self) -> Vec<Color> {
        self.panes
            .iter()
            .map(|hex| {
                Color::from_hex(hex).unwrap_or_else(|e| {
                    tracing::warn!("Invalid pane color {:?}: {}", hex, e);
                    Color::rgb(255, 255, 255)
                })
            })
            .collect()
    }
}

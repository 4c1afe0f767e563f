//! Screenshot generator for the split container
//!
//! Renders headless screenshots from YAML scenario definitions. Each scenario
//! mounts a container, replays a scripted sequence of pointer events and
//! writes the final frame as PNG, plus the final pane sizes as JSON.
//!
//! Usage:
//!   cargo run --bin screenshot -- --scenario scenarios/drag-first-divider.yaml
//!   cargo run --bin screenshot -- --all
//!   cargo run --bin screenshot -- --all --out-dir screenshots/output

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use splitpane::config::{DemoConfig, SplitConfig};
use splitpane::events::{EventTarget, PointerEvent};
use splitpane::model::Rect;
use splitpane::theme::{Color, SplitStyle};
use splitpane::view::{paint_split, Frame, SolidPane};
use splitpane::widget::SplitPane;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "screenshot", about = "Generate screenshots of split containers")]
struct Args {
    /// Path to a single scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Run all scenarios in the scenarios directory
    #[arg(long)]
    all: bool,
    /// Directory containing scenario YAML files
    #[arg(long, default_value = "scenarios")]
    scenarios_dir: PathBuf,
    /// Directory for output PNG files
    #[arg(long, default_value = "screenshots/output")]
    out_dir: PathBuf,
    /// Override width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Override height in pixels
    #[arg(long)]
    height: Option<u32>,
}

// ---------------------------------------------------------------------------
// Scenario YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct Scenario {
    name: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default)]
    horizontal: bool,
    /// Pane colors ("#RRGGBB"), one per pane
    #[serde(default = "default_panes")]
    panes: Vec<String>,
    #[serde(default)]
    events: Vec<ScenarioEvent>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ScenarioEvent {
    Down(Pos),
    Move(Pos),
    Up(Pos),
}

#[derive(Deserialize, Debug, Clone, Copy)]
struct Pos {
    x: f32,
    y: f32,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_panes() -> Vec<String> {
    DemoConfig::default().panes
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Mount a container for `scenario`, replay its events and paint the result
fn render_scenario(scenario: &Scenario) -> Result<(Vec<u32>, String)> {
    let children = scenario
        .panes
        .iter()
        .map(|hex| {
            Color::from_hex(hex)
                .map(SolidPane::new)
                .map_err(|e| anyhow::anyhow!("invalid pane color {:?}: {}", hex, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let document = EventTarget::new();
    let split = SplitPane::new(
        SplitConfig {
            horizontal: scenario.horizontal,
        },
        children.len(),
        Rect::new(0.0, 0.0, scenario.width as f32, scenario.height as f32),
    );
    let mounted = split.mount(&document);

    for event in &scenario.events {
        match *event {
            ScenarioEvent::Down(Pos { x, y }) => {
                split.pointer_down(x, y);
                document.dispatch(PointerEvent::down(x, y));
            }
            ScenarioEvent::Move(Pos { x, y }) => {
                document.dispatch(PointerEvent::moved(x, y));
            }
            ScenarioEvent::Up(Pos { x, y }) => {
                document.dispatch(PointerEvent::up(x, y));
            }
        }
    }

    let (width, height) = (scenario.width as usize, scenario.height as usize);
    let mut buffer = vec![0u32; width * height];
    {
        let mut frame = Frame::new(&mut buffer, width, height);
        paint_split(&mut frame, &split.layout(), &children, &SplitStyle::default());
    }

    let sizes = serde_json::to_string_pretty(&split.model().sizes)
        .context("serializing pane sizes")?;
    mounted.unmount();

    Ok((buffer, sizes))
}

// ---------------------------------------------------------------------------
// PNG output
// ---------------------------------------------------------------------------

/// Byte length of a `width` x `height` RGBA image
fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn save_png(buffer: &[u32], width: u32, height: u32, path: &Path) -> Result<()> {
    // Convert ARGB (0xAARRGGBB) to RGBA bytes
    let mut rgba = Vec::with_capacity(rgba_len(width, height));
    for &pixel in buffer {
        let r = ((pixel >> 16) & 0xFF) as u8;
        let g = ((pixel >> 8) & 0xFF) as u8;
        let b = (pixel & 0xFF) as u8;
        let a = ((pixel >> 24) & 0xFF) as u8;
        rgba.extend_from_slice(&[r, g, b, a]);
    }

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Scenario loading
// ---------------------------------------------------------------------------

fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let scenario: Scenario = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(scenario)
}

fn collect_scenarios(args: &Args) -> Result<Vec<(PathBuf, Scenario)>> {
    let mut scenarios = Vec::new();

    if let Some(ref path) = args.scenario {
        let scenario = load_scenario(path)?;
        scenarios.push((path.clone(), scenario));
    } else if args.all {
        if !args.scenarios_dir.exists() {
            anyhow::bail!(
                "scenarios directory does not exist: {}",
                args.scenarios_dir.display()
            );
        }
        let mut entries: Vec<_> = std::fs::read_dir(&args.scenarios_dir)
            .with_context(|| format!("reading scenarios dir {}", args.scenarios_dir.display()))?
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        entries.sort_by_key(|e| e.path());

        for entry in entries {
            let path = entry.path();
            match load_scenario(&path) {
                Ok(scenario) => scenarios.push((path, scenario)),
                Err(e) => eprintln!("Warning: skipping {}: {}", path.display(), e),
            }
        }

        if scenarios.is_empty() {
            anyhow::bail!("no scenario files found in {}", args.scenarios_dir.display());
        }
    } else {
        anyhow::bail!("specify --scenario <file> or --all");
    }

    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();
    let scenarios = collect_scenarios(&args)?;

    eprintln!(
        "Rendering {} scenario(s) → {}",
        scenarios.len(),
        args.out_dir.display()
    );

    for (_path, mut scenario) in scenarios {
        // Apply CLI overrides
        if let Some(w) = args.width {
            scenario.width = w;
        }
        if let Some(h) = args.height {
            scenario.height = h;
        }
        if scenario.width == 0 || scenario.height == 0 {
            anyhow::bail!("scenario {} has an empty canvas", scenario.name);
        }

        eprint!("  {} ...", scenario.name);

        let (buffer, sizes) = render_scenario(&scenario)?;

        let out_path = args.out_dir.join(format!("{}.png", scenario.name));
        save_png(&buffer, scenario.width, scenario.height, &out_path)?;

        let sizes_path = out_path.with_extension("json");
        std::fs::write(&sizes_path, sizes)
            .with_context(|| format!("writing {}", sizes_path.display()))?;

        eprintln!(" saved {}", out_path.display());
    }

    eprintln!("Done!");
    Ok(())
}

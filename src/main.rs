//! Split pane demo - a window holding one resizable split container

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use splitpane::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    splitpane::tracing::init();

    let file_config = args.load_config();
    let startup = args
        .into_config(file_config)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid startup configuration")?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(startup);

    event_loop.run_app(&mut app)?;

    Ok(())
}

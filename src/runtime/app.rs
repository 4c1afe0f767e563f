use std::rc::Rc;

use anyhow::{Context as _, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowId};

use splitpane::cli::StartupConfig;
use splitpane::commands::Cmd;
use splitpane::events::{EventTarget, PointerEventKind};
use splitpane::model::Rect;
use splitpane::view::{Renderer, SolidPane};
use splitpane::widget::{Mounted, SplitPane};

use super::mouse::{divider_cursor, pointer_event};

pub struct App {
    startup: StartupConfig,
    /// Document-wide pointer event target
    document: EventTarget,
    split: SplitPane,
    children: Vec<SolidPane>,
    mounted: Option<Mounted>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    mouse_position: Option<(f64, f64)>,
    cursor_icon: CursorIcon,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let (width, height) = startup.window_size;
        let children: Vec<SolidPane> = startup
            .pane_colors
            .iter()
            .copied()
            .map(SolidPane::new)
            .collect();
        let split = SplitPane::new(
            startup.split,
            children.len(),
            Rect::new(0.0, 0.0, width as f32, height as f32),
        );

        Self {
            startup,
            document: EventTarget::new(),
            split,
            children,
            mounted: None,
            renderer: None,
            window: None,
            context: None,
            mouse_position: None,
            cursor_icon: CursorIcon::Default,
        }
    }

    /// Create the window and surface, size the container to the window and mount it
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.startup.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("Split Pane")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        // Measure against the real window size, not the requested one
        let (physical_width, physical_height) = renderer.size();
        self.split.resize(physical_width, physical_height);
        self.mounted = Some(self.split.mount(&self.document));

        tracing::info!(
            width = physical_width,
            height = physical_height,
            panes = self.children.len(),
            "window ready"
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let Some(renderer) = &mut self.renderer else {
            return Ok(());
        };
        renderer.render(&self.split.layout(), &self.children)
    }

    fn update_cursor_icon(&mut self, x: f64, y: f64) {
        let Some(window) = &self.window else { return };

        // Keep the resize cursor for the whole drag, even off the divider
        let over_divider = self.split.model().drag.is_active()
            || self.split.divider_at(x as f32, y as f32).is_some();
        let icon = if over_divider {
            divider_cursor(self.split.model().axis)
        } else {
            CursorIcon::Default
        };

        if icon != self.cursor_icon {
            window.set_cursor(icon);
            self.cursor_icon = icon;
        }
    }

    /// Handle a window event, returning a command for the runtime
    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Resize error: {}", e);
                    }
                }
                self.split.resize(size.width, size.height)
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                let cmd = pointer_event(event, self.mouse_position)
                    .and_then(|pointer| self.document.dispatch(pointer));
                self.update_cursor_icon(position.x, position.y);
                cmd
            }

            WindowEvent::MouseInput { .. } => {
                let pointer = pointer_event(event, self.mouse_position)?;
                // Only a divider accepts pointer-down; everything else is document-wide
                let local = match pointer.kind {
                    PointerEventKind::Down => self.split.pointer_down(pointer.pos.x, pointer.pos.y),
                    _ => None,
                };
                let document = self.document.dispatch(pointer);
                Cmd::batch(local.into_iter().chain(document))
            }

            _ => None,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to initialize window: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            // Unmount before the window goes away so listeners are released
            self.mounted.take();
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.process_cmd(cmd);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing animates; sleep until the next input event
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.mounted.take();
    }
}

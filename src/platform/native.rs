//! Native backend: winit window, wgpu renderer, keyboard state
//!
//! Startup can fail in three places (event loop, window, renderer). Each
//! failure is logged and the run loop is skipped; teardown always runs and the
//! caller still exits normally.

use std::fmt::Display;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::InputState;
use crate::config::GameConfig;
use crate::driver::FrameDriver;
use crate::renderer::RenderState;

/// Window position on screen
const WINDOW_POS: (i32, i32) = (100, 100);

/// Wrap a platform error so it can carry `anyhow` context
fn platform_error(e: impl Display) -> anyhow::Error {
    anyhow!("{e}")
}

/// Initialized window + renderer
struct Graphics {
    // Dropped before the window it draws into
    render_state: RenderState,
    window: Arc<Window>,
}

struct App {
    config: GameConfig,
    driver: FrameDriver,
    keys: InputState,
    graphics: Option<Graphics>,
    init_failed: bool,
}

impl App {
    fn new(config: GameConfig, seed: u64) -> Self {
        let driver = FrameDriver::with_system_clock(&config, seed);
        Self {
            config,
            driver,
            keys: InputState::default(),
            graphics: None,
            init_failed: false,
        }
    }

    /// Create the window and renderer
    fn initialize(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let field = &self.config.field;
        let attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_position(LogicalPosition::new(WINDOW_POS.0, WINDOW_POS.1))
            .with_inner_size(LogicalSize::new(field.width as f64, field.height as f64))
            .with_resizable(false);

        let window = event_loop
            .create_window(attributes)
            .map_err(platform_error)
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let render_state = pollster::block_on(create_renderer(
            window.clone(),
            Vec2::new(field.width, field.height),
        ))
        .context("Failed to create renderer")?;

        Ok(Graphics {
            render_state,
            window,
        })
    }

    /// Record the startup outcome. Returns false when the run loop must be skipped.
    fn accept_init(&mut self, result: Result<Graphics>) -> bool {
        match result {
            Ok(graphics) => {
                let size = graphics.window.inner_size();
                log::info!("Window created: {}x{}", size.width, size.height);
                self.graphics = Some(graphics);
                true
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.init_failed = true;
                false
            }
        }
    }

    /// Frames are only driven once startup succeeded
    fn ready(&self) -> bool {
        self.graphics.is_some() && !self.init_failed
    }

    fn set_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::Escape => self.keys.escape = pressed,
            KeyCode::KeyW => self.keys.left_up = pressed,
            KeyCode::KeyS => self.keys.left_down = pressed,
            KeyCode::KeyI => self.keys.right_up = pressed,
            KeyCode::KeyK => self.keys.right_down = pressed,
            _ => {}
        }
    }

    fn shutdown(&mut self) {
        if self.graphics.take().is_some() {
            log::info!("Renderer and window destroyed");
        }
        log::info!("Shutdown complete");
    }
}

async fn create_renderer(window: Arc<Window>, field_size: Vec2) -> Result<RenderState> {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let surface = instance
        .create_surface(window)
        .context("Failed to create surface")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("Failed to get adapter")?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render_state = RenderState::new(surface, &adapter, size.width, size.height, field_size)
        .await
        .context("Failed to create device")?;
    Ok(render_state)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() || self.init_failed {
            return;
        }
        let result = self.initialize(event_loop);
        if !self.accept_init(result) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.keys.quit = true;
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.set_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.ready() {
                    return;
                }
                let Some(graphics) = &mut self.graphics else {
                    return;
                };
                if !self.driver.frame(&self.keys, &mut graphics.render_state) {
                    log::info!("Exiting run loop");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Initialize, run until quit or Escape, tear down
pub fn run(config: GameConfig, seed: u64) {
    let event_loop = match EventLoop::new()
        .map_err(platform_error)
        .context("Unable to initialize event loop")
    {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("{:#}", e);
            log::info!("Shutdown complete");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, seed);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
    app.shutdown();
}

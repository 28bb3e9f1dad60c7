//! Epicycles - draw a path, then watch a chain of rotating vectors redraw it.
//!
//! Left pane: hold the left mouse button and draw. Right pane: the Fourier
//! epicycles of the last drawn path and the trail they leave behind.

use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use epicycles::cli::Args;
use epicycles::params::{EpicycleParams, RenderConfig};
use epicycles::rendering::RenderSystem;
use epicycles::scene::build_scene;
use epicycles::session::PathSession;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Path capture and playback
    session: PathSession,
    cursor: (f64, f64),
    drawing: bool,

    // Configuration
    render_config: RenderConfig,
}

impl App {
    fn new(params: EpicycleParams, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            session: PathSession::new(params),
            cursor: (0.0, 0.0),
            drawing: false,
            render_config,
        }
    }

    /// Capture position, clamped to the left pane
    fn capture_point(&self) -> (f64, f64) {
        let (x, y) = self.cursor;
        (x.clamp(0.0, self.render_config.pane_width()), y)
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Epicycles")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.render_config)) {
            Ok(render_system) => {
                log::info!("Draw in the left pane; press ESC to quit");
                self.render_system = Some(render_system);
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to initialize rendering: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.render_config.window_width = size.width;
                    self.render_config.window_height = size.height;
                }
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                if self.drawing {
                    let (x, y) = self.capture_point();
                    self.session.on_capture_point(x, y);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed if self.cursor.0 < self.render_config.pane_width() => {
                    self.drawing = true;
                    self.session.on_capture_start();
                    let (x, y) = self.capture_point();
                    self.session.on_capture_point(x, y);
                }
                ElementState::Released if self.drawing => {
                    self.drawing = false;
                    self.session.on_capture_end();
                }
                _ => {}
            },
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Advance the session one tick and draw it
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let frame = self.session.tick();
        let vertices = build_scene(&frame, &self.render_config);

        if let Err(e) = render_system.render(&vertices) {
            if e.needs_reconfigure() {
                render_system.reconfigure();
            } else if e.is_fatal() {
                log::error!("Render failed, stopping: {}", e);
                // Stop ticking before the loop winds down
                self.render_system = None;
                event_loop.exit();
            } else {
                log::warn!("Render error: {}", e);
            }
        }
    }
}

fn main() {
    // Set RUST_LOG=debug for capture events and buffer growth
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let (params, render_config) = match (args.epicycle_params(), args.render_config()) {
        (Ok(params), Ok(render_config)) => (params, render_config),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    log::info!(
        "Epicycles starting: angular velocity {}, {} transform",
        params.angular_velocity,
        args.transform
    );

    let mut app = App::new(params, render_config);
    if let Some(path) = args.preset_path(&app.render_config) {
        app.session.commit_path(path);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}

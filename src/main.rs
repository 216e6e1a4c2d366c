use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use scene_walker::cli::Cli;
use scene_walker::config::NavConfig;
use scene_walker::core::{transform, FrameClock, NavigationState, WinitController};
use scene_walker::loaders::{load_model, Model};
use scene_walker::renderer::SceneRenderer;
use scene_walker::window::Window;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
/// How long to idle per iteration while minimized
const MINIMIZED_IDLE: Duration = Duration::from_millis(10);

struct App {
    window: Option<Window>,
    renderer: Option<SceneRenderer>,
    model: Model,
    nav: NavigationState,
    clock: FrameClock,
    input: WinitController,
}

impl App {
    fn new(model: Model, config: NavConfig) -> Self {
        Self {
            window: None,
            renderer: None,
            model,
            nav: NavigationState::new(config),
            clock: FrameClock::new(config.max_frame_delta),
            input: WinitController::new(),
        }
    }

    /// One iteration of the control loop: clock → input snapshot →
    /// navigation → matrices → draw. Returns true when quit was requested.
    fn frame(&mut self) -> bool {
        let delta = self.clock.tick();

        let quit = self.nav.apply_keyboard(&self.input, delta);
        if let Some((x, y)) = self.input.cursor_position() {
            self.nav.apply_mouse_look(x, y);
        }
        self.nav.apply_scroll(self.input.scroll_delta());
        self.input.reset_deltas();

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let matrices = transform::derive(&self.nav, renderer.aspect());
            match window.draw(renderer, &matrices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("Out of GPU memory, exiting");
                    return true;
                }
                Err(e) => warn!("Render error: {}", e),
            }
        }

        quit
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                WinitWindow::default_attributes()
                    .with_title("Scene Walker")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                &self.model,
            )) {
                Ok(r) => r,
                Err(e) => {
                    error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(Window::new(window));
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::KeyboardInput { .. }
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseWheel { .. } => self.input.process_event(&event),
            WindowEvent::RedrawRequested => {
                if self.window.as_ref().is_some_and(|w| w.is_minimized()) {
                    // Idle instead of integrating a huge delta on restore
                    std::thread::sleep(MINIMIZED_IDLE);
                    self.clock.reset();
                    return;
                }

                if self.frame() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };
    let model = load_model(&cli.model)?;

    info!("Controls: WASD to move, mouse to look, scroll to zoom, Escape to quit");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

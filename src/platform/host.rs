//! Host loop: window, key polling and fixed-rate Update/Draw
//!
//! A [`Game`] is driven like this every frame:
//! - `update` runs zero or more times at the configured tick rate
//! - `layout` maps the window's logical size to the frame size
//! - `draw` fills a frame of that size, which is then presented

use std::sync::Arc;
use std::time::Instant;

use glam::UVec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::clock::FixedStep;
use super::keymap::logical_keys;
use crate::error::{Error, Result};
use crate::renderer::{Frame, FramePresenter};
use crate::settings::Settings;
use crate::sim::{HeldKeys, KeyState};

/// What the host hands to `update`
pub struct UpdateContext<'a> {
    pub keys: &'a dyn KeyState,
    /// Logical window size in pixels
    pub window: UVec2,
}

/// A program driven by the host loop
pub trait Game {
    /// Advance one tick. An error stops the loop.
    fn update(&mut self, ctx: &UpdateContext<'_>) -> Result<()>;

    /// Project the current state onto the frame
    fn draw(&self, frame: &mut Frame);

    /// Render resolution for a given window size
    fn layout(&self, outside: UVec2) -> UVec2 {
        outside
    }
}

/// Open the window and run `game` until the window closes or `update` fails
pub fn run<G: Game>(game: G, settings: &Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut host = Host {
        game,
        settings: settings.clone(),
        running: None,
        keys: HeldKeys::new(),
        clock: FixedStep::new(settings.ticks_per_second),
        last_instant: None,
        frame: Frame::new(UVec2::ZERO),
        error: None,
    };
    event_loop.run_app(&mut host)?;

    match host.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Window and GPU state, created once the event loop is live
struct Running {
    window: Arc<Window>,
    presenter: FramePresenter,
}

impl Running {
    fn logical_size(&self) -> UVec2 {
        let size: LogicalSize<u32> = self.window.inner_size().to_logical(self.window.scale_factor());
        UVec2::new(size.width, size.height)
    }
}

struct Host<G: Game> {
    game: G,
    settings: Settings,
    running: Option<Running>,
    keys: HeldKeys,
    clock: FixedStep,
    last_instant: Option<Instant>,
    frame: Frame,
    error: Option<Error>,
}

impl<G: Game> Host<G> {
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let size = window.inner_size();
        let presenter =
            pollster::block_on(FramePresenter::new(&instance, surface, size.width, size.height))?;

        log::info!(
            "{} running at {} ticks/s",
            self.settings.title,
            self.settings.ticks_per_second
        );
        Ok(Running { window, presenter })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(running) = self.running.as_mut() else {
            return;
        };

        let size = self.game.layout(running.logical_size());
        if self.frame.size() != size {
            self.frame.resize(size);
        }
        self.game.draw(&mut self.frame);

        match running.presenter.present(&self.frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                running.presenter.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl<G: Game> ApplicationHandler for Host<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.running.as_ref().map(Running::logical_size) else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_instant
            .map_or(self.clock.step(), |last| now.duration_since(last).as_secs_f32());
        self.last_instant = Some(now);

        for _ in 0..updates_due(&mut self.clock, dt, window) {
            let ctx = UpdateContext {
                keys: &self.keys,
                window,
            };
            if let Err(err) = self.game.update(&ctx) {
                self.fail(event_loop, err);
                return;
            }
        }

        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    for &key in logical_keys(code) {
                        self.keys.set(key, event.state.is_pressed());
                    }
                }
            }
            // Keys released while unfocused never reach us
            WindowEvent::Focused(false) => self.keys.clear(),
            WindowEvent::Resized(size) => {
                if let Some(running) = self.running.as_mut() {
                    running.presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Ticks to run this frame. A minimized window reports a zero size; its
/// time still drains from the clock so restoring it does not burst.
fn updates_due(clock: &mut FixedStep, dt: f32, window: UVec2) -> u32 {
    let ticks = clock.advance(dt);
    if window.cmpeq(UVec2::ZERO).any() { 0 } else { ticks }
}

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::clock::Clock;
use crate::driver::FrameDriver;
use crate::renderer::SceneRenderer;
use crate::scene::SceneContext;
use crate::surface::SurfaceRenderer;
use crate::window::Viewport;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Windowed host: winit drives one frame per redraw
pub struct App {
    title: String,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    scene: SceneContext,
    driver: FrameDriver<Clock>,
    frame_count: u32,
    fps_update_timer: f32,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(title: impl Into<String>, scene: SceneContext, driver: FrameDriver<Clock>) -> Self {
        Self {
            title: title.into(),
            window: None,
            renderer: None,
            scene,
            driver,
            frame_count: 0,
            fps_update_timer: 0.0,
            error: None,
        }
    }

    /// The error that ended the run, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::info!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn resize(&mut self, window: &Window) {
        let size = window.inner_size();
        let viewport = Viewport::from_physical(size.width, size.height, window.scale_factor());
        if viewport.is_empty() {
            return;
        }

        self.scene.resize(viewport);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(&viewport);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.driver.is_finished() {
            event_loop.exit();
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match self.driver.step(&mut self.scene, renderer) {
            Ok(frame) => self.update_fps(frame.delta),
            Err(e) => self.fail(event_loop, e.context("Render error")),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let viewport = self.scene.viewport;
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(viewport.width, viewport.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, anyhow::anyhow!("Failed to create window: {}", e));
                return;
            }
        };

        let size = window.inner_size();
        let viewport = Viewport::from_physical(size.width, size.height, window.scale_factor());

        let renderer = match pollster::block_on(SurfaceRenderer::new(window.clone(), &viewport)) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e.context("Failed to initialize renderer"));
                return;
            }
        };

        self.scene.resize(viewport);
        self.window = Some(window);
        self.renderer = Some(renderer);
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
            } => {
                self.driver.shutdown_handle().stop();
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = self.window.clone() {
                    self.resize(&window);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

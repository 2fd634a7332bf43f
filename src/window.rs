//! Winit application shell for the windowed runner.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::backdrop::Backdrop;
use crate::error::RunError;
use crate::field::EtherField;
use crate::gpu::Presenter;
use crate::input::Input;
use crate::surface::{PixelSurface, Surface};
use crate::ticker::Ticker;
use crate::time::Time;

/// How many redraws pass between window-title FPS refreshes.
const TITLE_REFRESH_FRAMES: u64 = 120;

pub(crate) struct App {
    settings: Backdrop,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    field: Option<EtherField>,
    frame: Option<PixelSurface>,
    input: Input,
    ticker: Ticker,
    time: Time,
    pub(crate) error: Option<RunError>,
}

impl App {
    pub(crate) fn new(settings: Backdrop) -> Self {
        Self {
            settings,
            window: None,
            presenter: None,
            field: None,
            frame: None,
            input: Input::new(),
            ticker: Ticker::new(),
            time: Time::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let attrs = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let presenter = pollster::block_on(Presenter::new(window.clone()))?;

        let size = window.inner_size();
        // The presenter clamps degenerate startup sizes the same way
        let (width, height) = (size.width.max(1), size.height.max(1));
        self.field = Some(EtherField::new(width, height, self.settings.config.clone()));
        self.frame = Some(PixelSurface::new(width, height));
        self.input.set_window_size(width, height);

        log::info!(
            "backdrop window up at {}x{}, {} particles",
            width,
            height,
            self.settings.config.particle_count
        );

        self.presenter = Some(presenter);
        self.window = Some(window);
        window_request_redraw(&self.window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if !self.ticker.is_running() {
            event_loop.exit();
            return;
        }

        if let (Some(presenter), Some(field), Some(frame)) =
            (&mut self.presenter, &mut self.field, &mut self.frame)
        {
            field.tick(frame);
            let pixels = frame.frame_rgba8();
            match presenter.present(&pixels) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = (presenter.width(), presenter.height());
                    presenter.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, shutting down");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("frame dropped: {:?}", e),
            }
        }

        self.time.update();
        if self.time.frame() % TITLE_REFRESH_FRAMES == 0 {
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} ({:.0} fps)",
                    self.settings.title,
                    self.time.fps()
                ));
            }
        }

        window_request_redraw(&self.window);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("startup failed: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.ticker.stop();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.ticker.stop();
                }
            }
            WindowEvent::Resized(size) => {
                self.input.handle_event(&WindowEvent::Resized(size));
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let (Some(presenter), Some(field), Some(frame)) =
                    (&mut self.presenter, &mut self.field, &mut self.frame)
                {
                    presenter.resize(size.width, size.height);
                    field.resize(size.width, size.height);
                    frame.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { .. } => {
                self.input.handle_event(&event);
                if let Some(field) = &mut self.field {
                    let pointer = self.input.pointer();
                    field.on_pointer_move(pointer.x, pointer.y);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn window_request_redraw(window: &Option<Arc<Window>>) {
    if let Some(window) = window {
        window.request_redraw();
    }
}

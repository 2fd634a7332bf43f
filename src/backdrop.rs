//! Backdrop builder and runner.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::RunError;
use crate::field::{EtherField, FieldConfig};
use crate::surface::PixelSurface;
use crate::ticker::{drive, Ticker};
use crate::visuals::VisualConfig;
use crate::window::App;

/// A particle backdrop builder.
///
/// Use method chaining to configure, then call [`Backdrop::run`] to open a
/// window, or [`Backdrop::run_headless`] to render without one.
///
/// ```ignore
/// Backdrop::new()
///     .with_particle_count(120)
///     .with_seed(7)
///     .with_visuals(|v| {
///         v.trail_color(Rgba::new(0.0, 0.0, 0.05, 0.12));
///     })
///     .run()?;
/// ```
pub struct Backdrop {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) title: String,
    pub(crate) config: FieldConfig,
}

impl Backdrop {
    /// Create a backdrop with default settings.
    pub fn new() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "etherfield".to_string(),
            config: FieldConfig::default(),
        }
    }

    /// Set the initial window size (logical pixels) or headless surface
    /// size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Seed the field's RNG for a reproducible particle set.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the per-frame velocity jitter amplitude.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.config.jitter = jitter;
        self
    }

    /// Configure rendering options.
    pub fn with_visuals<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        configure(&mut self.config.visuals);
        self
    }

    /// Open a window and run until it closes or Escape stops the ticker.
    pub fn run(self) -> Result<(), RunError> {
        log::info!(
            "starting backdrop {}x{} with {} particles",
            self.width,
            self.height,
            self.config.particle_count
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        if let Some(e) = app.error.take() {
            return Err(e);
        }
        Ok(())
    }

    /// Render `frames` ticks into a CPU surface without opening a window.
    ///
    /// Returns the field and the surface holding the final frame.
    pub fn run_headless(self, frames: u64) -> (EtherField, PixelSurface) {
        let mut field = EtherField::new(self.width, self.height, self.config);
        let mut surface = PixelSurface::new(self.width, self.height);
        let ticker = Ticker::new();
        let ran = drive(&mut field, &mut surface, &ticker, frames);
        log::debug!("headless run finished after {} frames", ran);
        (field, surface)
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

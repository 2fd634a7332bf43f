//! # etherfield
//!
//! Liquid ether particle backdrops made easy.
//!
//! An `EtherField` owns a fixed set of soft radial glow particles, advances
//! them each frame under pointer attraction, and paints them additively over
//! a trailing-fade overlay, producing a continuously evolving ambient
//! background. The simulation runs on the CPU; a thin wgpu presenter blits
//! finished frames to a winit window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use etherfield::prelude::*;
//!
//! fn main() -> Result<(), etherfield::RunError> {
//!     Backdrop::new()
//!         .with_title("ether field")
//!         .with_particle_count(80)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields and ticks
//!
//! A field advances one logical step per [`EtherField::tick`], never reading
//! wall-clock time, so the host's redraw rate sets the pace. Each tick
//! integrates positions, attracts particles toward the pointer, damps and
//! jitters velocities, wraps toroidally at the edges, and drifts hue within
//! a fixed blue-to-cyan band before rendering.
//!
//! ### Surfaces
//!
//! Rendering goes through the [`Surface`] trait: whole-surface fills,
//! radial gradients, and switchable normal/additive blending.
//! [`PixelSurface`] is the built-in CPU rasterizer; it also backs headless
//! rendering and PNG snapshots.
//!
//! ### Lifecycle
//!
//! Frame scheduling is owned by a [`Ticker`]. Stopping it (or its detached
//! [`TickerHandle`]) deregisters all future frames, whether the field is
//! driven by the window loop or by [`drive`] in headless mode.
//!
//! ### Determinism
//!
//! Randomization flows through one seedable RNG. Build with
//! [`Backdrop::with_seed`] (or a `FieldConfig` seed) and two runs spawn and
//! evolve identically, which the test suite leans on.

mod backdrop;
pub mod error;
mod field;
mod gpu;
pub mod input;
mod particle;
pub mod spawn;
pub mod surface;
pub mod ticker;
pub mod time;
pub mod visuals;
mod window;

pub use backdrop::Backdrop;
pub use error::{GpuError, RunError};
pub use field::{EtherField, FieldConfig, DEFAULT_PARTICLE_COUNT};
pub use glam::Vec2;
pub use particle::{Particle, HUE_MAX, HUE_MIN};
pub use spawn::SpawnContext;
pub use surface::{PixelSurface, Surface};
pub use ticker::{drive, Ticker, TickerHandle};
pub use visuals::{BlendMode, GradientStop, Hsla, Rgba, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use etherfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::field::{EtherField, FieldConfig, DEFAULT_PARTICLE_COUNT};
    pub use crate::particle::{Particle, HUE_MAX, HUE_MIN};
    pub use crate::spawn::SpawnContext;
    pub use crate::surface::{PixelSurface, Surface};
    pub use crate::ticker::{drive, Ticker, TickerHandle};
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, GradientStop, Hsla, Rgba, VisualConfig};
    pub use crate::Vec2;
}

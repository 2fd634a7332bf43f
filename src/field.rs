//! The ether field: particle set, frame advance, and frame rendering.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::{Particle, HUE_MAX, HUE_MIN};
use crate::spawn::SpawnContext;
use crate::surface::Surface;
use crate::visuals::{BlendMode, GradientStop, VisualConfig};

/// Default number of particles in a field.
pub const DEFAULT_PARTICLE_COUNT: u32 = 80;

/// Radius around the pointer within which particles are attracted.
const ATTRACT_RADIUS: f32 = 300.0;
/// Peak attraction acceleration, reached as distance approaches zero.
const ATTRACT_STRENGTH: f32 = 0.02;
/// Per-axis velocity decay applied every frame.
const DAMPING: f32 = 0.99;
/// Hue drift per frame, degrees.
const HUE_DRIFT: f32 = 0.05;

/// Gradient alpha at the particle center, as a fraction of particle alpha.
const GLOW_CENTER: f32 = 0.8;
/// Gradient alpha at 40% of the pulsing radius.
const GLOW_MID: f32 = 0.3;
const GLOW_MID_OFFSET: f32 = 0.4;

/// Construction options for an [`EtherField`].
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles, constant for the lifetime of a surface size.
    pub particle_count: u32,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Per-axis velocity jitter amplitude added every frame. Zero disables
    /// jitter, which exact-value tests rely on.
    pub jitter: f32,
    pub visuals: VisualConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            jitter: 0.05,
            visuals: VisualConfig::default(),
        }
    }
}

/// An animated field of soft-glow particles.
///
/// The host drives it with [`EtherField::tick`] once per scheduled frame and
/// feeds pointer positions through [`EtherField::on_pointer_move`]. One tick
/// is one logical step; the field never reads wall-clock time.
pub struct EtherField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pointer: Vec2,
    frame: u64,
    rng: SmallRng,
    config: FieldConfig,
}

impl EtherField {
    /// Create a field sized to the surface, spawning the full particle set.
    pub fn new(width: u32, height: u32, config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut field = Self {
            particles: Vec::new(),
            width: width as f32,
            height: height as f32,
            pointer: Vec2::ZERO,
            frame: 0,
            rng,
            config,
        };
        field.regenerate();
        field
    }

    /// Reset dimensions and regenerate the whole particle set with fresh
    /// random parameters. A reshuffle, not a proportional remap.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.regenerate();
    }

    /// Record the latest pointer position in surface coordinates.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        // Both coordinates land in one store; the next advance reads
        // whichever pair was written last.
        self.pointer = Vec2::new(x, y);
    }

    /// Advance every particle by one logical step.
    pub fn advance(&mut self) {
        self.frame += 1;
        let jitter = self.config.jitter;

        for p in &mut self.particles {
            p.position += p.velocity;

            let to_pointer = self.pointer - p.position;
            let dist = to_pointer.length();
            // dist == 0 would divide by zero; the pointer exerts no pull
            // from dead center.
            if dist > 0.0 && dist < ATTRACT_RADIUS {
                let force = (ATTRACT_RADIUS - dist) / ATTRACT_RADIUS * ATTRACT_STRENGTH;
                p.velocity += to_pointer / dist * force;
            }

            p.velocity *= DAMPING;

            if jitter > 0.0 {
                p.velocity.x += self.rng.gen_range(-jitter..jitter);
                p.velocity.y += self.rng.gen_range(-jitter..jitter);
            }

            // Toroidal wrap, one radius past each edge
            if p.position.x < -p.radius {
                p.position.x = self.width + p.radius;
            } else if p.position.x > self.width + p.radius {
                p.position.x = -p.radius;
            }
            if p.position.y < -p.radius {
                p.position.y = self.height + p.radius;
            } else if p.position.y > self.height + p.radius {
                p.position.y = -p.radius;
            }

            p.hue += HUE_DRIFT;
            if p.hue > HUE_MAX {
                p.hue = HUE_MIN;
            }
        }
    }

    /// Paint the current frame: trail overlay, then additive glow per
    /// particle, then restore normal blending.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.set_blend_mode(BlendMode::Alpha);
        surface.fill(self.config.visuals.trail());

        surface.set_blend_mode(self.config.visuals.blend());
        for p in &self.particles {
            let color = p.color();
            let stops = [
                GradientStop::new(0.0, color.with_alpha(p.alpha * GLOW_CENTER).to_rgba()),
                GradientStop::new(GLOW_MID_OFFSET, color.with_alpha(p.alpha * GLOW_MID).to_rgba()),
                GradientStop::new(1.0, color.with_alpha(0.0).to_rgba()),
            ];
            surface.fill_radial_gradient(p.position, p.pulse_radius(self.frame), &stops);
        }

        surface.set_blend_mode(BlendMode::Alpha);
    }

    /// One scheduled frame: advance, then render.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        self.advance();
        self.render(surface);
    }

    /// Frames advanced since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Last recorded pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Current field dimensions in world units.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable particle access, for hosts and tests that force state
    /// directly.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn regenerate(&mut self) {
        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count as usize);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count, self.width, self.height, &mut self.rng);
            particles.push(Particle::spawn(&mut ctx));
        }
        self.particles = particles;
        log::debug!(
            "spawned {} particles for a {}x{} field",
            count,
            self.width,
            self.height
        );
    }
}

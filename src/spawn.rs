//! Spawn context for particle initialization.
//!
//! Provides helper methods to reduce boilerplate when randomizing particle
//! parameters. The context borrows the field's own RNG, so a field built
//! with a fixed seed spawns a reproducible particle set.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::TAU;

/// Context handed to particle spawning with helpers for common patterns.
///
/// ```ignore
/// Particle {
///     position: ctx.random_point(),
///     velocity: ctx.random_drift(0.25),
///     ..
/// }
/// ```
pub struct SpawnContext<'a> {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Surface width in world units.
    pub width: f32,
    /// Surface height in world units.
    pub height: f32,
    rng: &'a mut SmallRng,
}

impl<'a> SpawnContext<'a> {
    pub(crate) fn new(
        index: u32,
        count: u32,
        width: f32,
        height: f32,
        rng: &'a mut SmallRng,
    ) -> Self {
        Self {
            index,
            count,
            width,
            height,
            rng,
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count.max(1) as f32
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given half-open range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random point uniformly distributed over the surface.
    pub fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.width,
            self.rng.gen::<f32>() * self.height,
        )
    }

    /// Random velocity with each axis uniform in `[-limit, limit)`.
    pub fn random_drift(&mut self, limit: f32) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-limit..limit),
            self.rng.gen_range(-limit..limit),
        )
    }

    /// Random angle in `[0, 2π)`.
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_progress() {
        let mut rng = SmallRng::seed_from_u64(1);
        let ctx = SpawnContext::new(40, 80, 800.0, 600.0, &mut rng);
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_random_point_in_surface() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut ctx = SpawnContext::new(0, 1, 800.0, 600.0, &mut rng);
        for _ in 0..100 {
            let p = ctx.random_point();
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
        }
    }

    #[test]
    fn test_random_drift_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SpawnContext::new(0, 1, 800.0, 600.0, &mut rng);
        for _ in 0..100 {
            let v = ctx.random_drift(0.25);
            assert!(v.x >= -0.25 && v.x < 0.25);
            assert!(v.y >= -0.25 && v.y < 0.25);
        }
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        let pa = SpawnContext::new(0, 1, 800.0, 600.0, &mut a).random_point();
        let pb = SpawnContext::new(0, 1, 800.0, 600.0, &mut b).random_point();
        assert_eq!(pa, pb);
    }
}

//! Particle state for the ether field.

use glam::Vec2;

use crate::spawn::SpawnContext;
use crate::visuals::Hsla;

/// Lower edge of the hue band, degrees. Hue drifts upward and wraps back
/// here rather than cycling the full spectrum.
pub const HUE_MIN: f32 = 180.0;
/// Upper edge of the hue band, degrees.
pub const HUE_MAX: f32 = 240.0;

const PULSE_FLOOR: f32 = 0.7;
const PULSE_SWING: f32 = 0.3;

/// One soft-glow blob with independent motion and color state.
///
/// `position`, `velocity` and `hue` mutate every frame; everything else is
/// fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Base draw radius in world units.
    pub radius: f32,
    /// Hue in degrees, always within `[HUE_MIN, HUE_MAX]`.
    pub hue: f32,
    /// Saturation percent.
    pub saturation: f32,
    /// Lightness percent.
    pub lightness: f32,
    /// Peak gradient alpha.
    pub alpha: f32,
    /// Radians advanced per frame by the radius pulse.
    pub pulse_speed: f32,
    /// Per-particle phase offset so pulses desynchronize.
    pub pulse_phase: f32,
}

impl Particle {
    /// Spawn a particle with independently randomized parameters.
    pub fn spawn(ctx: &mut SpawnContext<'_>) -> Self {
        Self {
            position: ctx.random_point(),
            velocity: ctx.random_drift(0.25),
            radius: ctx.random_range(50.0, 200.0),
            hue: ctx.random_range(HUE_MIN, HUE_MAX),
            saturation: ctx.random_range(70.0, 100.0),
            lightness: ctx.random_range(50.0, 70.0),
            alpha: ctx.random_range(0.05, 0.20),
            pulse_speed: ctx.random_range(0.01, 0.03),
            pulse_phase: ctx.random_angle(),
        }
    }

    /// Rendered radius at the given frame: the base radius breathing
    /// sinusoidally between 40% and 100%.
    pub fn pulse_radius(&self, frame: u64) -> f32 {
        let pulse = PULSE_FLOOR + PULSE_SWING * (frame as f32 * self.pulse_speed + self.pulse_phase).sin();
        self.radius * pulse
    }

    /// The particle's color at full alpha, before gradient attenuation.
    pub fn color(&self) -> Hsla {
        Hsla::new(self.hue, self.saturation, self.lightness, self.alpha)
    }
}

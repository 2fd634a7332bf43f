//! A denser, slower-fading field.
//!
//! More particles and a heavier trail overlay than the defaults, for a
//! deep-water look. Move the pointer to stir the field; Escape quits.
//!
//! Run with: `cargo run --example drift`

use etherfield::prelude::*;

fn main() {
    env_logger::init();

    Backdrop::new()
        .with_title("drift")
        .with_size(1280, 720)
        .with_particle_count(140)
        .with_jitter(0.03)
        .with_visuals(|v| {
            v.trail_color(Rgba::new(0.01, 0.015, 0.04, 0.06));
            v.blend_mode(BlendMode::Additive);
        })
        .run()
        .expect("backdrop should run");
}

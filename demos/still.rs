//! Headless snapshot.
//!
//! Renders a few seconds of field evolution without a window and writes the
//! final frame to a PNG. Seeded, so the output is reproducible.
//!
//! Run with: `cargo run --example still`

use etherfield::prelude::*;

fn main() {
    env_logger::init();

    let (field, surface) = Backdrop::new()
        .with_size(1280, 720)
        .with_particle_count(80)
        .with_seed(42)
        .run_headless(240);

    println!("rendered {} frames", field.frame());

    let path = std::env::temp_dir().join("etherfield_still.png");
    surface.save_png(&path).expect("write png");
    println!("wrote {}", path.display());
}

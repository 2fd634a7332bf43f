//! Drawing surfaces for backdrop rendering.
//!
//! The field renders through the [`Surface`] trait, so hosts can supply any
//! target that can fill itself with a color, paint radial gradients, and
//! switch between normal and additive compositing. [`PixelSurface`] is the
//! built-in CPU rasterizer used by the windowed runner and headless
//! rendering.

use std::path::Path;

use glam::Vec2;

use crate::visuals::{BlendMode, GradientStop, Rgba};

/// A resizable 2D render target.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Reset the surface to the given dimensions, discarding its contents.
    fn resize(&mut self, width: u32, height: u32);

    /// Set the compositing mode for subsequent paints.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Paint the whole surface with a color, composited under the current
    /// blend mode.
    fn fill(&mut self, color: Rgba);

    /// Paint a radial gradient over the circle at `center` with the given
    /// radius. Stops run from the center (`offset` 0.0) to the rim (1.0);
    /// pixels outside the radius are untouched.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
}

/// CPU raster surface over an f32 RGBA buffer.
///
/// Colors accumulate unclamped in additive mode; [`PixelSurface::frame_rgba8`]
/// clamps on readout. The buffer starts (and resets on resize) as opaque
/// black.
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<f32>,
    blend: BlendMode,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: opaque_black(width, height),
            blend: BlendMode::Alpha,
        }
    }

    /// The color at a pixel, unclamped. Alpha is always 1.0.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = ((y * self.width + x) * 4) as usize;
        Rgba::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Convert the frame to tightly packed RGBA8 bytes, row 0 at the top,
    /// channels clamped to the displayable range.
    pub fn frame_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
            .collect()
    }

    /// Write the current frame to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.frame_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }

    #[inline]
    fn composite(&mut self, index: usize, color: Rgba) {
        let px = &mut self.pixels[index..index + 4];
        match self.blend {
            BlendMode::Alpha => {
                let a = color.a;
                px[0] = color.r * a + px[0] * (1.0 - a);
                px[1] = color.g * a + px[1] * (1.0 - a);
                px[2] = color.b * a + px[2] * (1.0 - a);
            }
            BlendMode::Additive => {
                px[0] += color.r * color.a;
                px[1] += color.g * color.a;
                px[2] += color.b * color.a;
            }
        }
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = opaque_black(width, height);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn fill(&mut self, color: Rgba) {
        for i in (0..self.pixels.len()).step_by(4) {
            self.composite(i, color);
        }
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        if radius <= 0.0 || stops.is_empty() {
            return;
        }

        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let at = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let dist = at.distance(center);
                if dist >= radius {
                    continue;
                }
                let color = GradientStop::sample(stops, dist / radius);
                self.composite(((y * self.width + x) * 4) as usize, color);
            }
        }
    }
}

fn opaque_black(width: u32, height: u32) -> Vec<f32> {
    let mut pixels = vec![0.0; (width * height * 4) as usize];
    for i in (0..pixels.len()).step_by(4) {
        pixels[i + 3] = 1.0;
    }
    pixels
}

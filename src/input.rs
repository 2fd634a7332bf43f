//! Pointer input tracking.
//!
//! Records the latest cursor position from raw window events. Events may
//! arrive at any frequency between frames; only the last position before a
//! tick matters, so state is a plain last-write-wins pair.

use glam::Vec2;
use winit::event::WindowEvent;

/// Latest pointer position and window size.
#[derive(Debug, Default)]
pub struct Input {
    pointer: Vec2,
    window_size: (u32, u32),
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer position in surface pixels, origin before any event arrives.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub(crate) fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::Resized(size) => {
                self.window_size = (size.width, size.height);
            }
            _ => {}
        }
    }
}

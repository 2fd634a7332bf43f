//! Frame scheduling lifecycle.
//!
//! The field itself never schedules anything; a [`Ticker`] decides whether
//! the next frame gets to run. The windowed runner consults it every redraw
//! and [`drive`] consults it between headless ticks, so stopping the ticker
//! deregisters all future frames without interrupting one in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::field::EtherField;
use crate::surface::Surface;

/// Shared run flag owned by whoever schedules frames.
#[derive(Debug, Clone)]
pub struct Ticker {
    running: Arc<AtomicBool>,
}

impl Ticker {
    /// Create a ticker in the running state.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the next frame may be scheduled.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop scheduling frames. Idempotent.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// A detached handle that can stop this ticker from elsewhere.
    pub fn handle(&self) -> TickerHandle {
        TickerHandle {
            running: Arc::clone(&self.running),
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop handle detached from the scheduling loop.
#[derive(Debug, Clone)]
pub struct TickerHandle {
    running: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Drive a field against a surface for up to `max_frames` ticks, checking
/// the ticker before each one. Returns the number of ticks executed; a
/// stopped ticker executes zero.
pub fn drive<S: Surface>(
    field: &mut EtherField,
    surface: &mut S,
    ticker: &Ticker,
    max_frames: u64,
) -> u64 {
    let mut ticked = 0;
    while ticked < max_frames && ticker.is_running() {
        field.tick(surface);
        ticked += 1;
    }
    ticked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use crate::surface::PixelSurface;

    fn small_field() -> (EtherField, PixelSurface) {
        let field = EtherField::new(
            64,
            64,
            FieldConfig {
                particle_count: 2,
                seed: Some(1),
                ..FieldConfig::default()
            },
        );
        (field, PixelSurface::new(64, 64))
    }

    #[test]
    fn test_ticker_starts_running() {
        let ticker = Ticker::new();
        assert!(ticker.is_running());
    }

    #[test]
    fn test_stop_via_handle() {
        let ticker = Ticker::new();
        let handle = ticker.handle();
        handle.stop();
        assert!(!ticker.is_running());
        assert!(!handle.is_running());
        // Stopping again is fine
        handle.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_drive_runs_requested_frames() {
        let (mut field, mut surface) = small_field();
        let ticker = Ticker::new();
        let ran = drive(&mut field, &mut surface, &ticker, 5);
        assert_eq!(ran, 5);
        assert_eq!(field.frame(), 5);
    }

    #[test]
    fn test_stopped_ticker_schedules_nothing() {
        let (mut field, mut surface) = small_field();
        let ticker = Ticker::new();
        ticker.stop();
        let ran = drive(&mut field, &mut surface, &ticker, 100);
        assert_eq!(ran, 0);
        assert_eq!(field.frame(), 0);
    }
}

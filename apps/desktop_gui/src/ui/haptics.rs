//! Desktop stand-in for device vibration: a brief jitter of the card.

use std::time::Duration;

use card_core::{CardError, HapticDevice};
use egui::Vec2;

const NUDGE_AMPLITUDE: f32 = 3.0;
const NUDGE_HZ: f32 = 60.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNudge {
    enabled: bool,
    remaining_secs: f32,
    phase: f32,
}

impl WindowNudge {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining_secs > 0.0 {
            self.remaining_secs = (self.remaining_secs - dt).max(0.0);
            self.phase += dt * NUDGE_HZ * std::f32::consts::TAU;
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.remaining_secs > 0.0
    }

    pub fn offset(&self) -> Vec2 {
        if !self.is_shaking() {
            return Vec2::ZERO;
        }
        Vec2::new(self.phase.sin() * NUDGE_AMPLITUDE, 0.0)
    }
}

impl HapticDevice for WindowNudge {
    fn is_available(&self) -> bool {
        self.enabled
    }

    fn pulse(&mut self, duration: Duration) -> Result<(), CardError> {
        if !self.enabled {
            return Err(CardError::HapticUnavailable);
        }
        self.remaining_secs = duration.as_secs_f32();
        self.phase = 0.0;
        Ok(())
    }
}

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Widest viewport, in logical units, still treated as narrow.
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 480.0;
/// Evasion event that retires the negative control.
pub const EVASION_LIMIT: u32 = 10;
pub const HAPTIC_PULSE: Duration = Duration::from_millis(50);

pub const CONFETTI_PALETTE: [&str; 5] = ["#ff4d6d", "#ff758f", "#ff8fa3", "#ffb3c1", "#ffffff"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width <= NARROW_VIEWPORT_MAX_WIDTH {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn classify(width: f32) -> Result<Self, CardError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(CardError::InvalidViewportWidth(width));
        }
        Ok(Self::from_width(width))
    }

    /// Where the negative control hides after its last evasion.
    pub fn retreat_position(self) -> EvasionPosition {
        let (x, y) = match self {
            Self::Narrow => (0.0, -90.0),
            Self::Wide => (-140.0, 0.0),
        };
        EvasionPosition {
            x,
            y,
            opacity: 0.0,
            scale: 0.5,
        }
    }

    /// Draws a visible offset that keeps the control near the affirmative one.
    pub fn sample_offset<R: Rng + ?Sized>(self, rng: &mut R, width: f32) -> EvasionPosition {
        let (x, y) = match self {
            Self::Narrow => {
                let quarter = width * 0.25;
                (rng.gen_range(-quarter..quarter), rng.gen_range(20.0..100.0))
            }
            Self::Wide => (rng.gen_range(50.0..200.0), rng.gen_range(-50.0..50.0)),
        };
        EvasionPosition {
            x,
            y,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvasionPosition {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl EvasionPosition {
    pub const RESTING: Self = Self {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }
}

impl Default for EvasionPosition {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Spring curve the presentation layer uses to move the negative control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringTransition {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringTransition {
    pub const EVASION: Self = Self {
        stiffness: 300.0,
        damping: 25.0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread_degrees: f32,
    /// Fraction of the viewport height the burst starts from.
    pub origin_y: f32,
    pub colors: Vec<String>,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 200,
            spread_degrees: 90.0,
            origin_y: 0.6,
            colors: CONFETTI_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

//! Confetti burst simulated in viewport-relative coordinates: `x` and `y` are
//! fractions of the window, so the burst survives resizes.

use std::f32::consts::PI;

use card_core::{CelebrationEmitter, ConfettiBurst};
use egui::Color32;
use rand::{rngs::StdRng, Rng};

use crate::ui::theme::color_from_hex;

const GRAVITY: f32 = 1.4;
const DRAG_PER_SEC: f32 = 0.35;
const LIFETIME_SECS: f32 = 3.0;
const FADE_SECS: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub rotation: f32,
    pub spin: f32,
    pub size: f32,
    pub color: Color32,
    pub age: f32,
}

impl ConfettiPiece {
    pub fn opacity(&self) -> f32 {
        ((LIFETIME_SECS - self.age) / FADE_SECS).clamp(0.0, 1.0)
    }
}

pub struct ConfettiField {
    rng: StdRng,
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiField {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            pieces: Vec::new(),
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_active(&self) -> bool {
        !self.pieces.is_empty()
    }

    pub fn step(&mut self, dt: f32) {
        let drag = (1.0 - DRAG_PER_SEC * dt).max(0.0);
        for piece in &mut self.pieces {
            piece.vy += GRAVITY * dt;
            piece.vx *= drag;
            piece.vy *= drag;
            piece.x += piece.vx * dt;
            piece.y += piece.vy * dt;
            piece.rotation += piece.spin * dt;
            piece.age += dt;
        }
        self.pieces
            .retain(|piece| piece.age < LIFETIME_SECS && piece.y < 1.2);
    }
}

impl CelebrationEmitter for ConfettiField {
    fn emit(&mut self, burst: &ConfettiBurst) {
        let colors: Vec<Color32> = burst.colors.iter().map(|c| color_from_hex(c)).collect();
        let half_spread = burst.spread_degrees.to_radians() / 2.0;
        for i in 0..burst.particle_count {
            // Screen y grows downward, so straight up is -PI/2.
            let angle = -PI / 2.0 + self.rng.gen_range(-half_spread..=half_spread);
            let speed = self.rng.gen_range(0.6..1.4);
            let color = colors
                .get(i as usize % colors.len().max(1))
                .copied()
                .unwrap_or(Color32::WHITE);
            self.pieces.push(ConfettiPiece {
                x: 0.5,
                y: burst.origin_y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                rotation: self.rng.gen_range(0.0..PI),
                spin: self.rng.gen_range(-8.0..8.0),
                size: self.rng.gen_range(5.0..10.0),
                color,
                age: 0.0,
            });
        }
        tracing::debug!(pieces = self.pieces.len(), "confetti burst emitted");
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn burst_launches_upward_within_spread() {
        let mut field = ConfettiField::new(StdRng::seed_from_u64(4));
        field.emit(&ConfettiBurst::default());

        assert_eq!(field.pieces().len(), 200);
        for piece in field.pieces() {
            assert_eq!((piece.x, piece.y), (0.5, 0.6));
            assert!(piece.vy < 0.0);
            assert!(piece.vx.abs() <= piece.vy.abs() + 1e-4);
        }
        assert!(field
            .pieces()
            .iter()
            .any(|p| p.color == Color32::from_rgb(255, 77, 109)));
    }

    #[test]
    fn pieces_fade_and_expire() {
        let mut field = ConfettiField::new(StdRng::seed_from_u64(5));
        field.emit(&ConfettiBurst::default());
        for _ in 0..30 {
            field.step(1.0 / 30.0);
        }
        assert!(field.is_active());
        for _ in 0..90 {
            field.step(1.0 / 30.0);
        }
        assert!(!field.is_active());
    }
}

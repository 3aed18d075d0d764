//! Decorative background motion: falling hearts, post-acceptance sparkles and
//! the small looping pulses on the question card.
//!
//! Layouts are drawn from an injected RNG once and then sampled as pure
//! functions of elapsed seconds. Nothing here touches interaction state.

use rand::Rng;
use serde::Serialize;

pub const HEART_COUNT: usize = 15;
pub const HEART_STAGGER_SECS: f32 = 2.5;
pub const HEART_FALL_SECS: f32 = 12.0;
pub const SPARKLE_COUNT: usize = 25;

const HEART_OPACITY: [f32; 4] = [0.0, 0.4, 0.4, 0.0];
const SPARKLE_ENVELOPE: [f32; 3] = [0.0, 1.0, 0.0];
const PULSE_SCALE: [f32; 3] = [1.0, 1.2, 1.0];
const PULSE_SECS: f32 = 1.5;
const BOB_OFFSET: [f32; 3] = [0.0, -10.0, 0.0];
const BOB_SECS: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Interpolates evenly spaced keyframes at `progress` in `[0, 1]`, easing
/// within each segment.
pub fn keyframes(values: &[f32], progress: f32, easing: Easing) -> f32 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (values.len() - 1) as f32;
            let scaled = progress.clamp(0.0, 1.0) * segments;
            let index = (scaled.floor() as usize).min(values.len() - 2);
            let local = easing.apply(scaled - index as f32);
            values[index] + (values[index + 1] - values[index]) * local
        }
    }
}

fn loop_progress(elapsed: f32, period: f32) -> f32 {
    elapsed.rem_euclid(period) / period
}

/// Scale of the small heart above the question.
pub fn pulse_scale(elapsed_secs: f32) -> f32 {
    keyframes(
        &PULSE_SCALE,
        loop_progress(elapsed_secs, PULSE_SECS),
        Easing::EaseInOut,
    )
}

/// Vertical bob of the question illustration, in logical units.
pub fn bob_offset(elapsed_secs: f32) -> f32 {
    keyframes(
        &BOB_OFFSET,
        loop_progress(elapsed_secs, BOB_SECS),
        Easing::EaseInOut,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartParticle {
    pub delay_secs: f32,
    pub left_vw: f32,
    pub size_px: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartFrame {
    pub x_vw: f32,
    pub y_vh: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
    pub size_px: f32,
}

impl HeartParticle {
    pub fn sample(&self, elapsed_secs: f32) -> Option<HeartFrame> {
        let local = elapsed_secs - self.delay_secs;
        if local < 0.0 {
            return None;
        }
        let t = loop_progress(local, HEART_FALL_SECS);
        Some(HeartFrame {
            x_vw: self.left_vw,
            y_vh: 110.0 - 120.0 * t,
            opacity: keyframes(&HEART_OPACITY, t, Easing::Linear),
            rotation_deg: 360.0 * t,
            size_px: self.size_px,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRain {
    pub hearts: Vec<HeartParticle>,
}

impl HeartRain {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|i| HeartParticle {
                delay_secs: i as f32 * HEART_STAGGER_SECS,
                left_vw: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(15.0..30.0),
            })
            .collect();
        Self { hearts }
    }

    pub fn frames(&self, elapsed_secs: f32) -> impl Iterator<Item = HeartFrame> + '_ {
        self.hearts
            .iter()
            .filter_map(move |heart| heart.sample(elapsed_secs))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparkleParticle {
    pub x_vw: f32,
    pub y_vh: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub size_px: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleFrame {
    pub x_vw: f32,
    pub y_vh: f32,
    pub scale: f32,
    pub opacity: f32,
    pub size_px: f32,
}

impl SparkleParticle {
    pub fn sample(&self, elapsed_secs: f32) -> SparkleFrame {
        let local = elapsed_secs - self.delay_secs;
        let envelope = if local < 0.0 {
            0.0
        } else {
            keyframes(
                &SPARKLE_ENVELOPE,
                loop_progress(local, self.duration_secs),
                Easing::EaseInOut,
            )
        };
        SparkleFrame {
            x_vw: self.x_vw,
            y_vh: self.y_vh,
            scale: envelope,
            opacity: envelope,
            size_px: self.size_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkleField {
    pub sparkles: Vec<SparkleParticle>,
}

impl SparkleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sparkles = (0..SPARKLE_COUNT)
            .map(|_| SparkleParticle {
                x_vw: rng.gen_range(0.0..100.0),
                y_vh: rng.gen_range(0.0..100.0),
                duration_secs: rng.gen_range(1.5..3.5),
                delay_secs: rng.gen_range(0.0..3.0),
                size_px: rng.gen_range(2.0..5.0),
            })
            .collect();
        Self { sparkles }
    }

    pub fn frames(&self, elapsed_secs: f32) -> impl Iterator<Item = SparkleFrame> + '_ {
        self.sparkles
            .iter()
            .map(move |sparkle| sparkle.sample(elapsed_secs))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn heart_rain_staggers_fifteen_hearts_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let rain = HeartRain::generate(&mut rng);

        assert_eq!(rain.hearts.len(), HEART_COUNT);
        for (i, heart) in rain.hearts.iter().enumerate() {
            assert_eq!(heart.delay_secs, i as f32 * 2.5);
            assert!((0.0..100.0).contains(&heart.left_vw));
            assert!((15.0..30.0).contains(&heart.size_px));
        }
    }

    #[test]
    fn heart_is_invisible_until_its_delay_then_falls_upward() {
        let heart = HeartParticle {
            delay_secs: 5.0,
            left_vw: 40.0,
            size_px: 20.0,
        };
        assert!(heart.sample(4.9).is_none());

        let start = heart.sample(5.0).expect("started");
        assert_eq!(start.y_vh, 110.0);
        assert_eq!(start.opacity, 0.0);

        let middle = heart.sample(11.0).expect("middle");
        assert!((middle.y_vh - 50.0).abs() < 1e-3);
        assert!((middle.opacity - 0.4).abs() < 1e-6);
        assert!((middle.rotation_deg - 180.0).abs() < 1e-3);
    }

    #[test]
    fn sparkle_envelope_peaks_halfway_through_its_cycle() {
        let sparkle = SparkleParticle {
            x_vw: 10.0,
            y_vh: 10.0,
            duration_secs: 2.0,
            delay_secs: 1.0,
            size_px: 3.0,
        };
        assert_eq!(sparkle.sample(0.5).opacity, 0.0);
        let peak = sparkle.sample(2.0);
        assert!((peak.scale - 1.0).abs() < 1e-6);
        assert!((peak.opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sparkle_field_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        let field = SparkleField::generate(&mut rng);
        assert_eq!(field.sparkles.len(), SPARKLE_COUNT);
        for sparkle in &field.sparkles {
            assert!((1.5..3.5).contains(&sparkle.duration_secs));
            assert!((0.0..3.0).contains(&sparkle.delay_secs));
            assert!((2.0..5.0).contains(&sparkle.size_px));
        }
    }

    #[test]
    fn card_loops_start_and_end_at_rest() {
        assert_eq!(pulse_scale(0.0), 1.0);
        assert!((pulse_scale(0.75) - 1.2).abs() < 1e-6);
        assert!((pulse_scale(1.5) - 1.0).abs() < 1e-6);
        assert_eq!(bob_offset(0.0), 0.0);
        assert!((bob_offset(1.5) + 10.0).abs() < 1e-6);
    }
}

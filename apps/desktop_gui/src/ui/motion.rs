//! Spring interpolation of the negative control towards the latest evasion
//! position.

use card_core::{CardPanel, EvasionPosition, SpringTransition};

const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;
const SETTLE_EPSILON: f32 = 1e-3;

/// Unit-mass damped spring on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    fn step(&mut self, curve: SpringTransition, dt: f32) {
        let force = -curve.stiffness * (self.value - self.target) - curve.damping * self.velocity;
        self.velocity += force * dt;
        self.value += self.velocity * dt;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnimatedPosition {
    curve: SpringTransition,
    x: Spring,
    y: Spring,
    opacity: Spring,
    scale: Spring,
}

impl AnimatedPosition {
    pub fn new(start: EvasionPosition, curve: SpringTransition) -> Self {
        Self {
            curve,
            x: Spring::at(start.x),
            y: Spring::at(start.y),
            opacity: Spring::at(start.opacity),
            scale: Spring::at(start.scale),
        }
    }

    pub fn set_target(&mut self, target: EvasionPosition, curve: SpringTransition) {
        self.curve = curve;
        self.x.target = target.x;
        self.y.target = target.y;
        self.opacity.target = target.opacity;
        self.scale.target = target.scale;
    }

    /// Retargets onto the negative control described by the asking panel.
    /// Other panels leave the animation where it is.
    pub fn follow(&mut self, panel: &CardPanel) {
        if let CardPanel::Asking {
            negative_position,
            transition,
            ..
        } = panel
        {
            self.set_target(*negative_position, *transition);
        }
    }

    pub fn step(&mut self, dt: f32) {
        let curve = self.curve;
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            for spring in [
                &mut self.x,
                &mut self.y,
                &mut self.opacity,
                &mut self.scale,
            ] {
                spring.step(curve, h);
            }
            remaining -= h;
        }
    }

    pub fn current(&self) -> EvasionPosition {
        EvasionPosition {
            x: self.x.value,
            y: self.y.value,
            opacity: self.opacity.value.clamp(0.0, 1.0),
            scale: self.scale.value.max(0.0),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled()
            && self.y.is_settled()
            && self.opacity.is_settled()
            && self.scale.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target_within_a_second() {
        let mut motion = AnimatedPosition::new(EvasionPosition::RESTING, SpringTransition::EVASION);
        let target = EvasionPosition {
            x: 180.0,
            y: -40.0,
            opacity: 1.0,
            scale: 1.0,
        };
        motion.set_target(target, SpringTransition::EVASION);
        assert!(!motion.is_settled());

        for _ in 0..120 {
            motion.step(1.0 / 60.0);
        }
        let now = motion.current();
        assert!((now.x - 180.0).abs() < 0.5, "x = {}", now.x);
        assert!((now.y + 40.0).abs() < 0.5, "y = {}", now.y);
    }

    #[test]
    fn opacity_is_clamped_while_fading_out() {
        let mut motion = AnimatedPosition::new(EvasionPosition::RESTING, SpringTransition::EVASION);
        motion.set_target(
            EvasionPosition {
                x: -140.0,
                y: 0.0,
                opacity: 0.0,
                scale: 0.5,
            },
            SpringTransition::EVASION,
        );
        for _ in 0..300 {
            motion.step(1.0 / 60.0);
            let now = motion.current();
            assert!((0.0..=1.0).contains(&now.opacity));
        }
        assert!(motion.is_settled());
    }

    #[test]
    fn follows_the_panel_position_and_curve() {
        let mut motion = AnimatedPosition::new(EvasionPosition::RESTING, SpringTransition::EVASION);
        let soft = SpringTransition {
            stiffness: 120.0,
            damping: 14.0,
        };
        let target = EvasionPosition {
            x: 90.0,
            y: 30.0,
            opacity: 1.0,
            scale: 1.0,
        };
        motion.follow(&CardPanel::Asking {
            headline: String::new(),
            affirmative_label: "Yes".to_string(),
            affirmative_font_rem: 1.15,
            negative_label: "Are you sure?".to_string(),
            negative_position: target,
            negative_interactive: true,
            transition: soft,
        });
        assert_eq!(motion.curve, soft);
        assert_eq!(motion.x.target, 90.0);
        assert_eq!(motion.y.target, 30.0);

        motion.follow(&CardPanel::Celebrating {
            heading: String::new(),
            message: String::new(),
            envelope_hint: String::new(),
        });
        assert_eq!(motion.x.target, 90.0);
        assert_eq!(motion.curve, soft);
    }
}

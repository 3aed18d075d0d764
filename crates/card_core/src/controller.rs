//! Evasive-choice state machine behind the card.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    ambient::{HeartRain, SparkleField},
    domain::{
        ConfettiBurst, EvasionPosition, SpringTransition, ViewportClass, EVASION_LIMIT,
        HAPTIC_PULSE,
    },
    effects::{CelebrationEmitter, HapticDevice},
    ladder::{affirmative_font_rem, negative_label},
    view::{CardCopy, CardPanel, CardView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Asking,
    Celebrating,
    LetterOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    NotReady,
    AlreadyReady,
    AlreadyAccepted,
    NotAccepted,
    ControlRetired,
    InvalidViewport,
}

/// Outcome of feeding one interaction to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionState {
    pub accepted: bool,
    pub evasion_count: u32,
    pub evasion_position: EvasionPosition,
    pub letter_open: bool,
    pub ready: bool,
    pub sparkling: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
    hearts: Option<HeartRain>,
    sparkles: Option<SparkleField>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        match (self.state.accepted, self.state.letter_open) {
            (false, _) => Stage::Asking,
            (true, false) => Stage::Celebrating,
            (true, true) => Stage::LetterOpen,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    /// Heart rain layout; `None` until [`Self::initialize`] has run.
    pub fn hearts(&self) -> Option<&HeartRain> {
        self.hearts.as_ref()
    }

    /// Sparkle layout, only once the affirmative choice armed it.
    /// Drawn in `initialize`; hidden until the affirmative choice arms it.
    pub fn sparkles(&self) -> Option<&SparkleField> {
        self.sparkles.as_ref().filter(|_| self.state.sparkling)
    }

    /// One-time client setup. Draws every randomised decorative layout, then
    /// marks the controller ready for interactive rendering.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        if self.state.ready {
            return Transition::Ignored(IgnoreReason::AlreadyReady);
        }
        self.hearts = Some(HeartRain::generate(rng));
        self.sparkles = Some(SparkleField::generate(rng));
        self.state.ready = true;
        debug!("card controller ready");
        Transition::Applied
    }

    pub fn select_affirmative(&mut self, emitter: &mut dyn CelebrationEmitter) -> Transition {
        if let Err(reason) = self.require_asking() {
            return Transition::Ignored(reason);
        }

        self.state.accepted = true;
        self.state.letter_open = false;
        emitter.emit(&ConfettiBurst::default());
        self.state.sparkling = true;
        info!(
            evasions = self.state.evasion_count,
            "affirmative choice selected"
        );
        Transition::Applied
    }

    /// Relocates the negative control in response to hover-enter or touch-start.
    pub fn evade_negative<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        viewport_width: f32,
        haptics: &mut dyn HapticDevice,
    ) -> Transition {
        if let Err(reason) = self.require_asking() {
            return Transition::Ignored(reason);
        }
        if self.state.evasion_count >= EVASION_LIMIT {
            return Transition::Ignored(IgnoreReason::ControlRetired);
        }
        let viewport = match ViewportClass::classify(viewport_width) {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!(error = %err, "ignoring evasion with unusable viewport width");
                return Transition::Ignored(IgnoreReason::InvalidViewport);
            }
        };

        let next_count = self.state.evasion_count + 1;
        if next_count >= EVASION_LIMIT {
            self.state.evasion_position = viewport.retreat_position();
            self.state.evasion_count = next_count;
            debug!(?viewport, "negative control retired");
            return Transition::Applied;
        }

        self.state.evasion_position = viewport.sample_offset(rng, viewport_width);
        self.state.evasion_count = next_count;
        debug!(
            count = next_count,
            x = self.state.evasion_position.x,
            y = self.state.evasion_position.y,
            ?viewport,
            "negative control evaded"
        );

        if haptics.is_available() {
            if let Err(err) = haptics.pulse(HAPTIC_PULSE) {
                debug!(error = %err, "haptic pulse failed");
            }
        }
        Transition::Applied
    }

    pub fn open_letter(&mut self) -> Transition {
        self.set_letter_open(true)
    }

    pub fn close_letter(&mut self) -> Transition {
        self.set_letter_open(false)
    }

    /// Derived view. `None` until ready, so nothing random renders early.
    pub fn view(&self, copy: &CardCopy) -> Option<CardView> {
        if !self.state.ready {
            return None;
        }

        let panel = match self.stage() {
            Stage::Asking => {
                let position = self.state.evasion_position;
                CardPanel::Asking {
                    headline: copy.headline.clone(),
                    affirmative_label: copy.affirmative_label.clone(),
                    affirmative_font_rem: affirmative_font_rem(self.state.evasion_count),
                    negative_label: negative_label(self.state.evasion_count).to_string(),
                    negative_position: position,
                    negative_interactive: !position.is_hidden(),
                    transition: SpringTransition::EVASION,
                }
            }
            Stage::Celebrating => CardPanel::Celebrating {
                heading: copy.celebration_heading.clone(),
                message: copy.celebration_message.clone(),
                envelope_hint: copy.envelope_hint.clone(),
            },
            Stage::LetterOpen => CardPanel::Letter {
                salutation: copy.letter_salutation.clone(),
                paragraphs: copy.letter_paragraphs.clone(),
                signature: copy.letter_signature.clone(),
                close_label: copy.close_label.clone(),
            },
        };

        Some(CardView {
            sparkling: self.state.sparkling,
            panel,
        })
    }

    fn require_asking(&self) -> Result<(), IgnoreReason> {
        if !self.state.ready {
            Err(IgnoreReason::NotReady)
        } else if self.state.accepted {
            Err(IgnoreReason::AlreadyAccepted)
        } else {
            Ok(())
        }
    }

    fn set_letter_open(&mut self, open: bool) -> Transition {
        if !self.state.accepted {
            return Transition::Ignored(IgnoreReason::NotAccepted);
        }
        self.state.letter_open = open;
        info!(letter_open = open, "letter toggled");
        Transition::Applied
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

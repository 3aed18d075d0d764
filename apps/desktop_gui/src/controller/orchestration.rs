//! Routes UI events into the interaction controller along with the effect
//! collaborators each operation needs.

use card_core::{CelebrationEmitter, HapticDevice, InteractionController, Transition};
use rand::Rng;

use crate::controller::events::UiEvent;

pub struct EffectSinks<'a> {
    pub celebration: &'a mut dyn CelebrationEmitter,
    pub haptics: &'a mut dyn HapticDevice,
}

pub fn dispatch_ui_event<R: Rng + ?Sized>(
    controller: &mut InteractionController,
    rng: &mut R,
    event: UiEvent,
    sinks: EffectSinks<'_>,
) -> Transition {
    let transition = match event {
        UiEvent::NegativeContact { viewport_width, .. } => {
            controller.evade_negative(rng, viewport_width, sinks.haptics)
        }
        UiEvent::AffirmativeClicked => controller.select_affirmative(sinks.celebration),
        UiEvent::EnvelopeClicked => controller.open_letter(),
        UiEvent::LetterClosed => controller.close_letter(),
    };

    match transition {
        Transition::Applied => tracing::debug!(event = event.name(), "applied ui event"),
        Transition::Ignored(reason) => {
            tracing::debug!(event = event.name(), ?reason, "ui event ignored")
        }
    }
    transition
}

#[cfg(test)]
mod tests {
    use card_core::{
        effects::{RecordingEmitter, RecordingHaptics},
        IgnoreReason, Stage,
    };
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::controller::events::ContactKind;

    #[test]
    fn routes_each_event_to_its_operation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut controller = InteractionController::new();
        controller.initialize(&mut rng);
        let mut emitter = RecordingEmitter::default();
        let mut haptics = RecordingHaptics::available();

        let mut send = |controller: &mut InteractionController, event: UiEvent| {
            dispatch_ui_event(
                controller,
                &mut rng,
                event,
                EffectSinks {
                    celebration: &mut emitter,
                    haptics: &mut haptics,
                },
            )
        };

        let contact = UiEvent::NegativeContact {
            kind: ContactKind::HoverEnter,
            viewport_width: 900.0,
        };
        assert!(send(&mut controller, contact).is_applied());
        assert_eq!(controller.state().evasion_count, 1);

        assert_eq!(
            send(&mut controller, UiEvent::EnvelopeClicked),
            Transition::Ignored(IgnoreReason::NotAccepted)
        );
        assert!(send(&mut controller, UiEvent::AffirmativeClicked).is_applied());
        assert!(send(&mut controller, UiEvent::EnvelopeClicked).is_applied());
        assert_eq!(controller.stage(), Stage::LetterOpen);
        assert!(send(&mut controller, UiEvent::LetterClosed).is_applied());
        assert_eq!(controller.stage(), Stage::Celebrating);

        assert_eq!(emitter.bursts.len(), 1);
        assert_eq!(haptics.pulses.len(), 1);
    }
}

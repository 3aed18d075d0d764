//! Pointer-level UI events and edge detection for the negative control.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    HoverEnter,
    TouchStart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    NegativeContact {
        kind: ContactKind,
        viewport_width: f32,
    },
    AffirmativeClicked,
    EnvelopeClicked,
    LetterClosed,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NegativeContact {
                kind: ContactKind::HoverEnter,
                ..
            } => "negative_hover_enter",
            Self::NegativeContact {
                kind: ContactKind::TouchStart,
                ..
            } => "negative_touch_start",
            Self::AffirmativeClicked => "affirmative_clicked",
            Self::EnvelopeClicked => "envelope_clicked",
            Self::LetterClosed => "letter_closed",
        }
    }
}

/// Turns per-frame hover/press samples into first-contact edges, so a pointer
/// resting on the control fires once rather than every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactTracker {
    hovered: bool,
    touched: bool,
}

impl ContactTracker {
    pub fn update(&mut self, hovered: bool, touched: bool) -> Option<ContactKind> {
        let touch_started = touched && !self.touched;
        let hover_entered = hovered && !self.hovered;
        self.hovered = hovered;
        self.touched = touched;

        if touch_started {
            Some(ContactKind::TouchStart)
        } else if hover_entered {
            Some(ContactKind::HoverEnter)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_hover_enter() {
        let mut tracker = ContactTracker::default();
        assert_eq!(tracker.update(true, false), Some(ContactKind::HoverEnter));
        assert_eq!(tracker.update(true, false), None);
        assert_eq!(tracker.update(false, false), None);
        assert_eq!(tracker.update(true, false), Some(ContactKind::HoverEnter));
    }

    #[test]
    fn touch_start_wins_over_simultaneous_hover() {
        let mut tracker = ContactTracker::default();
        assert_eq!(tracker.update(true, true), Some(ContactKind::TouchStart));
        assert_eq!(tracker.update(true, true), None);
        tracker.reset();
        assert_eq!(tracker.update(false, true), Some(ContactKind::TouchStart));
    }
}

//! Interaction model for the valentine card: the evasive "no" state machine,
//! its derived view, and the decorative layouts drawn behind it.

pub mod ambient;
pub mod controller;
pub mod domain;
pub mod effects;
pub mod error;
pub mod ladder;
pub mod view;

pub use controller::{IgnoreReason, InteractionController, InteractionState, Stage, Transition};
pub use domain::{ConfettiBurst, EvasionPosition, SpringTransition, ViewportClass};
pub use effects::{CelebrationEmitter, HapticDevice, NoHaptics};
pub use error::CardError;
pub use view::{CardCopy, CardPanel, CardView};

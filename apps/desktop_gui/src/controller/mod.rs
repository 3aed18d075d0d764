//! Controller layer: UI events and their dispatch into the card state machine.

pub mod events;
pub mod orchestration;

//! UI layer: app shell, painted widgets, motion, confetti and theme.

pub mod app;
pub mod confetti;
pub mod haptics;
pub mod motion;
pub mod theme;
pub mod widgets;

pub use app::ValentineApp;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardError {
    #[error("haptic feedback is not available on this device")]
    HapticUnavailable,
    #[error("haptic pulse rejected: {0}")]
    HapticRejected(String),
    #[error("viewport width must be finite and positive, got {0}")]
    InvalidViewportWidth(f32),
    #[error("configuration error: {0}")]
    Config(String),
}

impl CardError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

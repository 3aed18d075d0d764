//! One-way collaborators notified by the controller. Nothing they do feeds back
//! into interaction state.

use std::time::Duration;

use crate::{domain::ConfettiBurst, error::CardError};

pub trait CelebrationEmitter {
    fn emit(&mut self, burst: &ConfettiBurst);
}

pub trait HapticDevice {
    fn is_available(&self) -> bool;
    fn pulse(&mut self, duration: Duration) -> Result<(), CardError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticDevice for NoHaptics {
    fn is_available(&self) -> bool {
        false
    }

    fn pulse(&mut self, _duration: Duration) -> Result<(), CardError> {
        Err(CardError::HapticUnavailable)
    }
}

/// Keeps every burst it receives. Used by the headless runner and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingEmitter {
    pub bursts: Vec<ConfettiBurst>,
}

impl CelebrationEmitter for RecordingEmitter {
    fn emit(&mut self, burst: &ConfettiBurst) {
        self.bursts.push(burst.clone());
    }
}

#[derive(Debug, Clone)]
pub struct RecordingHaptics {
    pub available: bool,
    pub fail_with: Option<String>,
    pub pulses: Vec<Duration>,
}

impl RecordingHaptics {
    pub fn available() -> Self {
        Self {
            available: true,
            fail_with: None,
            pulses: Vec::new(),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            available: true,
            fail_with: Some(reason.into()),
            pulses: Vec::new(),
        }
    }
}

impl HapticDevice for RecordingHaptics {
    fn is_available(&self) -> bool {
        self.available
    }

    fn pulse(&mut self, duration: Duration) -> Result<(), CardError> {
        if let Some(reason) = &self.fail_with {
            return Err(CardError::HapticRejected(reason.clone()));
        }
        self.pulses.push(duration);
        Ok(())
    }
}

//! Haptics adapters.

use crate::board::ports::{Haptics, HapticsError};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Haptics for devices that cannot vibrate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _duration: Duration) -> Result<(), HapticsError> {
        Err(HapticsError::Unsupported)
    }
}

/// Records every pulse request; optionally reports failure for each one.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<Duration>>,
    failing: bool,
}

impl RecordingHaptics {
    /// Creates a recorder whose pulses succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose pulses all fail after being recorded.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            pulses: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Returns the requested pulse lengths in order.
    #[must_use]
    pub fn pulses(&self) -> Vec<Duration> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Haptics for RecordingHaptics {
    fn pulse(&self, duration: Duration) -> Result<(), HapticsError> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
        if self.failing {
            return Err(HapticsError::Failed("vibration rejected".to_owned()));
        }
        Ok(())
    }
}

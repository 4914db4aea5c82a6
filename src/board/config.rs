//! Gesture timing configuration.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default touch long-press threshold.
pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;
/// Default upper bound of a tap.
pub const DEFAULT_TAP_MAX_MS: u32 = 200;
/// Default haptic pulse length on touch activation.
pub const DEFAULT_HAPTIC_PULSE_MS: u32 = 50;

/// Timing policy for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Time a touch press must be held before a drag starts.
    pub long_press_ms: u32,
    /// Releases faster than this are classified as taps.
    pub tap_max_ms: u32,
    /// Length of the haptic pulse fired on touch activation.
    pub haptic_pulse_ms: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            tap_max_ms: DEFAULT_TAP_MAX_MS,
            haptic_pulse_ms: DEFAULT_HAPTIC_PULSE_MS,
        }
    }
}

/// Errors returned while loading a [`DragConfig`].
#[derive(Debug, Error)]
pub enum DragConfigError {
    /// The document is not valid JSON for this configuration.
    #[error("invalid drag configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The long-press threshold is zero.
    #[error("long_press_ms must be positive")]
    ZeroLongPress,

    /// The tap window does not end before the long-press threshold.
    #[error("tap_max_ms ({tap_max_ms}) must be below long_press_ms ({long_press_ms})")]
    TapWindowTooLong {
        /// Configured tap bound.
        tap_max_ms: u32,
        /// Configured long-press threshold.
        long_press_ms: u32,
    },
}

impl DragConfig {
    /// Parses and validates a JSON configuration document. Missing fields
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DragConfigError::Parse`] for malformed JSON and the
    /// validation variants described on [`DragConfig::validate`].
    pub fn from_json(document: &str) -> Result<Self, DragConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the timing invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DragConfigError::ZeroLongPress`] when `long_press_ms` is
    /// zero and [`DragConfigError::TapWindowTooLong`] when `tap_max_ms` is
    /// not strictly below `long_press_ms`.
    pub fn validate(&self) -> Result<(), DragConfigError> {
        if self.long_press_ms == 0 {
            return Err(DragConfigError::ZeroLongPress);
        }
        if self.tap_max_ms >= self.long_press_ms {
            return Err(DragConfigError::TapWindowTooLong {
                tap_max_ms: self.tap_max_ms,
                long_press_ms: self.long_press_ms,
            });
        }
        Ok(())
    }

    /// Returns the long-press threshold.
    #[must_use]
    pub fn long_press(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.long_press_ms))
    }

    /// Returns the tap bound.
    #[must_use]
    pub fn tap_max(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.tap_max_ms))
    }

    /// Returns the haptic pulse length.
    #[must_use]
    pub fn haptic_pulse(&self) -> Duration {
        Duration::from_millis(u64::from(self.haptic_pulse_ms))
    }
}

//! Haptic feedback port.

use std::time::Duration;
use thiserror::Error;

/// Best-effort vibration capability.
pub trait Haptics: Send + Sync {
    /// Emits one pulse.
    ///
    /// # Errors
    ///
    /// Returns [`HapticsError`] when the device cannot vibrate. Callers
    /// ignore the error.
    fn pulse(&self, duration: Duration) -> Result<(), HapticsError>;
}

/// Reasons a haptic pulse was not delivered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HapticsError {
    /// The device has no vibration capability.
    #[error("haptic feedback is not supported")]
    Unsupported,

    /// The platform refused the request.
    #[error("haptic feedback failed: {0}")]
    Failed(String),
}

//! Adapter implementations for the drag engine ports.
//!
//! - [`memory::InMemoryBoard`]: board store and column geometry held in
//!   process, for tests and for hosts that own board state locally
//! - [`memory::RecordingObserver`], [`memory::RecordingInputSurface`] and
//!   [`memory::RecordingHaptics`]: capture engine output for assertions
//! - [`memory::NoHaptics`]: devices without vibration
//! - [`memory::ManualClock`]: settable clock driving the long press

pub mod memory;

//! In-process adapters.

mod board;
mod clock;
mod haptics;
mod observer;
mod surface;

pub use board::InMemoryBoard;
pub use clock::ManualClock;
pub use haptics::{NoHaptics, RecordingHaptics};
pub use observer::{ObservedEvent, RecordingObserver};
pub use surface::RecordingInputSurface;

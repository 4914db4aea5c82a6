//! Port contracts for the drag engine.
//!
//! Ports define the capabilities the presentation and data layers supply:
//! item storage, live column geometry, haptics, input listener registration
//! and session observation.

pub mod geometry;
pub mod haptics;
pub mod input_surface;
pub mod observer;
pub mod store;

pub use geometry::ContainerGeometry;
pub use haptics::{Haptics, HapticsError};
pub use input_surface::InputSurface;
pub use observer::SessionObserver;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};

//! Input surface port: registration of gesture-scoped listeners.

use crate::board::domain::{InputModality, PointerId};

/// Shared input surface on which move and end listeners are registered for
/// the remainder of a gesture.
///
/// The drag controller pairs every [`InputSurface::attach`] with exactly one
/// [`InputSurface::detach`] on every termination path.
pub trait InputSurface: Send + Sync {
    /// Starts routing move/end/cancel events of `pointer_id` to the engine.
    fn attach(&self, pointer_id: PointerId, modality: InputModality);

    /// Stops routing events of `pointer_id`.
    fn detach(&self, pointer_id: PointerId);
}

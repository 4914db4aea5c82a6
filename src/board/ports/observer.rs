//! Observer port for presentation consumers.

use crate::board::domain::{ContainerId, DragSnapshot, ItemId};

/// Receives session snapshots and committed moves.
pub trait SessionObserver: Send + Sync {
    /// Called after every session transition (begin, update, end, cancel).
    /// `None` means no session is active.
    fn on_session_changed(&self, snapshot: Option<&DragSnapshot>);

    /// Called once per committed move, after the session has been cleared.
    fn on_commit(&self, item_id: &ItemId, destination: &ContainerId);
}

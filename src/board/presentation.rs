//! Read-only render helpers derived from session snapshots.
//!
//! Cards and columns own no drag logic; they ask these helpers how to draw
//! themselves for the latest snapshot.

use crate::board::{
    domain::{ContainerId, DragSnapshot, ItemId, Point},
    ports::SessionObserver,
};
use std::sync::{Mutex, PoisonError};

/// How a card renders during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDragState {
    /// Rendered normally.
    Resting,
    /// Picked up: rendered as a placeholder in its column while the
    /// indicator follows the pointer.
    Lifted,
}

/// How a column renders during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDragState {
    /// No drag involves this column.
    Idle,
    /// The dragged card came from this column.
    Origin,
    /// Releasing now would move the dragged card here.
    DropTarget,
}

/// The floating copy of the dragged card.
#[derive(Debug, Clone, PartialEq)]
pub struct DragIndicator {
    /// Card being dragged.
    pub item_id: ItemId,
    /// Where to draw it.
    pub position: Point,
}

/// Returns how `item_id` should render.
#[must_use]
pub fn card_state(snapshot: Option<&DragSnapshot>, item_id: &ItemId) -> CardDragState {
    match snapshot {
        Some(snapshot) if snapshot.dragged_item_id == *item_id => CardDragState::Lifted,
        _ => CardDragState::Resting,
    }
}

/// Returns how `container_id` should render.
#[must_use]
pub fn column_state(
    snapshot: Option<&DragSnapshot>,
    container_id: &ContainerId,
) -> ColumnDragState {
    let Some(snapshot) = snapshot else {
        return ColumnDragState::Idle;
    };
    if snapshot.would_commit() && snapshot.hovered_container_id.as_ref() == Some(container_id) {
        ColumnDragState::DropTarget
    } else if snapshot.origin_container_id == *container_id {
        ColumnDragState::Origin
    } else {
        ColumnDragState::Idle
    }
}

/// Returns the indicator to draw for a snapshot.
#[must_use]
pub fn drag_indicator(snapshot: Option<&DragSnapshot>) -> Option<DragIndicator> {
    snapshot.map(|snapshot| DragIndicator {
        item_id: snapshot.dragged_item_id.clone(),
        position: snapshot.pointer_position,
    })
}

/// Observer that keeps only the newest published state, so a renderer
/// draws at most once per display frame however many moves arrived.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: Mutex<Option<Option<DragSnapshot>>>,
}

impl FrameCoalescer {
    /// Creates a coalescer with no pending frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the state to draw this frame.
    ///
    /// Returns `None` when nothing changed since the last frame, and
    /// `Some(None)` when the session ended.
    pub fn take_frame(&self) -> Option<Option<DragSnapshot>> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl SessionObserver for FrameCoalescer {
    fn on_session_changed(&self, snapshot: Option<&DragSnapshot>) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.cloned());
    }

    fn on_commit(&self, _item_id: &ItemId, _destination: &ContainerId) {}
}

//! The drag session and its published snapshot.

use super::{ContainerId, DragSessionId, InputModality, ItemId, Point};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Engine-wide gesture phase.
///
/// `Pressed` exists only while a touch press waits for the long-press
/// threshold; pointer presses go straight from `Idle` to `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    /// No press is being tracked.
    Idle,
    /// A touch press is waiting for the long-press threshold.
    Pressed,
    /// A drag session is active.
    Dragging,
}

/// The single in-flight drag.
///
/// Identity, dragged item, origin, modality and start time are fixed at
/// creation. Only the pointer position and hovered container change.
#[derive(Debug, PartialEq)]
pub struct DragSession {
    id: DragSessionId,
    dragged_item_id: ItemId,
    origin_container_id: ContainerId,
    pointer_position: Point,
    hovered_container_id: Option<ContainerId>,
    input_modality: InputModality,
    started_at: DateTime<Utc>,
}

impl DragSession {
    /// Starts a session for an item picked up from `origin_container_id`.
    #[must_use]
    pub fn start(
        dragged_item_id: ItemId,
        origin_container_id: ContainerId,
        pointer_position: Point,
        input_modality: InputModality,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DragSessionId::new(),
            dragged_item_id,
            origin_container_id,
            pointer_position,
            hovered_container_id: None,
            input_modality,
            started_at,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> DragSessionId {
        self.id
    }

    /// Returns the item being dragged.
    #[must_use]
    pub const fn dragged_item_id(&self) -> &ItemId {
        &self.dragged_item_id
    }

    /// Returns the container the item belonged to when the session began.
    #[must_use]
    pub const fn origin_container_id(&self) -> &ContainerId {
        &self.origin_container_id
    }

    /// Returns the latest pointer position.
    #[must_use]
    pub const fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    /// Returns the container under the pointer at the last hit test.
    #[must_use]
    pub const fn hovered_container_id(&self) -> Option<&ContainerId> {
        self.hovered_container_id.as_ref()
    }

    /// Returns the input modality the session was started with.
    #[must_use]
    pub const fn input_modality(&self) -> InputModality {
        self.input_modality
    }

    /// Returns the press timestamp that started the gesture.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Records a pointer move and the hit-test result at the new position.
    ///
    /// Returns `true` when the hovered container changed.
    pub(crate) fn track(&mut self, position: Point, hovered: Option<ContainerId>) -> bool {
        self.pointer_position = position;
        let changed = self.hovered_container_id != hovered;
        self.hovered_container_id = hovered;
        changed
    }

    /// Returns the drop destination: the hovered container when it differs
    /// from the origin.
    #[must_use]
    pub fn destination(&self) -> Option<&ContainerId> {
        self.hovered_container_id
            .as_ref()
            .filter(|hovered| **hovered != self.origin_container_id)
    }

    /// Captures an immutable view for presentation consumers.
    #[must_use]
    pub fn snapshot(&self) -> DragSnapshot {
        DragSnapshot {
            session_id: self.id,
            dragged_item_id: self.dragged_item_id.clone(),
            origin_container_id: self.origin_container_id.clone(),
            pointer_position: self.pointer_position,
            hovered_container_id: self.hovered_container_id.clone(),
            input_modality: self.input_modality,
            started_at: self.started_at,
        }
    }
}

/// Immutable copy of a [`DragSession`] published after every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSnapshot {
    /// Session identifier.
    pub session_id: DragSessionId,
    /// Item being dragged.
    pub dragged_item_id: ItemId,
    /// Container the item came from.
    pub origin_container_id: ContainerId,
    /// Latest pointer position.
    pub pointer_position: Point,
    /// Container under the pointer, if any.
    pub hovered_container_id: Option<ContainerId>,
    /// Input modality of the gesture.
    pub input_modality: InputModality,
    /// Press timestamp.
    pub started_at: DateTime<Utc>,
}

impl DragSnapshot {
    /// Returns whether releasing now would move the item.
    #[must_use]
    pub fn would_commit(&self) -> bool {
        self.hovered_container_id
            .as_ref()
            .is_some_and(|hovered| *hovered != self.origin_container_id)
    }
}

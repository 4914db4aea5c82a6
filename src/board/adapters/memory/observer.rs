//! Observer that records everything the engine publishes.

use crate::board::{
    domain::{ContainerId, DragSnapshot, ItemId},
    ports::SessionObserver,
};
use std::sync::{Mutex, PoisonError};

/// One notification received from the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    /// A session transition; `None` means the session ended.
    SessionChanged(Option<DragSnapshot>),
    /// A committed move.
    Commit {
        /// Item that moved.
        item_id: ItemId,
        /// Its new column.
        destination: ContainerId,
    },
}

/// Thread-safe event recorder.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ObservedEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Returns all events in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns committed moves in order.
    #[must_use]
    pub fn commits(&self) -> Vec<(ItemId, ContainerId)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ObservedEvent::Commit {
                    item_id,
                    destination,
                } => Some((item_id, destination)),
                ObservedEvent::SessionChanged(_) => None,
            })
            .collect()
    }

    /// Returns every published session state in order.
    #[must_use]
    pub fn session_changes(&self) -> Vec<Option<DragSnapshot>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ObservedEvent::SessionChanged(snapshot) => Some(snapshot),
                ObservedEvent::Commit { .. } => None,
            })
            .collect()
    }

    /// Returns the most recently published session state, or `None` when
    /// nothing was published yet.
    #[must_use]
    pub fn last_session(&self) -> Option<Option<DragSnapshot>> {
        self.session_changes().pop()
    }
}

impl SessionObserver for RecordingObserver {
    fn on_session_changed(&self, snapshot: Option<&DragSnapshot>) {
        self.push(ObservedEvent::SessionChanged(snapshot.cloned()));
    }

    fn on_commit(&self, item_id: &ItemId, destination: &ContainerId) {
        self.push(ObservedEvent::Commit {
            item_id: item_id.clone(),
            destination: destination.clone(),
        });
    }
}

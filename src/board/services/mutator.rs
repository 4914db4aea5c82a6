//! Commit boundary between the drag engine and the board store.

use crate::board::{
    domain::{ContainerId, ItemId},
    ports::{BoardStore, BoardStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// A move applied to the board store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Item that moved.
    pub item_id: ItemId,
    /// Column the item left.
    pub from: ContainerId,
    /// Column the item joined.
    pub to: ContainerId,
}

/// Errors returned when a move cannot be committed.
#[derive(Debug, Clone, Error)]
pub enum BoardMutationError {
    /// The item is already in the destination column.
    #[error("item {item_id} is already in {container_id}")]
    SameContainer {
        /// Item that was dropped.
        item_id: ItemId,
        /// Its current column.
        container_id: ContainerId,
    },

    /// The store rejected the lookup or the write.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// The single write path from the drag engine into board state.
///
/// Commits are optimistic and fire-and-forget: no retries and no undo live
/// here. Persistence failures surface through the store's own error path.
#[derive(Clone)]
pub struct BoardMutator<S>
where
    S: BoardStore,
{
    store: Arc<S>,
}

impl<S> BoardMutator<S>
where
    S: BoardStore,
{
    /// Creates a mutator over a board store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the column an item is currently assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when the store lookup fails.
    pub fn current_container(
        &self,
        item_id: &ItemId,
    ) -> Result<Option<ContainerId>, BoardStoreError> {
        self.store.container_of(item_id)
    }

    /// Reassigns `item_id` to `destination`.
    ///
    /// The caller only invokes this when the drop column differs from the
    /// session origin; the store's current assignment is checked again here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardMutationError::SameContainer`] when the item already
    /// sits in `destination`, and [`BoardMutationError::Store`] when the
    /// item is unknown or the store refuses the write.
    pub fn commit_move(
        &self,
        item_id: &ItemId,
        destination: &ContainerId,
    ) -> Result<MoveRecord, BoardMutationError> {
        let current = self
            .store
            .container_of(item_id)?
            .ok_or_else(|| BoardStoreError::ItemNotFound(item_id.clone()))?;
        if current == *destination {
            return Err(BoardMutationError::SameContainer {
                item_id: item_id.clone(),
                container_id: current,
            });
        }

        self.store.commit_move(item_id, destination)?;
        Ok(MoveRecord {
            item_id: item_id.clone(),
            from: current,
            to: destination.clone(),
        })
    }
}

//! Store port for column assignment lookup and move commits.

use crate::board::domain::{ContainerId, ItemId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Item/column store owned by the external board state.
///
/// The engine reads assignments by identifier and writes only through
/// [`BoardStore::commit_move`].
pub trait BoardStore: Send + Sync {
    /// Returns the column an item is currently assigned to.
    ///
    /// Returns `None` when the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the lookup fails.
    fn container_of(&self, item_id: &ItemId) -> BoardStoreResult<Option<ContainerId>>;

    /// Reassigns an item to another column.
    ///
    /// Implementations apply the change optimistically; durable persistence
    /// and rollback on failure belong to the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ItemNotFound`] or
    /// [`BoardStoreError::ContainerNotFound`] for unknown identifiers, or
    /// [`BoardStoreError::Persistence`] when the change cannot be applied.
    fn commit_move(&self, item_id: &ItemId, destination: &ContainerId) -> BoardStoreResult<()>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// The item does not exist.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The column does not exist.
    #[error("container not found: {0}")]
    ContainerNotFound(ContainerId),

    /// An item with the same identifier already exists.
    #[error("duplicate item identifier: {0}")]
    DuplicateItem(ItemId),

    /// A column with the same identifier already exists.
    #[error("duplicate container identifier: {0}")]
    DuplicateContainer(ContainerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

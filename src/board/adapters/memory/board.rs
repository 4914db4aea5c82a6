//! In-memory board store with settable column geometry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{ContainerId, Item, ItemId, Rect},
    ports::{BoardStore, BoardStoreError, BoardStoreResult, ContainerGeometry},
};

/// Thread-safe in-memory board.
///
/// Columns keep insertion order, which is also their presentation order for
/// hit testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoard {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    columns: Vec<Column>,
    items: HashMap<ItemId, Item>,
}

#[derive(Debug)]
struct Column {
    id: ContainerId,
    item_ids: Vec<ItemId>,
    bounds: Option<Rect>,
}

impl InMemoryBoardState {
    fn column(&self, id: &ContainerId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == *id)
    }

    fn column_mut(&mut self, id: &ContainerId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == *id)
    }
}

impl InMemoryBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BoardStoreResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardStoreResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Appends a column after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DuplicateContainer`] when the column
    /// already exists.
    pub fn add_container(&self, id: ContainerId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        if state.column(&id).is_some() {
            return Err(BoardStoreError::DuplicateContainer(id));
        }
        state.columns.push(Column {
            id,
            item_ids: Vec::new(),
            bounds: None,
        });
        Ok(())
    }

    /// Sets or clears the current bounds of a column, as a layout pass
    /// would.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ContainerNotFound`] for unknown columns.
    pub fn set_bounds(&self, id: &ContainerId, bounds: Option<Rect>) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        let column = state
            .column_mut(id)
            .ok_or_else(|| BoardStoreError::ContainerNotFound(id.clone()))?;
        column.bounds = bounds;
        Ok(())
    }

    /// Adds an item to the end of its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DuplicateItem`] when the identifier is
    /// taken and [`BoardStoreError::ContainerNotFound`] when the item's
    /// column does not exist.
    pub fn insert_item(&self, item: Item) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        if state.items.contains_key(item.id()) {
            return Err(BoardStoreError::DuplicateItem(item.id().clone()));
        }
        let column = state
            .column_mut(item.container_id())
            .ok_or_else(|| BoardStoreError::ContainerNotFound(item.container_id().clone()))?;
        column.item_ids.push(item.id().clone());
        state.items.insert(item.id().clone(), item);
        Ok(())
    }

    /// Finds an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the board lock is
    /// poisoned.
    pub fn item(&self, id: &ItemId) -> BoardStoreResult<Option<Item>> {
        Ok(self.read()?.items.get(id).cloned())
    }

    /// Returns the ordered item identifiers of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ContainerNotFound`] for unknown columns.
    pub fn items_in(&self, id: &ContainerId) -> BoardStoreResult<Vec<ItemId>> {
        let state = self.read()?;
        state
            .column(id)
            .map(|column| column.item_ids.clone())
            .ok_or_else(|| BoardStoreError::ContainerNotFound(id.clone()))
    }
}

impl BoardStore for InMemoryBoard {
    fn container_of(&self, item_id: &ItemId) -> BoardStoreResult<Option<ContainerId>> {
        let state = self.read()?;
        let origin = state.items.get(item_id).map(Item::container_id);
        Ok(origin.cloned())
    }

    fn commit_move(&self, item_id: &ItemId, destination: &ContainerId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        if state.column(destination).is_none() {
            return Err(BoardStoreError::ContainerNotFound(destination.clone()));
        }
        let item = state
            .items
            .get_mut(item_id)
            .ok_or_else(|| BoardStoreError::ItemNotFound(item_id.clone()))?;
        let origin = item.container_id().clone();
        item.reassign(destination.clone());

        if let Some(column) = state.column_mut(&origin) {
            column.item_ids.retain(|id| id != item_id);
        }
        if let Some(column) = state.column_mut(destination) {
            column.item_ids.push(item_id.clone());
        }
        Ok(())
    }
}

impl ContainerGeometry for InMemoryBoard {
    fn containers(&self) -> Vec<ContainerId> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .columns
            .iter()
            .map(|column| column.id.clone())
            .collect()
    }

    fn bounds(&self, container_id: &ContainerId) -> Option<Rect> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.column(container_id).and_then(|column| column.bounds)
    }
}

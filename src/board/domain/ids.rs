//! Identifier types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Returns the trimmed token when it is non-empty and free of whitespace.
fn normalize_token(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Some(trimmed)
}

/// Identifier of a task card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a validated item identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidItemId`] when the value is empty
    /// after trimming or contains interior whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        match normalize_token(&raw) {
            Some(token) => Ok(Self(token.to_owned())),
            None => Err(BoardDomainError::InvalidItemId(raw)),
        }
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a board column (the item's status).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a validated container identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidContainerId`] when the value is
    /// empty after trimming or contains interior whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        match normalize_token(&raw) {
            Some(token) => Ok(Self(token.to_owned())),
            None => Err(BoardDomainError::InvalidContainerId(raw)),
        }
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for one drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragSessionId(Uuid);

impl DragSessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for DragSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DragSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

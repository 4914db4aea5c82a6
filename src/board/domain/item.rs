//! Task card aggregate and its display payload.

use super::{BoardDomainError, ContainerId, ItemId, ParsePriorityError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority shown on a card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display data of a card. The drag engine never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<NaiveDate>,
    category: Option<String>,
}

impl ItemPayload {
    /// Creates a payload with a required title and default priority.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self {
            title: normalized.to_owned(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            category: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Task card aggregate: identity, column assignment and payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    container_id: ContainerId,
    payload: ItemPayload,
}

impl Item {
    /// Creates an item assigned to a column.
    #[must_use]
    pub const fn new(id: ItemId, container_id: ContainerId, payload: ItemPayload) -> Self {
        Self {
            id,
            container_id,
            payload,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the column the item is assigned to.
    #[must_use]
    pub const fn container_id(&self) -> &ContainerId {
        &self.container_id
    }

    /// Returns the display payload.
    #[must_use]
    pub const fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    /// Reassigns the item to another column.
    pub fn reassign(&mut self, container_id: ContainerId) {
        self.container_id = container_id;
    }
}

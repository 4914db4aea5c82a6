//! Raw input descriptors delivered by the presentation layer.

use super::{ItemId, ParseModalityError, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input device family, decided once at press time and carried through the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputModality {
    /// Mouse or pen.
    Pointer,
    /// Finger on a touch surface.
    Touch,
}

impl InputModality {
    /// Returns the canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Touch => "touch",
        }
    }
}

impl TryFrom<&str> for InputModality {
    type Error = ParseModalityError;

    /// Accepts the canonical tags plus the browser `pointerType` values
    /// `mouse` and `pen`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pointer" | "mouse" | "pen" => Ok(Self::Pointer),
            "touch" => Ok(Self::Touch),
            _ => Err(ParseModalityError(value.to_owned())),
        }
    }
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of one physical pointer (a mouse, or one finger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(u64);

impl PointerId {
    /// Creates a pointer identity.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Element a press landed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PressTarget {
    /// The draggable surface of a card.
    Card(ItemId),
    /// An embedded action control inside a card (menu button, checkbox).
    /// Presses here never start a drag.
    Control(ItemId),
}

impl PressTarget {
    /// Returns the card the target belongs to.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        match self {
            Self::Card(item_id) | Self::Control(item_id) => item_id,
        }
    }

    /// Returns whether presses on this target may start a drag.
    #[must_use]
    pub const fn is_draggable(&self) -> bool {
        matches!(self, Self::Card(_))
    }
}

/// A press (pointer-down or touch-start) event.
#[derive(Debug, Clone, PartialEq)]
pub struct PressEvent {
    /// Pointer that pressed.
    pub pointer_id: PointerId,
    /// Device family of the pointer.
    pub modality: InputModality,
    /// Element under the press.
    pub target: PressTarget,
    /// Viewport coordinates of the press.
    pub position: Point,
}

impl PressEvent {
    /// Creates a press on a card's draggable surface.
    #[must_use]
    pub const fn on_card(
        pointer_id: PointerId,
        modality: InputModality,
        item_id: ItemId,
        position: Point,
    ) -> Self {
        Self {
            pointer_id,
            modality,
            target: PressTarget::Card(item_id),
            position,
        }
    }

    /// Creates a press on an embedded control inside a card.
    #[must_use]
    pub const fn on_control(
        pointer_id: PointerId,
        modality: InputModality,
        item_id: ItemId,
        position: Point,
    ) -> Self {
        Self {
            pointer_id,
            modality,
            target: PressTarget::Control(item_id),
            position,
        }
    }
}

//! Domain model for board drag-and-drop.
//!
//! The board domain models task cards, their column assignment, viewport
//! geometry and the single drag session while keeping rendering and
//! persistence concerns outside of the domain boundary.

mod error;
mod geometry;
mod ids;
mod input;
mod item;
mod session;

pub use error::{BoardDomainError, ParseModalityError, ParsePriorityError};
pub use geometry::{Point, Rect};
pub use ids::{ContainerId, DragSessionId, ItemId};
pub use input::{InputModality, PointerId, PressEvent, PressTarget};
pub use item::{Item, ItemPayload, Priority};
pub use session::{DragPhase, DragSession, DragSnapshot};

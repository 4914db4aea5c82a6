//! Application services for pointer drag-and-drop.

mod controller;
mod engine;
mod gesture;
mod mutator;

pub use controller::{ActiveDrag, BeginDrag, CancelReason, DragOutcome, DragSessionController};
pub use engine::{DragCollaborators, DragEngine, PressOutcome, ReleaseOutcome};
pub use gesture::{
    DragStart, GestureRecognizer, IgnoredPress, PendingPress, PendingRelease, PressSignal,
    TapKind,
};
pub use hit_test::HitTester;
pub use mutator::{BoardMutationError, BoardMutator, MoveRecord};

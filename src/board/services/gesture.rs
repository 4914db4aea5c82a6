//! Press classification: tap versus drag intent.
//!
//! Pointer presses on a card start a drag immediately. Touch presses start a
//! drag only after the configured long-press threshold; releasing or
//! interrupting earlier leaves the interaction a tap. The pending long press
//! is a deadline rather than a running timer: the host calls
//! [`GestureRecognizer::poll`] when the deadline passes.

use crate::board::{
    config::DragConfig,
    domain::{InputModality, ItemId, Point, PointerId, PressEvent},
};
use chrono::{DateTime, Utc};

/// A touch press waiting for the long-press threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPress {
    /// Pointer holding the press.
    pub pointer_id: PointerId,
    /// Card under the press.
    pub item_id: ItemId,
    /// Latest position of the pointer.
    pub position: Point,
    /// When the press began.
    pub pressed_at: DateTime<Utc>,
    /// When the press becomes a drag.
    pub deadline: DateTime<Utc>,
}

/// Signal to begin a drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    /// Pointer that owns the gesture.
    pub pointer_id: PointerId,
    /// Card to pick up.
    pub item_id: ItemId,
    /// Pointer position at activation.
    pub position: Point,
    /// Modality the gesture was pressed with.
    pub modality: InputModality,
    /// When the press began.
    pub pressed_at: DateTime<Utc>,
}

/// Why a press did not lead anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredPress {
    /// The press landed on a non-draggable control.
    Control,
    /// Another press or drag is already in progress.
    Busy,
    /// The pressed card is not on the board.
    UnknownItem,
}

/// Classification of a press released before activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    /// Released within the tap window; the host may treat it as a click.
    Tap,
    /// Held past the tap window but released before activation.
    ShortHold,
}

/// Result of feeding a press to the recognizer.
#[derive(Debug, Clone, PartialEq)]
pub enum PressSignal {
    /// Nothing happens.
    Ignored(IgnoredPress),
    /// A long press is pending until `deadline`.
    Pending {
        /// Activation time.
        deadline: DateTime<Utc>,
    },
    /// Start dragging now.
    Start(DragStart),
}

/// Result of releasing a pointer that may own a pending press.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRelease {
    /// The pointer had no pending press.
    NotPending,
    /// The press ended before activation.
    Tap(TapKind),
    /// The deadline had already passed; the drag must start before the
    /// release is handled.
    Activated(DragStart),
}

/// Classifies presses per input modality and holds at most one pending
/// long press.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: DragConfig,
    pending: Option<PendingPress>,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub const fn new(config: DragConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// Returns the timing policy.
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Returns the pending long press, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingPress> {
        self.pending.as_ref()
    }

    /// Returns when the pending long press activates.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Classifies a press.
    ///
    /// Presses on controls are ignored without arming anything, as is any
    /// press while another long press is pending.
    pub fn press(&mut self, event: &PressEvent, now: DateTime<Utc>) -> PressSignal {
        if !event.target.is_draggable() {
            return PressSignal::Ignored(IgnoredPress::Control);
        }
        if self.pending.is_some() {
            return PressSignal::Ignored(IgnoredPress::Busy);
        }

        let item_id = event.target.item_id().clone();
        match event.modality {
            InputModality::Pointer => PressSignal::Start(DragStart {
                pointer_id: event.pointer_id,
                item_id,
                position: event.position,
                modality: InputModality::Pointer,
                pressed_at: now,
            }),
            InputModality::Touch => {
                let deadline = now + self.config.long_press();
                self.pending = Some(PendingPress {
                    pointer_id: event.pointer_id,
                    item_id,
                    position: event.position,
                    pressed_at: now,
                    deadline,
                });
                PressSignal::Pending { deadline }
            }
        }
    }

    /// Follows the finger of a pending press so activation uses its latest
    /// position. Returns whether the pointer owns the pending press.
    pub fn track(&mut self, pointer_id: PointerId, position: Point) -> bool {
        match self.pending.as_mut() {
            Some(pending) if pending.pointer_id == pointer_id => {
                pending.position = position;
                true
            }
            _ => false,
        }
    }

    /// Fires the pending long press when its deadline has passed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<DragStart> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(activate)
    }

    /// Ends the pending press of `pointer_id`.
    pub fn release(&mut self, pointer_id: PointerId, now: DateTime<Utc>) -> PendingRelease {
        let Some(pending) = self.take_for(pointer_id) else {
            return PendingRelease::NotPending;
        };
        if now >= pending.deadline {
            return PendingRelease::Activated(activate(pending));
        }
        if now - pending.pressed_at < self.config.tap_max() {
            PendingRelease::Tap(TapKind::Tap)
        } else {
            PendingRelease::Tap(TapKind::ShortHold)
        }
    }

    /// Drops the pending press of `pointer_id` (scroll, touch-cancel).
    /// Returns whether anything was pending.
    pub fn interrupt(&mut self, pointer_id: PointerId) -> bool {
        self.take_for(pointer_id).is_some()
    }

    fn take_for(&mut self, pointer_id: PointerId) -> Option<PendingPress> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.pointer_id == pointer_id)
        {
            self.pending.take()
        } else {
            None
        }
    }
}

fn activate(pending: PendingPress) -> DragStart {
    DragStart {
        pointer_id: pending.pointer_id,
        item_id: pending.item_id,
        position: pending.position,
        modality: InputModality::Touch,
        pressed_at: pending.pressed_at,
    }
}

//! Input routing from raw press/move/release events to the drag services.

use super::{
    BeginDrag, BoardMutator, CancelReason, DragOutcome, DragSessionController, DragStart,
    GestureRecognizer, HitTester, IgnoredPress, PendingRelease, PressSignal, TapKind,
};
use crate::board::{
    config::{DragConfig, DragConfigError},
    domain::{
        ContainerId, DragPhase, DragSnapshot, InputModality, ItemId, Point, PointerId, PressEvent,
    },
    ports::{BoardStore, ContainerGeometry, Haptics, InputSurface, SessionObserver},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Collaborators supplied by the presentation and data layers.
pub struct DragCollaborators<G, S, I, O, H> {
    /// Live column geometry.
    pub geometry: Arc<G>,
    /// Item/column store.
    pub store: Arc<S>,
    /// Input surface for gesture-scoped listeners.
    pub surface: Arc<I>,
    /// Session and commit observer.
    pub observer: Arc<O>,
    /// Haptic feedback.
    pub haptics: Arc<H>,
}

/// Result of a press.
#[derive(Debug, Clone)]
pub enum PressOutcome {
    /// No session and no pending press.
    Ignored(IgnoredPress),
    /// A touch long press is pending until `deadline`.
    Pending {
        /// Activation time; call [`DragEngine::tick`] once it passes.
        deadline: DateTime<Utc>,
    },
    /// A drag session started.
    DragStarted(DragSnapshot),
    /// The pressing pointer already owned a gesture whose release was lost.
    /// That gesture was terminated and the new press ignored.
    Conflict(ReleaseOutcome),
}

/// Result of a release or cancellation.
#[derive(Debug, Clone)]
pub enum ReleaseOutcome {
    /// The pointer owned no gesture.
    Ignored,
    /// A pending press was released before activation.
    Tap(TapKind),
    /// A pending press was interrupted before activation.
    Abandoned,
    /// A drag session terminated.
    Finished(DragOutcome),
}

/// Drag-and-drop engine for the board.
///
/// Single-threaded and event-driven: every method runs to completion on the
/// caller's thread. The only deferred work is the touch long press, exposed
/// as [`DragEngine::pending_deadline`] and fired by [`DragEngine::tick`].
pub struct DragEngine<G, S, I, O, H, C>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
    H: Haptics,
    C: Clock,
{
    recognizer: GestureRecognizer,
    controller: DragSessionController<G, S, I, O>,
    haptics: Arc<H>,
    clock: Arc<C>,
}

impl<G, S, I, O, H, C> DragEngine<G, S, I, O, H, C>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
    H: Haptics,
    C: Clock,
{
    /// Creates an idle engine.
    ///
    /// # Errors
    ///
    /// Returns the [`DragConfig::validate`] error when the timing policy is
    /// inconsistent.
    pub fn new(
        collaborators: DragCollaborators<G, S, I, O, H>,
        clock: Arc<C>,
        config: DragConfig,
    ) -> Result<Self, DragConfigError> {
        config.validate()?;
        let DragCollaborators {
            geometry,
            store,
            surface,
            observer,
            haptics,
        } = collaborators;
        let controller = DragSessionController::new(
            HitTester::new(geometry),
            BoardMutator::new(store),
            surface,
            observer,
        );
        Ok(Self {
            recognizer: GestureRecognizer::new(config),
            controller,
            haptics,
            clock,
        })
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        if self.controller.is_active() {
            DragPhase::Dragging
        } else if self.recognizer.pending().is_some() {
            DragPhase::Pressed
        } else {
            DragPhase::Idle
        }
    }

    /// Returns a snapshot of the live session.
    #[must_use]
    pub fn snapshot(&self) -> Option<DragSnapshot> {
        self.controller.snapshot()
    }

    /// Returns when the pending long press activates, so the host can
    /// schedule a one-shot timer that calls [`DragEngine::tick`].
    #[must_use]
    pub fn pending_deadline(&self) -> Option<DateTime<Utc>> {
        self.recognizer.pending_deadline()
    }

    /// Handles a pointer-down or touch-start.
    ///
    /// Presses on cards the store does not know are ignored before any
    /// timer is armed, whatever the modality.
    pub fn press(&mut self, event: &PressEvent) -> PressOutcome {
        if let Some(active) = self.controller.active_for(event.pointer_id) {
            let outcome = active.cancel(CancelReason::ConflictingPress);
            return PressOutcome::Conflict(ReleaseOutcome::Finished(outcome));
        }
        if self.controller.is_active() {
            trace!(pointer_id = %event.pointer_id, "press ignored while dragging");
            return PressOutcome::Ignored(IgnoredPress::Busy);
        }
        if self.recognizer.interrupt(event.pointer_id) {
            debug!(pointer_id = %event.pointer_id, "stale long press dropped");
            return PressOutcome::Conflict(ReleaseOutcome::Abandoned);
        }
        if event.target.is_draggable()
            && let Err(reason) = self.resolve_origin(event.target.item_id())
        {
            return PressOutcome::Ignored(reason);
        }

        match self.recognizer.press(event, self.clock.utc()) {
            PressSignal::Ignored(reason) => {
                trace!(pointer_id = %event.pointer_id, reason = ?reason, "press ignored");
                PressOutcome::Ignored(reason)
            }
            PressSignal::Pending { deadline } => {
                debug!(
                    pointer_id = %event.pointer_id,
                    item_id = %event.target.item_id(),
                    "long press armed"
                );
                PressOutcome::Pending { deadline }
            }
            PressSignal::Start(start) => match self.start_drag(start) {
                Ok(snapshot) => PressOutcome::DragStarted(snapshot),
                Err(reason) => PressOutcome::Ignored(reason),
            },
        }
    }

    /// Fires the pending long press if its deadline has passed.
    ///
    /// Returns the new session's snapshot when a drag started.
    pub fn tick(&mut self) -> Option<DragSnapshot> {
        let start = self.recognizer.poll(self.clock.utc())?;
        self.start_drag(start).ok()
    }

    /// Handles pointer movement.
    ///
    /// Returns the updated snapshot while the pointer owns a session.
    pub fn pointer_moved(
        &mut self,
        pointer_id: PointerId,
        position: Point,
    ) -> Option<DragSnapshot> {
        if let Some(mut active) = self.controller.active_for(pointer_id) {
            return active.update(position);
        }
        self.recognizer.track(pointer_id, position);
        None
    }

    /// Handles pointer-up or touch-end.
    pub fn release(&mut self, pointer_id: PointerId) -> ReleaseOutcome {
        if let Some(active) = self.controller.active_for(pointer_id) {
            return ReleaseOutcome::Finished(active.end());
        }

        match self.recognizer.release(pointer_id, self.clock.utc()) {
            PendingRelease::NotPending => ReleaseOutcome::Ignored,
            PendingRelease::Tap(kind) => {
                trace!(pointer_id = %pointer_id, kind = ?kind, "press released before activation");
                ReleaseOutcome::Tap(kind)
            }
            PendingRelease::Activated(start) => {
                if self.start_drag(start).is_err() {
                    return ReleaseOutcome::Ignored;
                }
                self.controller
                    .active_for(pointer_id)
                    .map_or(ReleaseOutcome::Ignored, |active| {
                        ReleaseOutcome::Finished(active.end())
                    })
            }
        }
    }

    /// Handles touch-cancel, capture loss or a scroll takeover.
    pub fn cancel(&mut self, pointer_id: PointerId, reason: CancelReason) -> ReleaseOutcome {
        if let Some(active) = self.controller.active_for(pointer_id) {
            return ReleaseOutcome::Finished(active.cancel(reason));
        }
        if self.recognizer.interrupt(pointer_id) {
            debug!(pointer_id = %pointer_id, reason = ?reason, "long press interrupted");
            return ReleaseOutcome::Abandoned;
        }
        ReleaseOutcome::Ignored
    }

    fn resolve_origin(&self, item_id: &ItemId) -> Result<ContainerId, IgnoredPress> {
        match self.controller.mutator().current_container(item_id) {
            Ok(Some(origin)) => Ok(origin),
            Ok(None) => {
                debug!(item_id = %item_id, "press ignored, item not on board");
                Err(IgnoredPress::UnknownItem)
            }
            Err(err) => {
                warn!(item_id = %item_id, error = %err, "item lookup failed");
                Err(IgnoredPress::UnknownItem)
            }
        }
    }

    fn start_drag(&mut self, start: DragStart) -> Result<DragSnapshot, IgnoredPress> {
        let origin = self.resolve_origin(&start.item_id)?;

        let modality = start.modality;
        let snapshot = self
            .controller
            .begin(BeginDrag {
                pointer_id: start.pointer_id,
                item_id: start.item_id,
                origin_container_id: origin,
                position: start.position,
                modality,
                started_at: start.pressed_at,
            })
            .and_then(|active| active.snapshot())
            .ok_or(IgnoredPress::Busy)?;

        if modality == InputModality::Touch {
            self.pulse();
        }
        Ok(snapshot)
    }

    fn pulse(&self) {
        let duration = self.recognizer.config().haptic_pulse();
        if let Err(err) = self.haptics.pulse(duration) {
            trace!(error = %err, "haptic pulse skipped");
        }
    }
}

//! Ownership of the single drag session.
//!
//! Session-scoped operations (`update`, `end`, `cancel`) are reachable only
//! through an [`ActiveDrag`] handle, which exists only while a session is
//! live. `end` and `cancel` consume the handle, and both route through one
//! release point that detaches the gesture listeners.

use super::{BoardMutationError, BoardMutator, HitTester, MoveRecord};
use crate::board::{
    domain::{ContainerId, DragSession, DragSnapshot, InputModality, ItemId, Point, PointerId},
    ports::{BoardStore, ContainerGeometry, InputSurface, SessionObserver},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Why a session was terminated without a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The platform cancelled the touch sequence.
    TouchCancel,
    /// The element lost pointer capture.
    CaptureLost,
    /// A scroll took over the gesture.
    Scroll,
    /// The owning pointer pressed again before its release arrived.
    ConflictingPress,
}

/// How a session ended.
#[derive(Debug, Clone)]
pub enum DragOutcome {
    /// The item moved to another column.
    Committed(MoveRecord),
    /// Released without a move: over its origin column or over no column.
    Dropped {
        /// Column under the pointer at release.
        hovered: Option<ContainerId>,
    },
    /// The commit boundary refused the move.
    Rejected(BoardMutationError),
    /// Terminated without considering the hover state.
    Cancelled(CancelReason),
}

/// Parameters for beginning a session.
#[derive(Debug, Clone, PartialEq)]
pub struct BeginDrag {
    /// Pointer that owns the gesture.
    pub pointer_id: PointerId,
    /// Item to pick up.
    pub item_id: ItemId,
    /// Column the item is assigned to.
    pub origin_container_id: ContainerId,
    /// Pointer position at activation.
    pub position: Point,
    /// Modality of the gesture.
    pub modality: InputModality,
    /// When the press began.
    pub started_at: DateTime<Utc>,
}

/// Detaches gesture listeners when dropped.
struct ListenerGuard<I>
where
    I: InputSurface,
{
    surface: Arc<I>,
    pointer_id: PointerId,
}

impl<I> ListenerGuard<I>
where
    I: InputSurface,
{
    fn acquire(surface: Arc<I>, pointer_id: PointerId, modality: InputModality) -> Self {
        surface.attach(pointer_id, modality);
        Self {
            surface,
            pointer_id,
        }
    }
}

impl<I> Drop for ListenerGuard<I>
where
    I: InputSurface,
{
    fn drop(&mut self) {
        self.surface.detach(self.pointer_id);
    }
}

struct LiveSession<I>
where
    I: InputSurface,
{
    session: DragSession,
    pointer_id: PointerId,
    listeners: ListenerGuard<I>,
}

/// Owns the drag session and resolves its termination.
pub struct DragSessionController<G, S, I, O>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
{
    hit_tester: HitTester<G>,
    mutator: BoardMutator<S>,
    surface: Arc<I>,
    observer: Arc<O>,
    live: Option<LiveSession<I>>,
}

impl<G, S, I, O> DragSessionController<G, S, I, O>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
{
    /// Creates an idle controller.
    #[must_use]
    pub const fn new(
        hit_tester: HitTester<G>,
        mutator: BoardMutator<S>,
        surface: Arc<I>,
        observer: Arc<O>,
    ) -> Self {
        Self {
            hit_tester,
            mutator,
            surface,
            observer,
            live: None,
        }
    }

    /// Returns whether a session is live.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.live.is_some()
    }

    /// Returns the live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.live.as_ref().map(|live| &live.session)
    }

    /// Returns the pointer that owns the live session.
    #[must_use]
    pub fn owner(&self) -> Option<PointerId> {
        self.live.as_ref().map(|live| live.pointer_id)
    }

    /// Returns a snapshot of the live session.
    #[must_use]
    pub fn snapshot(&self) -> Option<DragSnapshot> {
        self.session().map(DragSession::snapshot)
    }

    /// Returns the commit boundary.
    #[must_use]
    pub const fn mutator(&self) -> &BoardMutator<S> {
        &self.mutator
    }

    /// Starts a session, registers its listeners and publishes it.
    ///
    /// Returns `None` without side effects when a session is already live.
    pub fn begin(&mut self, request: BeginDrag) -> Option<ActiveDrag<'_, G, S, I, O>> {
        if let Some(live) = &self.live {
            debug!(
                session_id = %live.session.id(),
                item_id = %request.item_id,
                "drag begin ignored, session already active"
            );
            return None;
        }

        let listeners = ListenerGuard::acquire(
            Arc::clone(&self.surface),
            request.pointer_id,
            request.modality,
        );
        let mut session = DragSession::start(
            request.item_id,
            request.origin_container_id,
            request.position,
            request.modality,
            request.started_at,
        );
        session.track(
            request.position,
            self.hit_tester.container_at(request.position),
        );
        debug!(
            session_id = %session.id(),
            item_id = %session.dragged_item_id(),
            container_id = %session.origin_container_id(),
            modality = %session.input_modality(),
            "drag session started"
        );

        self.live = Some(LiveSession {
            session,
            pointer_id: request.pointer_id,
            listeners,
        });
        self.publish();
        Some(ActiveDrag { controller: self })
    }

    /// Returns a handle to the live session.
    pub fn active(&mut self) -> Option<ActiveDrag<'_, G, S, I, O>> {
        if self.live.is_some() {
            Some(ActiveDrag { controller: self })
        } else {
            None
        }
    }

    /// Returns a handle to the live session when `pointer_id` owns it.
    pub fn active_for(&mut self, pointer_id: PointerId) -> Option<ActiveDrag<'_, G, S, I, O>> {
        if self.owner() == Some(pointer_id) {
            self.active()
        } else {
            None
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.observer.on_session_changed(snapshot.as_ref());
    }

    fn track(&mut self, position: Point) -> Option<DragSnapshot> {
        let hovered = self.hit_tester.container_at(position);
        let live = self.live.as_mut()?;
        if live.session.track(position, hovered) {
            trace!(
                session_id = %live.session.id(),
                hovered = ?live.session.hovered_container_id(),
                "hovered container changed"
            );
        }
        let snapshot = live.session.snapshot();
        self.observer.on_session_changed(Some(&snapshot));
        Some(snapshot)
    }

    /// The single release point: takes the session out and detaches its
    /// listeners. Returns `None` when nothing was live.
    fn release(&mut self) -> Option<DragSession> {
        let LiveSession {
            session, listeners, ..
        } = self.live.take()?;
        drop(listeners);
        Some(session)
    }

    fn finish(&mut self) -> Option<DragOutcome> {
        let session = self.release()?;
        let outcome = match session.destination() {
            None => DragOutcome::Dropped {
                hovered: session.hovered_container_id().cloned(),
            },
            Some(destination) => {
                match self
                    .mutator
                    .commit_move(session.dragged_item_id(), destination)
                {
                    Ok(record) => {
                        self.observer.on_commit(&record.item_id, &record.to);
                        DragOutcome::Committed(record)
                    }
                    Err(err) => {
                        warn!(
                            session_id = %session.id(),
                            item_id = %session.dragged_item_id(),
                            container_id = %destination,
                            error = %err,
                            "move commit rejected"
                        );
                        DragOutcome::Rejected(err)
                    }
                }
            }
        };
        debug!(session_id = %session.id(), outcome = ?outcome, "drag session ended");
        self.observer.on_session_changed(None);
        Some(outcome)
    }

    fn abort(&mut self, reason: CancelReason) -> Option<DragOutcome> {
        let session = self.release()?;
        debug!(session_id = %session.id(), reason = ?reason, "drag session cancelled");
        self.observer.on_session_changed(None);
        Some(DragOutcome::Cancelled(reason))
    }
}

/// Handle to the live session.
///
/// Obtained from [`DragSessionController::begin`] or
/// [`DragSessionController::active`]; termination consumes it.
pub struct ActiveDrag<'a, G, S, I, O>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
{
    controller: &'a mut DragSessionController<G, S, I, O>,
}

impl<G, S, I, O> ActiveDrag<'_, G, S, I, O>
where
    G: ContainerGeometry,
    S: BoardStore,
    I: InputSurface,
    O: SessionObserver,
{
    /// Returns a snapshot of the session.
    #[must_use]
    pub fn snapshot(&self) -> Option<DragSnapshot> {
        self.controller.snapshot()
    }

    /// Moves the pointer, re-runs the hit test and publishes the result.
    pub fn update(&mut self, position: Point) -> Option<DragSnapshot> {
        self.controller.track(position)
    }

    /// Drops the item: commits when the hovered column differs from the
    /// origin, then clears the session.
    ///
    /// Listeners are detached and the session is gone before this returns,
    /// whether or not a move was committed.
    pub fn end(self) -> DragOutcome {
        self.controller
            .finish()
            .unwrap_or(DragOutcome::Dropped { hovered: None })
    }

    /// Clears the session without committing, regardless of hover state.
    pub fn cancel(self, reason: CancelReason) -> DragOutcome {
        self.controller
            .abort(reason)
            .unwrap_or(DragOutcome::Cancelled(reason))
    }
}

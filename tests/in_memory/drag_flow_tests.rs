//! End-to-end drag flows against the in-memory board.

use super::helpers::{BoardRig, COMPLETED_CENTRE, IN_PROGRESS_CENTRE, TODO_CENTRE, board_rig};
use eyre::ensure;
use questboard::board::{
    adapters::memory::ObservedEvent,
    domain::{ContainerId, DragPhase, InputModality, ItemId, Point, PointerId, PressEvent},
    services::{DragOutcome, PressOutcome, ReleaseOutcome, TapKind},
};
use rstest::{fixture, rstest};
use std::time::Duration;

const FINGER: PointerId = PointerId::new(1);
const MOUSE: PointerId = PointerId::new(7);

#[fixture]
fn rig() -> BoardRig {
    board_rig().unwrap_or_else(|err| panic!("board setup: {err}"))
}

fn press_card(
    item: &str,
    pointer_id: PointerId,
    modality: InputModality,
    at: Point,
) -> PressEvent {
    let id = ItemId::new(item).unwrap_or_else(|err| panic!("item id: {err}"));
    PressEvent::on_card(pointer_id, modality, id, at)
}

#[rstest]
fn touch_long_press_moves_card_to_hovered_column(mut rig: BoardRig) -> eyre::Result<()> {
    let armed = rig
        .engine
        .press(&press_card("t1", FINGER, InputModality::Touch, TODO_CENTRE));
    ensure!(
        matches!(armed, PressOutcome::Pending { .. }),
        "expected pending press"
    );

    rig.wait(1_000);
    ensure!(
        rig.engine.phase() == DragPhase::Dragging,
        "long press did not activate"
    );

    rig.engine.pointer_moved(FINGER, IN_PROGRESS_CENTRE);
    let released = rig.engine.release(FINGER);

    let ReleaseOutcome::Finished(DragOutcome::Committed(record)) = released else {
        eyre::bail!("expected a committed move");
    };
    ensure!(record.item_id.as_str() == "t1", "wrong item committed");
    ensure!(record.from.as_str() == "todo", "wrong origin recorded");
    ensure!(
        record.to.as_str() == "in-progress",
        "wrong destination recorded"
    );

    ensure!(
        rig.column_of("t1")?.as_deref() == Some("in-progress"),
        "board not updated"
    );
    ensure!(
        rig.cards_in("todo")? == vec!["t2".to_owned()],
        "todo still holds t1"
    );
    ensure!(
        rig.cards_in("in-progress")? == vec!["t3".to_owned(), "t1".to_owned()],
        "moved card should append to its new column"
    );
    ensure!(
        rig.observer.commits().len() == 1,
        "commit reported more than once"
    );
    ensure!(
        rig.observer.last_session() == Some(None),
        "final session change must be null"
    );
    ensure!(
        rig.haptics.pulses() == vec![Duration::from_millis(50)],
        "missing haptic pulse"
    );
    ensure!(rig.surface.attached().is_empty(), "listeners left attached");
    Ok(())
}

#[rstest]
fn commit_is_reported_before_session_clears(mut rig: BoardRig) -> eyre::Result<()> {
    rig.engine
        .press(&press_card("t3", MOUSE, InputModality::Pointer, IN_PROGRESS_CENTRE));
    rig.engine.pointer_moved(MOUSE, COMPLETED_CENTRE);
    rig.engine.release(MOUSE);

    let events = rig.observer.events();
    let tail = events.iter().rev().take(2).collect::<Vec<_>>();
    ensure!(
        matches!(
            tail.as_slice(),
            [ObservedEvent::SessionChanged(None), ObservedEvent::Commit { .. }]
        ),
        "expected commit then session end, got {events:?}"
    );
    Ok(())
}

#[rstest]
fn mouse_drag_starts_without_hold_or_haptics(mut rig: BoardRig) -> eyre::Result<()> {
    let outcome = rig
        .engine
        .press(&press_card("t2", MOUSE, InputModality::Pointer, TODO_CENTRE));

    let PressOutcome::DragStarted(snapshot) = outcome else {
        eyre::bail!("mouse press should start a drag immediately");
    };
    ensure!(
        snapshot.origin_container_id.as_str() == "todo",
        "wrong origin"
    );
    ensure!(
        snapshot.hovered_container_id == Some(ContainerId::new("todo")?),
        "hover should be known from the first frame"
    );
    ensure!(rig.haptics.pulses().is_empty(), "pointer drags never pulse");
    ensure!(
        rig.surface.attach_calls() == 1,
        "listeners should attach once"
    );
    Ok(())
}

#[rstest]
#[case::same_column(TODO_CENTRE)]
#[case::gutter(Point::new(310.0, 300.0))]
#[case::off_board(Point::new(2_000.0, 300.0))]
fn release_outside_another_column_leaves_board_untouched(
    mut rig: BoardRig,
    #[case] drop_at: Point,
) -> eyre::Result<()> {
    rig.engine
        .press(&press_card("t1", MOUSE, InputModality::Pointer, TODO_CENTRE));
    rig.engine.pointer_moved(MOUSE, drop_at);
    let released = rig.engine.release(MOUSE);

    ensure!(
        matches!(released, ReleaseOutcome::Finished(DragOutcome::Dropped { .. })),
        "expected a drop without commit"
    );
    ensure!(
        rig.column_of("t1")?.as_deref() == Some("todo"),
        "card should stay put"
    );
    ensure!(rig.observer.commits().is_empty(), "nothing should commit");
    ensure!(
        rig.engine.phase() == DragPhase::Idle,
        "session should be gone"
    );
    Ok(())
}

#[rstest]
fn quick_touch_is_a_tap_and_never_drags(mut rig: BoardRig) -> eyre::Result<()> {
    rig.engine
        .press(&press_card("t1", FINGER, InputModality::Touch, TODO_CENTRE));
    rig.wait(120);
    let released = rig.engine.release(FINGER);

    ensure!(
        matches!(released, ReleaseOutcome::Tap(TapKind::Tap)),
        "expected a tap"
    );
    ensure!(
        rig.observer.session_changes().is_empty(),
        "tap must not open a session"
    );
    ensure!(
        rig.surface.attach_calls() == 0,
        "tap must not attach listeners"
    );
    Ok(())
}

#[rstest]
fn touch_finger_drifting_before_activation_still_drags_from_press(
    mut rig: BoardRig,
) -> eyre::Result<()> {
    rig.engine
        .press(&press_card("t1", FINGER, InputModality::Touch, TODO_CENTRE));
    rig.engine.pointer_moved(FINGER, Point::new(160.0, 320.0));
    rig.wait(999);
    ensure!(rig.engine.phase() == DragPhase::Pressed, "activated early");

    rig.wait(1);
    let snapshot = rig
        .engine
        .snapshot()
        .ok_or_else(|| eyre::eyre!("no session"))?;
    ensure!(
        snapshot.pointer_position == Point::new(160.0, 320.0),
        "last position lost"
    );
    Ok(())
}

#[rstest]
fn sequential_drags_each_commit_once(mut rig: BoardRig) -> eyre::Result<()> {
    for (item, from, to) in [
        ("t1", TODO_CENTRE, IN_PROGRESS_CENTRE),
        ("t1", IN_PROGRESS_CENTRE, COMPLETED_CENTRE),
        ("t2", TODO_CENTRE, COMPLETED_CENTRE),
    ] {
        rig.engine
            .press(&press_card(item, MOUSE, InputModality::Pointer, from));
        rig.engine.pointer_moved(MOUSE, to);
        rig.engine.release(MOUSE);
    }

    ensure!(rig.observer.commits().len() == 3, "expected three commits");
    ensure!(
        rig.cards_in("completed")? == vec!["t1".to_owned(), "t2".to_owned()],
        "completed column order"
    );
    ensure!(rig.cards_in("todo")?.is_empty(), "todo should be empty");
    ensure!(rig.surface.detach_calls() == 3, "each drag detaches once");
    Ok(())
}

#[rstest]
fn second_pointer_cannot_hijack_active_drag(mut rig: BoardRig) -> eyre::Result<()> {
    rig.engine
        .press(&press_card("t1", MOUSE, InputModality::Pointer, TODO_CENTRE));
    let intruder = rig
        .engine
        .press(&press_card("t2", FINGER, InputModality::Touch, TODO_CENTRE));
    ensure!(
        matches!(intruder, PressOutcome::Ignored(_)),
        "second press should be ignored"
    );

    rig.engine.pointer_moved(FINGER, COMPLETED_CENTRE);
    ensure!(
        matches!(rig.engine.release(FINGER), ReleaseOutcome::Ignored),
        "foreign release must not end the session"
    );
    ensure!(
        rig.engine.phase() == DragPhase::Dragging,
        "session should survive"
    );

    let snapshot = rig
        .engine
        .snapshot()
        .ok_or_else(|| eyre::eyre!("no session"))?;
    ensure!(
        snapshot.dragged_item_id.as_str() == "t1",
        "dragged item changed"
    );
    ensure!(
        snapshot.pointer_position == TODO_CENTRE,
        "foreign move leaked in"
    );
    Ok(())
}

//! Hit testing reads column bounds live, so layout changes mid-drag apply.

use super::helpers::{BoardRig, IN_PROGRESS_CENTRE, TODO_CENTRE, board_rig};
use eyre::ensure;
use questboard::board::{
    domain::{ContainerId, InputModality, ItemId, PointerId, PressEvent, Rect},
    services::{DragOutcome, ReleaseOutcome},
};

const MOUSE: PointerId = PointerId::new(3);

fn start_drag(rig: &mut BoardRig) -> eyre::Result<()> {
    let press = PressEvent::on_card(
        MOUSE,
        InputModality::Pointer,
        ItemId::new("t1")?,
        TODO_CENTRE,
    );
    rig.engine.press(&press);
    Ok(())
}

#[test]
fn column_moved_under_pointer_becomes_drop_target() -> eyre::Result<()> {
    let mut rig = board_rig()?;
    start_drag(&mut rig)?;
    rig.engine.pointer_moved(MOUSE, IN_PROGRESS_CENTRE);

    // Scroll the board so `completed` now sits where `in-progress` was.
    let shifted = [
        ("todo", Rect::from_origin_size(-320.0, 0.0, 300.0, 600.0)?),
        ("in-progress", Rect::from_origin_size(0.0, 0.0, 300.0, 600.0)?),
        ("completed", Rect::from_origin_size(320.0, 0.0, 300.0, 600.0)?),
    ];
    for (column, bounds) in shifted {
        rig.board
            .set_bounds(&ContainerId::new(column)?, Some(bounds))?;
    }
    let snapshot = rig
        .engine
        .pointer_moved(MOUSE, IN_PROGRESS_CENTRE)
        .ok_or_else(|| eyre::eyre!("session lost"))?;
    ensure!(
        snapshot.hovered_container_id == Some(ContainerId::new("completed")?),
        "hover should follow the live layout"
    );

    let released = rig.engine.release(MOUSE);
    ensure!(
        matches!(released, ReleaseOutcome::Finished(DragOutcome::Committed(_))),
        "expected commit into completed"
    );
    ensure!(
        rig.column_of("t1")?.as_deref() == Some("completed"),
        "wrong column"
    );
    Ok(())
}

#[test]
fn unmounted_column_is_never_hovered() -> eyre::Result<()> {
    let mut rig = board_rig()?;
    start_drag(&mut rig)?;
    rig.board
        .set_bounds(&ContainerId::new("in-progress")?, None)?;

    let snapshot = rig
        .engine
        .pointer_moved(MOUSE, IN_PROGRESS_CENTRE)
        .ok_or_else(|| eyre::eyre!("session lost"))?;
    ensure!(
        snapshot.hovered_container_id.is_none(),
        "unmounted column was hit"
    );

    let released = rig.engine.release(MOUSE);
    ensure!(
        matches!(released, ReleaseOutcome::Finished(DragOutcome::Dropped { hovered: None })),
        "expected a drop over nothing"
    );
    ensure!(rig.column_of("t1")?.as_deref() == Some("todo"), "card moved");
    Ok(())
}

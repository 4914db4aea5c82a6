//! When steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use chrono::TimeDelta;
use questboard::board::{
    domain::{InputModality, ItemId, PointerId, PressEvent},
    services::CancelReason,
};
use rstest_bdd_macros::when;

const FINGER: PointerId = PointerId::new(1);
const MOUSE: PointerId = PointerId::new(2);

fn active_pointer(world: &DragWorld) -> PointerId {
    world
        .engine
        .snapshot()
        .map_or(FINGER, |snapshot| match snapshot.input_modality {
            InputModality::Touch => FINGER,
            InputModality::Pointer => MOUSE,
        })
}

fn press(world: &mut DragWorld, event: &PressEvent) {
    world.last_press = Some(world.engine.press(event));
}

#[when(r#"a finger presses card "{item}" over column "{column}""#)]
fn finger_presses_card(
    world: &mut DragWorld,
    item: String,
    column: String,
) -> Result<(), eyre::Report> {
    let at = world.centre_of(&column)?;
    let event = PressEvent::on_card(FINGER, InputModality::Touch, ItemId::new(item)?, at);
    press(world, &event);
    Ok(())
}

#[when(r#"the mouse presses card "{item}" over column "{column}""#)]
fn mouse_presses_card(
    world: &mut DragWorld,
    item: String,
    column: String,
) -> Result<(), eyre::Report> {
    let at = world.centre_of(&column)?;
    let event = PressEvent::on_card(MOUSE, InputModality::Pointer, ItemId::new(item)?, at);
    press(world, &event);
    Ok(())
}

#[when(r#"the mouse presses a control on card "{item}" over column "{column}""#)]
fn mouse_presses_control(
    world: &mut DragWorld,
    item: String,
    column: String,
) -> Result<(), eyre::Report> {
    let at = world.centre_of(&column)?;
    let event = PressEvent::on_control(MOUSE, InputModality::Pointer, ItemId::new(item)?, at);
    press(world, &event);
    Ok(())
}

#[when("{ms:i64} ms pass")]
fn time_passes(world: &mut DragWorld, ms: i64) {
    world.clock.advance(TimeDelta::milliseconds(ms));
    world.engine.tick();
}

#[when(r#"the pointer moves over column "{column}""#)]
fn pointer_moves(world: &mut DragWorld, column: String) -> Result<(), eyre::Report> {
    let at = world.centre_of(&column)?;
    let pointer = active_pointer(world);
    world.engine.pointer_moved(pointer, at);
    Ok(())
}

#[when("the pointer is released")]
fn pointer_released(world: &mut DragWorld) {
    let pointer = active_pointer(world);
    world.last_release = Some(world.engine.release(pointer));
}

#[when("the gesture is cancelled")]
fn gesture_cancelled(world: &mut DragWorld) {
    let pointer = active_pointer(world);
    world.last_release = Some(world.engine.cancel(pointer, CancelReason::TouchCancel));
}

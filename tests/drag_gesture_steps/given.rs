//! Given steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use eyre::WrapErr;
use questboard::board::domain::{ContainerId, Item, ItemId, ItemPayload, Rect};
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{first}", "{second}" and "{third}""#)]
fn board_with_columns(
    world: &mut DragWorld,
    first: String,
    second: String,
    third: String,
) -> Result<(), eyre::Report> {
    for (column, left) in [(first, 0.0), (second, 320.0), (third, 640.0)] {
        let id = ContainerId::new(column)?;
        world
            .board
            .add_container(id.clone())
            .wrap_err("add column")?;
        world
            .board
            .set_bounds(&id, Some(Rect::from_origin_size(left, 0.0, 300.0, 600.0)?))
            .wrap_err("lay out column")?;
    }
    Ok(())
}

#[given(r#"card "{item}" is in column "{column}""#)]
fn card_in_column(world: &mut DragWorld, item: String, column: String) -> Result<(), eyre::Report> {
    let title = format!("Quest {item}");
    let card = Item::new(
        ItemId::new(item)?,
        ContainerId::new(column)?,
        ItemPayload::new(title)?,
    );
    world.board.insert_item(card).wrap_err("place card")?;
    Ok(())
}

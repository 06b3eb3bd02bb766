use crate::engine::helpers::position_by_name;
use crate::engine::output::Output;
use crate::world;

/// Move the first item in the current room named `query` into the
/// player's inventory.
pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    player: &mut world::Player,
    query: &str,
) {
    let Some(room) = world.room_mut(&player.current_room) else {
        out.event("No such item here.");
        return;
    };

    let Some(idx) = position_by_name(&room.items, query, |i| i.name.as_str()) else {
        out.event("No such item here.");
        return;
    };

    let item = room.items.remove(idx);
    log::debug!("{} picks up {} in {}", player.name, item.name, room.name);
    out.event(format!("You picked up {}.", item.name));
    player.inventory.push(item);
}

/// Consume a healing item from the inventory. Items without a heal amount
/// stay where they are.
pub fn handle_use(out: &mut Output, player: &mut world::Player, query: &str) {
    let Some(idx) = position_by_name(&player.inventory, query, |i| i.name.as_str()) else {
        out.event("You don't have that item.");
        return;
    };

    let heal = player.inventory[idx].heal;
    if heal == 0 {
        out.event("That item can't be used.");
        return;
    }

    let gained = player.heal(heal);
    let item = player.inventory.remove(idx);
    log::debug!("{} uses {} (+{} HP)", player.name, item.name, gained);

    out.event(format!(
        "You heal for {} HP. Health: {}",
        gained,
        player.health()
    ));
}

pub fn handle_inventory(out: &mut Output, player: &world::Player) {
    if player.inventory.is_empty() {
        out.event("Your inventory is empty.");
        return;
    }
    out.list("Inventory", player.inventory.iter().map(|i| i.to_string()));
}

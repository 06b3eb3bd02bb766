use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world;

/// Move the player through the exit named `direction`, describing the new
/// room on arrival. Unknown directions leave the player where they are.
pub fn handle_move(
    out: &mut Output,
    world: &world::World,
    player: &mut world::Player,
    direction: &str,
) {
    let Some(target) = world
        .room(&player.current_room)
        .and_then(|room| room.exit(direction))
        .and_then(|exit| world.room(&exit.target))
    else {
        out.event("You can't go that way.");
        return;
    };

    log::debug!(
        "{} moves {} from {} to {}",
        player.name,
        direction,
        player.current_room,
        target.name
    );
    player.current_room = target.name.clone();

    out.event(format!("You move {} into {}.", direction, target.name));
    render_room(out, target);
}

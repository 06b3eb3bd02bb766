use crate::engine::output::Output;
use crate::world;

/// Describe a room: title, description, then items, living enemies and
/// exits. Empty sections are left out.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.desc.trim());

    out.list("Items here", room.items.iter().map(|i| i.name.clone()));
    out.list("Enemies here", room.alive_enemies().map(|e| e.to_string()));
    out.list("Exits", room.exits.iter().map(|e| e.direction.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Enemy, Item, Room};

    #[test]
    fn lists_every_section() {
        let mut room = Room::new("Hall", "A long corridor with flickering torches.");
        room.add_item(Item::new("Torch", "Still lit.", 0));
        room.add_enemy(Enemy::new("Goblin", 40, 8));
        room.connect("Entrance", "south");
        room.connect("Lair", "north");

        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(
            out.to_string(),
            "\n== Hall ==\nA long corridor with flickering torches.\n\
             \nItems here:\n - Torch\n\
             \nEnemies here:\n - Goblin (HP: 40, DMG: 8, alive)\n\
             \nExits:\n - south\n - north\n"
        );
    }

    #[test]
    fn omits_empty_sections_and_defeated_enemies() {
        let mut room = Room::new("Lair", "The final room.");
        room.add_enemy(Enemy::new("Dragon Whelp", 80, 15));
        room.enemies[0].take_damage(80);

        let mut out = Output::new();
        render_room(&mut out, &room);
        assert_eq!(out.to_string(), "\n== Lair ==\nThe final room.\n");
    }
}

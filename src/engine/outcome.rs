use crate::engine::output::Output;
use crate::world;

/// Where a session stands after the latest command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
    Quit,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Playing
    }
}

/// Check for defeat first, then victory: standing in the final room once
/// nothing there is left alive.
pub fn evaluate_outcome(out: &mut Output, world: &world::World, player: &world::Player) -> Status {
    if !player.is_alive() {
        out.event("You have fallen in the dungeon. Game over.");
        return Status::Lost;
    }

    // Identified by name, not by a flag on the room.
    let cleared = world
        .room(&player.current_room)
        .is_some_and(|room| room.name == world.final_room && !room.has_alive_enemies());

    if cleared {
        out.event("You have defeated the dungeon's final guardian. You win!");
        return Status::Won;
    }

    Status::Playing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Enemy, Player, Room, World};

    fn world(lair_enemy_health: u32) -> World {
        let hall = Room::new("Hall", "");
        let mut lair = Room::new("Lair", "");
        lair.add_enemy(Enemy::new("Dragon Whelp", lair_enemy_health, 15));
        World {
            name: "Test".into(),
            start_room: "Hall".into(),
            final_room: "Lair".into(),
            rooms: [hall, lair].into_iter().map(|r| (r.name.clone(), r)).collect(),
        }
    }

    #[test]
    fn keeps_playing_elsewhere() {
        let world = world(0);
        let player = Player::new("Hero", "Hall");
        let mut out = Output::new();
        assert_eq!(evaluate_outcome(&mut out, &world, &player), Status::Playing);
        assert!(out.is_empty());
    }

    #[test]
    fn guarded_final_room_is_not_a_win() {
        let world = world(80);
        let player = Player::new("Hero", "Lair");
        assert_eq!(evaluate_outcome(&mut Output::new(), &world, &player), Status::Playing);
    }

    #[test]
    fn cleared_final_room_wins() {
        let world = world(0);
        let player = Player::new("Hero", "Lair");
        let mut out = Output::new();
        assert_eq!(evaluate_outcome(&mut out, &world, &player), Status::Won);
        assert_eq!(
            out.to_string(),
            "\nYou have defeated the dungeon's final guardian. You win!\n"
        );
    }

    #[test]
    fn loss_takes_precedence_over_win() {
        let world = world(0);
        let mut player = Player::new("Hero", "Lair");
        player.take_damage(100);
        let mut out = Output::new();
        assert_eq!(evaluate_outcome(&mut out, &world, &player), Status::Lost);
        assert_eq!(out.to_string(), "\nYou have fallen in the dungeon. Game over.\n");
        assert!(Status::Lost.is_over());
    }
}

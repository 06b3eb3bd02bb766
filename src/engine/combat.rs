use crate::engine::helpers::names_match;
use crate::engine::output::Output;
use crate::engine::roll::{ATTACK_MAX, ATTACK_MIN, DamageRoll};
use crate::world;

/// Strike the first living enemy named `query` in the current room.
///
/// A surviving enemy hits back with its fixed damage; a defeating blow
/// ends the exchange.
pub fn handle_attack(
    out: &mut Output,
    world: &mut world::World,
    player: &mut world::Player,
    roller: &mut dyn DamageRoll,
    query: &str,
) {
    let target = world.room_mut(&player.current_room).and_then(|room| {
        room.enemies
            .iter_mut()
            .find(|e| e.is_alive() && names_match(&e.name, query))
    });

    let Some(enemy) = target else {
        out.event("No such enemy here.");
        return;
    };

    let damage = roller.roll(ATTACK_MIN, ATTACK_MAX);
    out.event(format!("You attack {} for {} damage!", enemy.name, damage));
    enemy.take_damage(damage);
    log::debug!(
        "{} hits {} for {} ({} HP left)",
        player.name,
        enemy.name,
        damage,
        enemy.health()
    );

    if !enemy.is_alive() {
        out.say(format!("{} is defeated!", enemy.name));
        return;
    }

    out.say(format!(
        "{} strikes back for {} damage!",
        enemy.name, enemy.damage
    ));
    let counter = enemy.damage;
    handle_player_damage(out, player, counter);
}

pub fn handle_player_damage(out: &mut Output, player: &mut world::Player, amount: u32) {
    let health = player.take_damage(amount);
    out.event(format!("You take {} damage! Health: {}", amount, health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::roll::FixedRoll;
    use crate::world::{Enemy, Player, Room, World};

    fn arena() -> (World, Player) {
        let mut pit = Room::new("Pit", "");
        pit.add_enemy(Enemy::new("Goblin", 40, 8));
        let world = World {
            name: "Test".into(),
            start_room: "Pit".into(),
            final_room: "Pit".into(),
            rooms: [(pit.name.clone(), pit)].into_iter().collect(),
        };
        (world, Player::new("Hero", "Pit"))
    }

    fn goblin_health(world: &World) -> u32 {
        world.rooms["Pit"].enemies[0].health()
    }

    #[test]
    fn surviving_enemy_counterattacks() {
        let (mut world, mut player) = arena();
        let mut out = Output::new();

        handle_attack(&mut out, &mut world, &mut player, &mut FixedRoll(25), "goblin");

        assert_eq!(goblin_health(&world), 15);
        assert_eq!(player.health(), 92);
        assert_eq!(
            out.to_string(),
            "\nYou attack Goblin for 25 damage!\nGoblin strikes back for 8 damage!\n\
             \nYou take 8 damage! Health: 92\n"
        );
    }

    #[test]
    fn defeating_blow_gets_no_counterattack() {
        let (mut world, mut player) = arena();
        let mut roll = FixedRoll(25);

        handle_attack(&mut Output::new(), &mut world, &mut player, &mut roll, "goblin");
        let mut out = Output::new();
        handle_attack(&mut out, &mut world, &mut player, &mut roll, "GOBLIN");

        assert_eq!(goblin_health(&world), 0);
        assert_eq!(player.health(), 92);
        assert_eq!(
            out.to_string(),
            "\nYou attack Goblin for 25 damage!\nGoblin is defeated!\n"
        );
    }

    #[test]
    fn defeated_enemies_cannot_be_targeted() {
        let (mut world, mut player) = arena();
        world.rooms.get_mut("Pit").unwrap().enemies[0].take_damage(40);
        let mut out = Output::new();

        handle_attack(&mut out, &mut world, &mut player, &mut FixedRoll(10), "goblin");

        assert_eq!(out.to_string(), "\nNo such enemy here.\n");
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn unknown_enemy_changes_no_health() {
        let (mut world, mut player) = arena();
        let mut out = Output::new();

        handle_attack(&mut out, &mut world, &mut player, &mut FixedRoll(25), "dragon");

        assert_eq!(out.to_string(), "\nNo such enemy here.\n");
        assert_eq!(goblin_health(&world), 40);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn damage_stays_within_attack_bounds() {
        for fixed in [0, ATTACK_MIN, 17, ATTACK_MAX, 1000] {
            let (mut world, mut player) = arena();
            let mut roll = FixedRoll(fixed);
            handle_attack(&mut Output::new(), &mut world, &mut player, &mut roll, "goblin");
            let dealt = 40 - goblin_health(&world);
            assert!((ATTACK_MIN..=ATTACK_MAX).contains(&dealt), "dealt {dealt}");
        }
    }
}

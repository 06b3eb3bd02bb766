use serde::Deserialize;
use std::collections::HashMap;

use super::error::WorldError;
use super::model::{Enemy, Item, Player, Room, World};
use super::validator::{ValidationError, validate_world};

/// The built-in dungeon layout.
pub const DUNGEON: &str = include_str!("../../assets/dungeon.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    player: PlayerConfig,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
    final_room: String,
}

#[derive(Deserialize)]
struct PlayerConfig {
    name: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
    #[serde(default)]
    enemy: Vec<EnemyConfig>, // [[room.enemy]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    heal: u32,
}

#[derive(Deserialize)]
struct EnemyConfig {
    name: String,
    health: u32,
    damage: u32,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Build the built-in dungeon and its player.
pub fn build_dungeon() -> Result<(World, Player), WorldError> {
    load_world_from_str(DUNGEON)
}

/// Public API: load a world and its player from a TOML string.
pub fn load_world_from_str(contents: &str) -> Result<(World, Player), WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let mut problems: Vec<ValidationError> = Vec::new();
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.name) {
            problems.push(ValidationError::new(format!(
                "duplicate room name '{}'",
                room_cfg.name
            )));
            continue;
        }

        let mut room = Room::new(room_cfg.name, normalize_multiline_desc(&room_cfg.desc));

        for e in room_cfg.exit {
            room.connect(e.target, e.direction);
        }
        for i in room_cfg.item {
            room.add_item(Item::new(i.name, normalize_multiline_desc(&i.desc), i.heal));
        }
        for e in room_cfg.enemy {
            room.add_enemy(Enemy::new(e.name, e.health, e.damage));
        }

        rooms_map.insert(room.name.clone(), room);
    }

    let world = World {
        name: world_file.world.name,
        start_room: world_file.world.start_room,
        final_room: world_file.world.final_room,
        rooms: rooms_map,
    };

    problems.extend(validate_world(&world));
    if !problems.is_empty() {
        return Err(WorldError::Invalid(problems));
    }

    log::info!(
        "Loaded world '{}' with {} rooms (start: {}, final: {})",
        world.name,
        world.rooms.len(),
        world.start_room,
        world.final_room
    );

    let player = Player::new(world_file.player.name, world.start_room.clone());
    Ok((world, player))
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation in TOML never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            if pending_blank_lines == 0 {
                // Wrapped line
                result.push(' ');
            } else {
                result.push('\n');
            }
        }
        result.push_str(trimmed);

        pending_blank_lines = 0;
    }

    result
}

use std::collections::HashMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Upper bound for player health.
pub const MAX_HEALTH: u32 = 100;

/// Runtime world type used by the game loop.
pub struct World {
    pub name: String,
    pub start_room: String,
    /// Name of the room that ends the session once it holds no living enemies.
    pub final_room: String,
    pub rooms: HashMap<String, Room>,
}

impl World {
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub heal: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, heal: u32) -> Self {
        Item {
            name: name.into(),
            desc: desc.into(),
            heal,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.desc)
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    health: u32,
    pub damage: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: u32, damage: u32) -> Self {
        Enemy {
            name: name.into(),
            health,
            damage,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health floors at zero and never recovers.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_alive() { "alive" } else { "defeated" };
        write!(
            f,
            "{} (HP: {}, DMG: {}, {})",
            self.name, self.health, self.damage, status
        )
    }
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
}

impl Room {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
            items: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Link `direction` to the room named `target`.
    ///
    /// Reconnecting an existing direction replaces its target but keeps
    /// the exit's original position in the listing. The reverse edge is
    /// never added automatically.
    pub fn connect(&mut self, target: impl Into<String>, direction: impl Into<String>) {
        let target = target.into();
        let direction = direction.into();

        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn alive_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    pub fn has_alive_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }
}

pub struct Player {
    pub name: String,
    health: u32,
    pub inventory: Vec<Item>,
    pub current_room: String,
}

impl Player {
    pub fn new(name: impl Into<String>, start_room: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            health: MAX_HEALTH,
            inventory: Vec::new(),
            current_room: start_room.into(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Returns how much health was actually restored after clamping.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let old = self.health;
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        self.health - old
    }
}

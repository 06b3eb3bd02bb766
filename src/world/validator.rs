use std::fmt;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // The win check compares against this name literally.
    if !world.rooms.contains_key(&world.final_room) {
        errors.push(ValidationError::new(format!(
            "final_room '{}' not found among rooms",
            world.final_room
        )));
    }

    // Sorted so problems are reported in a stable order.
    let mut names: Vec<&String> = world.rooms.keys().collect();
    names.sort();

    for name in names {
        let room = &world.rooms[name];

        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    name
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    name, exit.direction, exit.target
                )));
            }
        }

        if room.items.iter().any(|i| i.name.trim().is_empty()) {
            errors.push(ValidationError::new(format!(
                "room '{}' has an item with an empty name",
                name
            )));
        }

        if room.enemies.iter().any(|e| e.name.trim().is_empty()) {
            errors.push(ValidationError::new(format!(
                "room '{}' has an enemy with an empty name",
                name
            )));
        }
    }

    errors
}

mod error;
mod loader;
mod model;
mod validator;

pub use error::WorldError;
pub use loader::{DUNGEON, build_dungeon, load_world_from_str};

pub use model::{Enemy, Exit, Item, MAX_HEALTH, Player, Room, World};
pub use validator::{ValidationError, validate_world};

mod combat;
mod command;
mod helpers;
mod items;
mod movement;
mod outcome;
mod output;
mod render;
mod roll;

pub use combat::{handle_attack, handle_player_damage};
pub use command::{Command, parse_command};
pub use items::{handle_inventory, handle_take, handle_use};
pub use movement::handle_move;
pub use outcome::{Status, evaluate_outcome};
pub use output::{Output, OutputBlock};
pub use render::render_room;
pub use roll::{ATTACK_MAX, ATTACK_MIN, DamageRoll, FixedRoll, RandomRoll};

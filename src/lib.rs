pub mod engine;
pub mod world;

use engine::{
    Command, DamageRoll, Output, RandomRoll, Status, evaluate_outcome, handle_attack,
    handle_inventory, handle_move, handle_take, handle_use, parse_command, render_room,
};
use world::{Player, World};

pub use world::{WorldError, build_dungeon, load_world_from_str};

const HELP: &[&str] = &[
    "  look                 - describe the current room",
    "  go <direction>       - move north/south/east/west",
    "  take <item>          - pick up an item",
    "  use <item>           - use an item from inventory",
    "  attack <enemy>       - attack an enemy in the room",
    "  inv                  - show inventory",
    "  stats                - show your health",
    "  help                 - show this help",
    "  quit                 - exit the game",
];

/// Everything a running session owns: the world, its player, and the
/// source of attack damage.
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub status: Status,
    roller: Box<dyn DamageRoll>,
}

impl GameState {
    pub fn new(world: World, player: Player) -> Self {
        Self::with_roller(world, player, Box::new(RandomRoll::from_os_rng()))
    }

    pub fn with_roller(world: World, player: Player, roller: Box<dyn DamageRoll>) -> Self {
        GameState {
            world,
            player,
            status: Status::Playing,
            roller,
        }
    }

    /// Welcome banner, starting room and command list, followed by the
    /// first outcome check.
    pub fn initialize(&mut self) -> Output {
        let mut out = Output::new();
        out.say(format!("Welcome to {}!", self.world.name));
        self.describe_current_room(&mut out);
        print_help(&mut out);
        self.check_outcome(&mut out);
        out
    }

    /// Process a single player input; returns (output, session over?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();
        if self.status.is_over() {
            return (out, true);
        }

        let Some(cmd) = parse_command(input) else {
            return (out, false);
        };

        match cmd {
            Command::Quit => {
                out.event("Goodbye.");
                self.status = Status::Quit;
                return (out, true);
            }
            Command::Help => print_help(&mut out),
            Command::Look => self.describe_current_room(&mut out),
            Command::Stats => out.event(format!("Health: {}", self.player.health())),
            Command::Inventory => handle_inventory(&mut out, &self.player),
            Command::Go(direction) => {
                handle_move(&mut out, &self.world, &mut self.player, &direction)
            }
            Command::Take(name) => handle_take(&mut out, &mut self.world, &mut self.player, &name),
            Command::Use(name) => handle_use(&mut out, &mut self.player, &name),
            Command::Attack(name) => handle_attack(
                &mut out,
                &mut self.world,
                &mut self.player,
                self.roller.as_mut(),
                &name,
            ),
            Command::Unknown => {
                out.event("I don't understand that command. Type 'help' for options.")
            }
        }

        self.check_outcome(&mut out);
        (out, self.status.is_over())
    }

    /// Input ran out before the session ended.
    pub fn end_of_input(&mut self) -> Output {
        let mut out = Output::new();
        if !self.status.is_over() {
            out.event("Goodbye.");
            self.status = Status::Quit;
        }
        out
    }

    fn check_outcome(&mut self, out: &mut Output) {
        self.status = evaluate_outcome(out, &self.world, &self.player);
        if self.status.is_over() {
            log::info!(
                "Session ended: {:?} in {} with {} HP",
                self.status,
                self.player.current_room,
                self.player.health()
            );
        }
    }

    fn describe_current_room(&self, out: &mut Output) {
        if let Some(room) = self.world.room(&self.player.current_room) {
            render_room(out, room);
        }
    }
}

fn print_help(out: &mut Output) {
    out.event("Commands:");
    for line in HELP {
        out.say(*line);
    }
    out.blank_line();
}

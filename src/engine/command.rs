/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Go(String),
    Take(String),
    Use(String),
    Attack(String),
    Inventory,
    Stats,
    Help,
    Quit,
    /// Unrecognized verb, or a verb missing its argument.
    Unknown,
}

/// Parse a raw input line. Returns `None` for blank input.
///
/// Input is trimmed and lowercased; argument words are joined with single
/// spaces. Verbs without arguments ignore anything after them.
pub fn parse_command(input: &str) -> Option<Command> {
    let lower = input.trim().to_lowercase();
    let mut parts = lower.split_whitespace();
    let verb = parts.next()?;
    let rest = parts.collect::<Vec<&str>>().join(" ");

    let with_arg = |make: fn(String) -> Command| {
        if rest.is_empty() {
            Command::Unknown
        } else {
            make(rest.clone())
        }
    };

    let cmd = match verb {
        "look" => Command::Look,
        "go" => with_arg(Command::Go),
        "take" => with_arg(Command::Take),
        "use" => with_arg(Command::Use),
        "attack" => with_arg(Command::Attack),
        "inv" => Command::Inventory,
        "stats" => Command::Stats,
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Unknown,
    };
    Some(cmd)
}

use std::io::{self, BufRead, Write};

use dungeon_explorer::{GameState, build_dungeon};

fn flush_output(out: &dungeon_explorer::engine::Output) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", out)?;
    stdout.flush()
}

/// Read one line of input, decoding invalid UTF-8 lossily so a garbled
/// line still reaches the parser. Returns `None` at end of input.
fn read_command(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn main() -> io::Result<()> {
    // Logs go to stderr so they never mix with game text.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (world, player) = match build_dungeon() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Failed to build the dungeon: {e}");
            std::process::exit(1);
        }
    };

    let mut game = GameState::new(world, player);
    let intro = game.initialize();
    flush_output(&intro)?;

    let mut stdin = io::stdin().lock();

    while !game.status.is_over() {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = read_command(&mut stdin)? else {
            let out = game.end_of_input();
            println!();
            flush_output(&out)?;
            break;
        };

        let (out, over) = game.step(&line);
        flush_output(&out)?;
        if over {
            break;
        }
    }

    Ok(())
}

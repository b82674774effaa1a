use std::io::BufRead;

use snake_engine::{Direction, log};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Turn(Direction),
    Quit,
}

/// Accepts direction names, WASD, arrow key codes (37-40) and `q`/`quit`.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Some(ConsoleCommand::Quit);
    }
    if let Ok(key_code) = trimmed.parse::<u32>() {
        return Direction::from_key_code(key_code).map(ConsoleCommand::Turn);
    }
    trimmed.parse::<Direction>().ok().map(ConsoleCommand::Turn)
}

/// Forwards parsed commands until the reader is exhausted or the game stops listening.
///
/// Runs on a plain thread: a blocking stdin read cannot be cancelled, and keeping it
/// off the runtime lets the process exit while the read is still pending.
pub fn read_commands(reader: impl BufRead, commands: UnboundedSender<ConsoleCommand>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Some(command) => {
                if commands.send(command).is_err() {
                    break;
                }
            }
            None if !line.trim().is_empty() => log!("Ignoring input '{}'", line.trim()),
            None => {}
        }
    }
}

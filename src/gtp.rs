//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go programs. This
//! module implements the board-keeping subset of GTP version 2 on top of
//! [`Game`], so the rules engine can be driven from a terminal or a GUI
//! such as Sabaki or GoGui. There is no move generation.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Play a move for the color to move
//! - `showboard` - Print the board
//! - `captures <color>` - Number of stones captured by a color
//!
//! ## Example
//!
//! ```
//! use goban::gtp::GtpEngine;
//!
//! let mut engine = GtpEngine::new(9);
//! let mut out = Vec::new();
//! engine.run("play black E5\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("= \n"));
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::board::Stone;
use crate::constants::{ENGINE_NAME, GTP_PROTOCOL_VERSION, MAX_SIZE};
use crate::coord::parse_coord;
use crate::game::Game;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP session state: one game, fed one command at a time.
pub struct GtpEngine {
    game: Game,
}

impl GtpEngine {
    /// Create an engine holding an empty `size`x`size` game.
    pub fn new(size: usize) -> Self {
        Self {
            game: Game::new(size),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!(size = self.game.size(), "GTP session started");
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!(%command, success, "GTP command");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        info!("GTP session ended");
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, GTP_PROTOCOL_VERSION.to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (1..=MAX_SIZE).contains(&size) => {
                        self.game = Game::new(size);
                        (true, String::new())
                    }
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.game.current_player() {
                    return (false, format!("not {color}'s turn"));
                }
                if vertex.eq_ignore_ascii_case("pass") {
                    return (false, "pass is not supported".to_string());
                }
                let pt = match parse_coord(vertex, self.game.size()) {
                    Ok(pt) => pt,
                    Err(e) => return (false, format!("invalid vertex: {e}")),
                };
                match self.game.try_play(pt) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board()).trim_end().to_string()),

            "captures" => match args.first().map(|c| parse_color(c)) {
                Some(Some(color)) => (true, self.game.captures(color).to_string()),
                Some(None) => (false, "invalid color".to_string()),
                None => (false, "missing argument".to_string()),
            },

            _ => (false, "unknown command".to_string()),
        }
    }
}

/// Parse a GTP color (`black`, `b`, `white`, `w`, any case).
fn parse_color(s: &str) -> Option<Stone> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Stone::Black),
        "w" | "white" => Some(Stone::White),
        _ => None,
    }
}

//! Text protocol driver for the game engine
//!
//! Implements the line-oriented protocol the competition engine speaks
//! over stdin/stdout. Settings arrive once at game start, the full
//! board state arrives before every move request, and the bot answers
//! each request with a single `place_move` line.
//!
//! Recognized commands:
//! - `settings your_botid <1|2>` picks the side the bot plays
//! - `update game round <n>` and `update game move <n>` track progress
//! - `update game field <81 csv ints>` replaces the cell grid
//! - `update game macroboard <9 csv ints>` replaces statuses and
//!   active boards
//! - `action move <time_ms>` asks for a move
//!
//! Unrecognized commands and setting keys are logged and skipped.
//! Malformed payloads surface as errors, since a desynced board state
//! is worse than a dead bot.
//!
//! # Example
//!
//! ```
//! use uttt::engine::BotConfig;
//! use uttt::protocol::Session;
//!
//! let mut session = Session::new(BotConfig {
//!     depth: 2,
//!     seed: Some(7),
//! });
//!
//! session.handle_line("settings your_botid 1").unwrap();
//!
//! let field = ["0"; 81].join(",");
//! session.handle_line(&format!("update game field {}", field)).unwrap();
//! let macroboard = ["-1"; 9].join(",");
//! session.handle_line(&format!("update game macroboard {}", macroboard)).unwrap();
//!
//! let reply = session.handle_line("action move 10000").unwrap();
//! assert!(reply.unwrap().starts_with("place_move "));
//! ```

use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::board::{Board, Player};
use crate::engine::{Bot, BotConfig};
use crate::error::{ProtocolError, ProtocolResult};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `settings <key> <value>`
    Settings { key: &'a str, value: &'a str },
    /// `update game <key> <value>`
    Update { key: &'a str, value: &'a str },
    /// `action move <time_ms>`
    Action { time_ms: u64 },
}

impl<'a> Command<'a> {
    /// Parse a single input line.
    ///
    /// Lines that fit no known shape come back as
    /// [`ProtocolError::UnknownCommand`] so the caller can decide
    /// whether to skip or abort.
    pub fn parse(line: &'a str) -> ProtocolResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            &["settings", key, value] => Ok(Command::Settings { key, value }),
            &["update", "game", key, value] => Ok(Command::Update { key, value }),
            &["action", "move", time] => Ok(Command::Action {
                time_ms: parse_int(time)?,
            }),
            _ => Err(ProtocolError::UnknownCommand {
                line: line.to_string(),
            }),
        }
    }
}

/// Protocol session holding the board and the bot between lines.
///
/// The engine resends the complete board before every move request,
/// so the session never applies its own moves locally; it only mirrors
/// what the engine last told it.
pub struct Session {
    board: Board,
    bot: Option<Bot>,
    config: BotConfig,
    round: u32,
    move_number: u32,
}

impl Session {
    /// Create a session; the bot itself is built once
    /// `settings your_botid` arrives.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self {
            board: Board::new(),
            bot: None,
            config,
            round: 0,
            move_number: 0,
        }
    }

    /// Handle one input line and return the reply to write, if any.
    ///
    /// Unknown commands are logged and skipped. Malformed payloads
    /// return an error and should terminate the session.
    pub fn handle_line(&mut self, line: &str) -> ProtocolResult<Option<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(ProtocolError::UnknownCommand { line: raw }) => {
                warn!("skipping unknown command: '{}'", raw);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match command {
            Command::Settings { key, value } => self.apply_setting(key, value).map(|()| None),
            Command::Update { key, value } => self.apply_update(key, value).map(|()| None),
            Command::Action { time_ms } => {
                debug!("move requested with {}ms in the bank", time_ms);
                self.act()
            }
        }
    }

    /// Mirrored board state
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Round counter from the last `update game round`
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Move counter from the last `update game move`
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    fn apply_setting(&mut self, key: &str, value: &str) -> ProtocolResult<()> {
        match key {
            "your_botid" => {
                let id: i8 = parse_int(value)?;
                let player =
                    Player::from_id(id).ok_or(ProtocolError::InvalidPlayer { value: id })?;
                info!("playing as player {}", id);
                self.bot = Some(Bot::with_config(player, self.config));
                Ok(())
            }
            _ => {
                debug!("ignoring setting {} = {}", key, value);
                Ok(())
            }
        }
    }

    fn apply_update(&mut self, key: &str, value: &str) -> ProtocolResult<()> {
        match key {
            "round" => {
                self.round = parse_int(value)?;
                Ok(())
            }
            "move" => {
                self.move_number = parse_int(value)?;
                Ok(())
            }
            "field" => self.board.load_field(&parse_csv(value)?),
            "macroboard" => self.board.load_macroboard(&parse_csv(value)?),
            _ => {
                debug!("ignoring update {} = {}", key, value);
                Ok(())
            }
        }
    }

    /// Ask the bot for a move and format the reply.
    ///
    /// A finished position produces no reply; the engine ends the game
    /// on its own and an invented move would be rejected anyway.
    fn act(&mut self) -> ProtocolResult<Option<String>> {
        let bot = self.bot.as_mut().ok_or(ProtocolError::MissingBotId)?;
        match bot.make_turn(&self.board) {
            Some(mv) => Ok(Some(format!("place_move {} {}", mv.col, mv.row))),
            None => {
                warn!("move requested in a finished position");
                Ok(None)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

/// Parse one integer token.
fn parse_int<T: FromStr>(token: &str) -> ProtocolResult<T> {
    token.parse().map_err(|_| ProtocolError::MalformedInt {
        token: token.to_string(),
    })
}

/// Parse a comma-separated payload; the engine occasionally separates
/// with semicolons instead.
fn parse_csv(payload: &str) -> ProtocolResult<Vec<i8>> {
    payload
        .split(|c| c == ',' || c == ';')
        .map(|token| {
            token.trim().parse::<i8>().map_err(|_| ProtocolError::MalformedInt {
                token: token.trim().to_string(),
            })
        })
        .collect()
}

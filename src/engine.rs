//! Bot facade tying board, evaluation and search together
//!
//! This module provides the decision-making bot for one side of the
//! game. It owns a [`Searcher`] and a configured depth, and turns a
//! board position into a move.
//!
//! # Example
//!
//! ```
//! use uttt::board::{Board, Player};
//! use uttt::engine::{Bot, BotConfig};
//!
//! // Shallow depth and a fixed seed for a fast, reproducible doc test
//! let mut bot = Bot::with_config(
//!     Player::One,
//!     BotConfig {
//!         depth: 2,
//!         seed: Some(7),
//!     },
//! );
//! let board = Board::new();
//!
//! if let Some(best_move) = bot.make_turn(&board) {
//!     println!("Play at ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::search::Searcher;

/// Default search depth in plies
pub const DEFAULT_DEPTH: i32 = 5;

/// Tunable bot parameters.
#[derive(Debug, Clone, Copy)]
pub struct BotConfig {
    /// Search depth in plies
    pub depth: i32,
    /// Fixed RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Decision-making bot for one side of the game.
///
/// The bot carries its own searcher so that a seeded configuration
/// plays the same game every time.
///
/// # Example
///
/// ```
/// use uttt::board::{Board, Player};
/// use uttt::engine::Bot;
///
/// let mut bot = Bot::new(Player::Two);
/// let board = Board::new();
///
/// if let Some(mv) = bot.make_turn(&board) {
///     println!("Bot plays at ({}, {})", mv.row, mv.col);
/// }
/// ```
pub struct Bot {
    player: Player,
    depth: i32,
    searcher: Searcher,
}

impl Bot {
    /// Create a bot with the default configuration.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self::with_config(player, BotConfig::default())
    }

    /// Create a bot with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `player` - The side this bot moves for
    /// * `config` - Search depth and optional RNG seed
    #[must_use]
    pub fn with_config(player: Player, config: BotConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::with_seed(seed),
            None => Searcher::new(),
        };
        Self {
            player,
            depth: config.depth,
            searcher,
        }
    }

    /// The side this bot moves for
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Configured search depth
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Pick a move in the given position.
    ///
    /// Returns `None` when the game is already decided or no legal
    /// move exists.
    pub fn make_turn(&mut self, board: &Board) -> Option<Move> {
        let start = Instant::now();
        let result = self.searcher.search(board, self.player, self.depth);
        debug!(
            "search done: score {} after {} nodes in {}ms",
            result.score,
            result.nodes,
            start.elapsed().as_millis()
        );
        result.best_move
    }
}

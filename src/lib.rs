//! Ultimate Tic-Tac-Toe bot engine
//!
//! A decision engine for Ultimate Tic-Tac-Toe, the nested variant
//! played on a 3x3 grid of 3x3 sub-boards:
//! - A move claims one cell and sends the opponent to the sub-board
//!   named by that cell's position inside its own board
//! - Winning a sub-board claims its macro cell; three claimed macro
//!   cells in a line win the game
//! - When a move targets a decided board, the opponent may play in any
//!   open board instead
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cell grid, sub-board statuses and move application
//! - [`rules`]: Line scanning shared by both board levels
//! - [`eval`]: Position evaluation and scoring weights
//! - [`search`]: Fixed-depth minimax with random tie-breaking
//! - [`engine`]: Bot facade tying the pieces together
//! - [`protocol`]: Line protocol spoken with the competition engine
//!
//! # Quick Start
//!
//! ```
//! use uttt::{Board, Bot, BotConfig, Player};
//!
//! // Shallow depth and a fixed seed keep the doc test fast
//! let mut bot = Bot::with_config(
//!     Player::One,
//!     BotConfig {
//!         depth: 2,
//!         seed: Some(1),
//!     },
//! );
//! let mut board = Board::new();
//!
//! if let Some(mv) = bot.make_turn(&board) {
//!     board.apply_move(mv, Player::One);
//!     println!("Bot plays at ({}, {})", mv.row, mv.col);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Player, Status};
pub use engine::{Bot, BotConfig};
pub use error::{ProtocolError, ProtocolResult};
pub use protocol::Session;

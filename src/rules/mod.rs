//! Game rules for Ultimate Tic-Tac-Toe
//!
//! One 3x3 line scan covers both levels of the game:
//! - Sub-board decision from cells
//! - Macro decision from sub-board statuses

pub mod win;

// Re-exports for convenient access
pub use win::{section_status, winner, LINES};

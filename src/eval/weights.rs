//! Scoring weights for Ultimate Tic-Tac-Toe evaluation
//!
//! The hierarchy is strict: a decided game outranks any macro-board
//! advantage, and any macro-board advantage outranks any amount of
//! sub-board progress.

use crate::board::MACRO_SIZE;

/// Scoring weights for evaluation
pub struct Weights;

impl Weights {
    /// A won game. Larger than every positional sum the board can produce.
    pub const WIN: i32 = 1_000_000;

    /// Multiplier lifting macro-board scores above sub-board scores.
    /// The sub-board total stays below 1000 in magnitude, so a single
    /// point of macro advantage dominates it.
    pub const MACRO_SCALE: i32 = 1_000;

    /// Per won sub-board, multiplied by its cell weight
    pub const MACRO_CELL: i32 = 3;

    /// Base value of a two-in-a-row with its third cell empty.
    /// The completion cell's weight is added on top, so threats are
    /// ordered by the square they fight over.
    pub const TWO_IN_LINE: i32 = 8;

    // Cell weights: the center sits on four lines, corners on three,
    // edges on two.
    pub const CENTER: i32 = 4;
    pub const CORNER: i32 = 3;
    pub const EDGE: i32 = 2;

    /// Multiplier for the sub-board the last move was played in
    pub const LAST_BOARD: i32 = 2;

    /// Weight of a 3x3 cell by its position
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> i32 {
        debug_assert!(row < MACRO_SIZE && col < MACRO_SIZE);
        match (row, col) {
            (1, 1) => Self::CENTER,
            (0, 0) | (0, 2) | (2, 0) | (2, 2) => Self::CORNER,
            _ => Self::EDGE,
        }
    }
}

//! Heuristic evaluation function for Ultimate Tic-Tac-Toe positions
//!
//! Scores a position from one player's viewpoint as that player's
//! positional score minus the opponent's, so
//! `evaluate(board, p) == -evaluate(board, p.opponent())` always holds.
//!
//! A player's positional score has two layers:
//! - Macro: open two-in-a-rows of won sub-boards, plus a bonus per won
//!   sub-board weighted by its position, lifted by `MACRO_SCALE`
//! - Sub: open two-in-a-rows inside each undecided sub-board, doubled
//!   in the board the last move landed in
//!
//! Isolated marks score nothing. A two-in-a-row is worth `TWO_IN_LINE`
//! plus the weight of the cell that would complete it, so threats
//! aiming at strong squares rank higher than threats aiming at weak ones.

use crate::board::{Board, Player, Status, MACRO_SIZE};
use crate::rules::LINES;

use super::Weights;

/// Evaluate the board from the perspective of the given player.
///
/// Returns a score where:
/// - Positive values indicate advantage for `viewpoint`
/// - Negative values indicate disadvantage for `viewpoint`
/// - `Weights::WIN` indicates a won game
/// - `-Weights::WIN` indicates a lost game
/// - A drawn game scores exactly 0
///
/// # Arguments
/// * `board` - The current board state
/// * `viewpoint` - The player to evaluate for
///
/// # Returns
/// An i32 score representing the position evaluation
#[must_use]
pub fn evaluate(board: &Board, viewpoint: Player) -> i32 {
    match board.game_status() {
        Status::Won(winner) if winner == viewpoint => return Weights::WIN,
        Status::Won(_) => return -Weights::WIN,
        Status::Drawn => return 0,
        Status::Open => {}
    }

    positional(board, viewpoint) - positional(board, viewpoint.opponent())
}

/// One player's share of the score: macro layer plus sub layer
fn positional(board: &Board, player: Player) -> i32 {
    Weights::MACRO_SCALE * macro_score(board, player) + sub_score(board, player)
}

/// Macro-level threats and won-board bonuses.
///
/// A drawn sub-board blocks its macro lines for both players, exactly
/// like an opponent-won one.
fn macro_score(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    for line in &LINES {
        let mut mine = 0;
        let mut completion = None;
        let mut blocked = false;
        for &(row, col) in line {
            match board.sub_status(row, col) {
                Status::Won(p) if p == player => mine += 1,
                Status::Open => completion = Some((row, col)),
                _ => {
                    blocked = true;
                    break;
                }
            }
        }
        if blocked || mine != 2 {
            continue;
        }
        if let Some((row, col)) = completion {
            score += Weights::TWO_IN_LINE + Weights::cell(row, col);
        }
    }

    for row in 0..MACRO_SIZE {
        for col in 0..MACRO_SIZE {
            if board.sub_status(row, col) == Status::Won(player) {
                score += Weights::MACRO_CELL * Weights::cell(row, col);
            }
        }
    }

    score
}

/// Threats inside every undecided sub-board, with the board the last
/// move landed in counted double
fn sub_score(board: &Board, player: Player) -> i32 {
    let last_board = board.last_move().map(|mv| mv.sub_board());
    let mut score = 0;

    for row in 0..MACRO_SIZE {
        for col in 0..MACRO_SIZE {
            if board.sub_status(row, col) != Status::Open {
                continue;
            }
            let mut progress = line_progress(&board.sub_cells(row, col), player);
            if last_board == Some((row, col)) {
                progress *= Weights::LAST_BOARD;
            }
            score += progress;
        }
    }

    score
}

/// Score open two-in-a-rows for `player` on a single 3x3 grid.
///
/// A line counts only when it holds exactly two of the player's marks
/// and one empty cell; its value is `TWO_IN_LINE` plus the weight of
/// that empty completion cell. Anything less is worth nothing.
fn line_progress(marks: &[[Option<Player>; MACRO_SIZE]; MACRO_SIZE], player: Player) -> i32 {
    let mut score = 0;

    for line in &LINES {
        let mut mine = 0;
        let mut completion = None;
        let mut blocked = false;
        for &(row, col) in line {
            match marks[row][col] {
                Some(p) if p == player => mine += 1,
                Some(_) => {
                    blocked = true;
                    break;
                }
                None => completion = Some((row, col)),
            }
        }
        if blocked || mine != 2 {
            continue;
        }
        if let Some((row, col)) = completion {
            score += Weights::TWO_IN_LINE + Weights::cell(row, col);
        }
    }

    score
}

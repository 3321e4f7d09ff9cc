//! Fixed-depth minimax search with uniform random tie-breaking
//!
//! This module implements move selection for the Ultimate Tic-Tac-Toe
//! bot. It uses plain minimax over cloned board states, with no
//! pruning: every sibling is scored, and every move tied for the best
//! score stays a candidate until one is drawn at random. Pruning would
//! discard tied siblings before they are seen, which is exactly what
//! the uniform tie-break must not do.
//!
//! # Features
//!
//! - Fixed-depth minimax from a single player's viewpoint
//! - Uniform random choice among equally-scored moves at every node
//! - Seedable RNG for reproducible games
//!
//! # Example
//!
//! ```
//! use uttt::board::{Board, Player};
//! use uttt::search::Searcher;
//!
//! let mut searcher = Searcher::with_seed(7);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Player::One, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Move, Player};
use crate::eval::evaluate;

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen move, or `None` when the position is terminal or the
    /// depth is non-positive
    pub best_move: Option<Move>,
    /// Evaluation score of the chosen move, from the searching
    /// player's viewpoint
    pub score: i32,
    /// Total nodes visited, leaves included
    pub nodes: u64,
}

/// Minimax searcher with its own random number generator.
///
/// The RNG only breaks ties between equally-scored moves, so two
/// searchers with the same seed play identical games.
pub struct Searcher {
    rng: SmallRng,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Create a searcher with a fixed seed for reproducible play.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Search `depth` plies ahead for the player about to move.
    ///
    /// A non-positive depth evaluates the position as it stands and
    /// returns no move, as does a terminal position.
    pub fn search(&mut self, board: &Board, player: Player, depth: i32) -> SearchResult {
        self.nodes = 0;
        self.minimax(board, player, player, depth)
    }

    /// Convenience wrapper returning only the chosen move.
    pub fn choose_move(&mut self, board: &Board, player: Player, depth: i32) -> Option<Move> {
        self.search(board, player, depth).best_move
    }

    /// Recursive minimax. `viewpoint` fixes whose advantage the score
    /// measures; `mover` is the player whose turn it is at this node.
    fn minimax(&mut self, board: &Board, viewpoint: Player, mover: Player, depth: i32) -> SearchResult {
        self.nodes += 1;

        if depth <= 0 || board.is_terminal() {
            return SearchResult {
                best_move: None,
                score: evaluate(board, viewpoint),
                nodes: self.nodes,
            };
        }

        let maximizing = mover == viewpoint;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut ties: Vec<Move> = Vec::new();

        for mv in board.available_moves() {
            let mut child = board.clone();
            child.apply_move(mv, mover);
            let reply = self.minimax(&child, viewpoint, mover.opponent(), depth - 1);

            let improves = if maximizing {
                reply.score > best_score
            } else {
                reply.score < best_score
            };

            let mut candidate = mv;
            candidate.score = reply.score;

            if improves {
                best_score = reply.score;
                ties.clear();
                ties.push(candidate);
            } else if reply.score == best_score {
                ties.push(candidate);
            }
        }

        SearchResult {
            best_move: ties.choose(&mut self.rng).copied(),
            score: best_score,
            nodes: self.nodes,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MACRO_CELLS, TOTAL_CELLS};
    use crate::eval::Weights;

    const ALL_ACTIVE: [i8; MACRO_CELLS] = [-1; MACRO_CELLS];

    fn field_with(marks: &[(usize, usize, i8)]) -> Vec<i8> {
        let mut field = vec![0; TOTAL_CELLS];
        for &(row, col, value) in marks {
            field[row * 9 + col] = value;
        }
        field
    }

    #[test]
    fn test_empty_board_search_returns_move() {
        let mut searcher = Searcher::with_seed(1);
        let board = Board::new();

        let result = searcher.search(&board, Player::One, 2);
        assert!(result.best_move.is_some(), "Search should pick a move");
        assert_eq!(result.score, 0, "No pair exists two plies in, got {}", result.score);
    }

    #[test]
    fn test_depth_zero_evaluates_in_place() {
        let mut searcher = Searcher::with_seed(1);
        let board =
            Board::from_payloads(&field_with(&[(0, 0, 1), (0, 1, 1)]), &ALL_ACTIVE).unwrap();

        let result = searcher.search(&board, Player::One, 0);
        assert!(result.best_move.is_none(), "Depth 0 should not pick a move");
        assert_eq!(result.score, evaluate(&board, Player::One));
        assert_eq!(result.nodes, 1);

        let negative = searcher.search(&board, Player::One, -3);
        assert!(negative.best_move.is_none());
        assert_eq!(negative.score, result.score);
    }

    #[test]
    fn test_terminal_board_returns_no_move() {
        let board = Board::from_payloads(
            &field_with(&[]),
            &[1, 1, 1, 0, 0, 0, 0, 0, 0],
        )
        .unwrap();
        let mut searcher = Searcher::with_seed(1);

        let result = searcher.search(&board, Player::One, 5);
        assert!(result.best_move.is_none(), "Decided game has no move to pick");
        assert_eq!(result.score, Weights::WIN);
        assert_eq!(result.nodes, 1);

        assert!(searcher.choose_move(&board, Player::Two, 5).is_none());
    }

    #[test]
    fn test_finds_winning_move() {
        // Sub-boards (0,0) and (0,1) already belong to One; completing
        // the pair in (0,2) at (0,8) wins the third board and the game.
        let board = Board::from_payloads(
            &field_with(&[(0, 6, 1), (0, 7, 1)]),
            &[1, 1, -1, 0, 0, 0, 0, 0, 0],
        )
        .unwrap();
        let mut searcher = Searcher::with_seed(3);

        let result = searcher.search(&board, Player::One, 1);
        let best = result.best_move.unwrap();
        assert_eq!((best.row, best.col), (0, 8), "Only (0,8) wins outright");
        assert_eq!(result.score, Weights::WIN);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // Every board except (0,2) is decided, so play stays there no
        // matter what. Two completes row 0 of that board at (0,8) and
        // with it the macro row, unless One takes the square first.
        let board = Board::from_payloads(
            &field_with(&[(0, 6, 2), (0, 7, 2)]),
            &[2, 2, -1, 1, 1, 2, 2, 1, 2],
        )
        .unwrap();
        let mut searcher = Searcher::with_seed(3);

        let result = searcher.search(&board, Player::One, 2);
        let best = result.best_move.unwrap();
        assert_eq!(
            (best.row, best.col),
            (0, 8),
            "Every other move hands Two the game, got ({}, {})",
            best.row,
            best.col
        );
        assert!(result.score > -Weights::WIN);
    }

    #[test]
    fn test_seeded_search_is_deterministic() {
        let board = Board::new();

        let first = Searcher::with_seed(42).choose_move(&board, Player::One, 2);
        let second = Searcher::with_seed(42).choose_move(&board, Player::One, 2);
        assert_eq!(first, second, "Same seed should pick the same move");
    }

    #[test]
    fn test_chosen_move_carries_its_score() {
        let board = Board::from_payloads(
            &field_with(&[(0, 6, 1), (0, 7, 1)]),
            &[1, 1, -1, 0, 0, 0, 0, 0, 0],
        )
        .unwrap();
        let mut searcher = Searcher::with_seed(5);

        let result = searcher.search(&board, Player::One, 1);
        assert_eq!(result.best_move.unwrap().score, result.score);
    }

    #[test]
    fn test_node_count_is_exact_at_depth_one() {
        let mut searcher = Searcher::with_seed(1);
        let board = Board::new();

        let result = searcher.search(&board, Player::One, 1);
        assert_eq!(result.nodes, 82, "Root plus 81 children, got {}", result.nodes);

        // Counters reset between searches
        let again = searcher.search(&board, Player::One, 1);
        assert_eq!(again.nodes, 82);
    }

    #[test]
    fn test_root_tie_break_is_uniform() {
        // At depth 1 from the empty board all 81 replies score zero,
        // so the pick must be uniform across them. 8100 seeded runs
        // put each cell's expected count at 100; the bounds sit five
        // standard deviations out.
        let board = Board::new();
        let mut counts = [[0u32; 9]; 9];

        for seed in 0..8100u64 {
            let mv = Searcher::with_seed(seed)
                .choose_move(&board, Player::One, 1)
                .unwrap();
            counts[mv.row as usize][mv.col as usize] += 1;
        }

        for row in 0..9 {
            for col in 0..9 {
                let n = counts[row][col];
                assert!(
                    (50..=170).contains(&n),
                    "Cell ({}, {}) chosen {} times out of 8100",
                    row,
                    col,
                    n
                );
            }
        }
    }
}

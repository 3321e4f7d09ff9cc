//! Win condition checking for 3x3 sections
//!
//! The same line scan decides both levels of the game:
//! 1. A sub-board, from its nine cells
//! 2. The macro board, from the nine sub-board statuses (a won
//!    sub-board counts as a mark, open and drawn ones block both sides)

use crate::board::{Player, Status, MACRO_SIZE};

/// The eight winning lines of a 3x3 section: rows, columns, diagonals
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Find the owner of a completed line, if any
#[must_use]
pub fn winner(marks: &[[Option<Player>; MACRO_SIZE]; MACRO_SIZE]) -> Option<Player> {
    for line in &LINES {
        let [a, b, c] = line.map(|(r, q)| marks[r][q]);
        if a.is_some() && a == b && b == c {
            return a;
        }
    }
    None
}

/// Decide a 3x3 section from its marks: a line wins, a full grid with
/// no line is drawn, anything else stays open
#[must_use]
pub fn section_status(marks: &[[Option<Player>; MACRO_SIZE]; MACRO_SIZE]) -> Status {
    if let Some(p) = winner(marks) {
        return Status::Won(p);
    }
    let full = marks.iter().all(|row| row.iter().all(Option::is_some));
    if full {
        Status::Drawn
    } else {
        Status::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(values: [i8; 9]) -> [[Option<Player>; 3]; 3] {
        let mut marks = [[None; 3]; 3];
        for (i, &v) in values.iter().enumerate() {
            marks[i / 3][i % 3] = Player::from_id(v);
        }
        marks
    }

    #[test]
    fn test_winner_rows() {
        assert_eq!(winner(&grid([1, 1, 1, 0, 0, 0, 0, 0, 0])), Some(Player::One));
        assert_eq!(winner(&grid([0, 0, 0, 2, 2, 2, 0, 0, 0])), Some(Player::Two));
        assert_eq!(winner(&grid([0, 0, 0, 0, 0, 0, 1, 1, 1])), Some(Player::One));
    }

    #[test]
    fn test_winner_columns() {
        assert_eq!(winner(&grid([2, 0, 0, 2, 0, 0, 2, 0, 0])), Some(Player::Two));
        assert_eq!(winner(&grid([0, 1, 0, 0, 1, 0, 0, 1, 0])), Some(Player::One));
        assert_eq!(winner(&grid([0, 0, 1, 0, 0, 1, 0, 0, 1])), Some(Player::One));
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(winner(&grid([1, 0, 0, 0, 1, 0, 0, 0, 1])), Some(Player::One));
        assert_eq!(winner(&grid([0, 0, 2, 0, 2, 0, 2, 0, 0])), Some(Player::Two));
    }

    #[test]
    fn test_no_winner_empty() {
        assert_eq!(winner(&grid([0; 9])), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(winner(&grid([1, 1, 2, 0, 0, 0, 0, 0, 0])), None);
    }

    #[test]
    fn test_winner_relabel_symmetry() {
        // Swapping the player labels must swap the winner
        let positions = [
            [1, 1, 1, 2, 2, 0, 0, 0, 0],
            [1, 2, 0, 1, 2, 0, 1, 0, 0],
            [2, 0, 1, 0, 2, 1, 0, 0, 1],
            [1, 2, 1, 2, 1, 2, 1, 0, 0],
        ];
        for values in positions {
            let swapped = values.map(|v| match v {
                1 => 2,
                2 => 1,
                other => other,
            });
            let direct = winner(&grid(values));
            let mirrored = winner(&grid(swapped));
            assert_eq!(
                direct.map(Player::opponent),
                mirrored,
                "relabeling changed the outcome for {values:?}"
            );
        }
    }

    #[test]
    fn test_section_status_open() {
        assert_eq!(section_status(&grid([0; 9])), Status::Open);
        assert_eq!(section_status(&grid([1, 2, 0, 0, 0, 0, 0, 0, 0])), Status::Open);
    }

    #[test]
    fn test_section_status_won() {
        assert_eq!(
            section_status(&grid([0, 0, 0, 1, 1, 1, 0, 0, 0])),
            Status::Won(Player::One)
        );
    }

    #[test]
    fn test_section_status_drawn() {
        // Full grid, no line for either player
        assert_eq!(
            section_status(&grid([1, 2, 1, 1, 2, 2, 2, 1, 1])),
            Status::Drawn
        );
    }

    #[test]
    fn test_won_before_full_is_won() {
        // A line wins even when the grid is also full
        assert_eq!(
            section_status(&grid([1, 1, 1, 2, 2, 1, 2, 1, 2])),
            Status::Won(Player::One)
        );
    }
}

//! Board representation for Ultimate Tic-Tac-Toe

pub mod board;


// Re-exports
pub use board::Board;

/// Full board size (9x9)
pub const BOARD_SIZE: usize = 9;
/// Macro grid size (3x3 of sub-boards)
pub const MACRO_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81
pub const MACRO_CELLS: usize = MACRO_SIZE * MACRO_SIZE; // 9

/// The two players, identified on the wire as 1 and 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Wire id of this player (1 or 2)
    #[inline]
    pub fn id(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a wire id; anything other than 1 or 2 is `None`
    #[inline]
    pub fn from_id(id: i8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Status of a sub-board, and of the game as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Still playable (undecided)
    Open,
    /// Decided with a three-in-a-row
    Won(Player),
    /// Full with no line
    Drawn,
}

impl Status {
    /// Whether this section can no longer change
    #[inline]
    pub fn is_decided(self) -> bool {
        !matches!(self, Status::Open)
    }
}

/// A move on the 9x9 grid.
///
/// Coordinates are absolute (row and col in 0..=8). The score field is
/// transient search state: it holds the minimax value of the subtree
/// behind this move and takes no part in move identity.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub score: i32,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col, score: 0 }
    }

    /// Macro coordinates of the sub-board this move lands in
    #[inline]
    pub fn sub_board(self) -> (usize, usize) {
        (self.row as usize / MACRO_SIZE, self.col as usize / MACRO_SIZE)
    }

    /// Macro coordinates of the sub-board this move sends the opponent to
    #[inline]
    pub fn target(self) -> (usize, usize) {
        (self.row as usize % MACRO_SIZE, self.col as usize % MACRO_SIZE)
    }
}

// Identity is the coordinate pair; score is scratch space for the search.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Move {}

//! Two-level board structure with macro statuses and the active set

use crate::error::{ProtocolError, ProtocolResult};
use crate::rules::{section_status, winner};

use super::{Move, Player, Status, BOARD_SIZE, MACRO_CELLS, MACRO_SIZE, TOTAL_CELLS};

/// Full game state: 81 cells, the 3x3 grid of sub-board statuses, and
/// the set of sub-boards the next move may land in.
///
/// One board lives for the whole game and is mutated in place, either by
/// protocol payloads or by `apply_move`. Search works on clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
    macro_status: [[Status; MACRO_SIZE]; MACRO_SIZE],
    active: [[bool; MACRO_SIZE]; MACRO_SIZE],
    last_move: Option<Move>,
}

impl Board {
    /// Empty board with every sub-board open and active (free opening move)
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            macro_status: [[Status::Open; MACRO_SIZE]; MACRO_SIZE],
            active: [[true; MACRO_SIZE]; MACRO_SIZE],
            last_move: None,
        }
    }

    /// Build a board from the two wire payloads
    pub fn from_payloads(cells: &[i8], macros: &[i8]) -> ProtocolResult<Self> {
        let mut board = Self::new();
        board.load_field(cells)?;
        board.load_macroboard(macros)?;
        Ok(board)
    }

    /// Get the mark at an absolute position
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Status of the sub-board at macro coordinates
    #[inline]
    #[must_use]
    pub fn sub_status(&self, macro_row: usize, macro_col: usize) -> Status {
        self.macro_status[macro_row][macro_col]
    }

    /// Whether the sub-board at macro coordinates may receive the next move
    #[inline]
    #[must_use]
    pub fn is_active(&self, macro_row: usize, macro_col: usize) -> bool {
        self.active[macro_row][macro_col]
    }

    /// The most recent move applied through `apply_move`, if any.
    /// Boards rebuilt from payloads have no move history.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Copy out the nine cells of one sub-board
    #[must_use]
    pub fn sub_cells(&self, macro_row: usize, macro_col: usize) -> [[Option<Player>; MACRO_SIZE]; MACRO_SIZE] {
        let mut cells = [[None; MACRO_SIZE]; MACRO_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[macro_row * MACRO_SIZE + r][macro_col * MACRO_SIZE + c];
            }
        }
        cells
    }

    /// View the macro grid as tic-tac-toe marks: won sub-boards are marks,
    /// open and drawn ones are blanks
    #[must_use]
    pub fn macro_marks(&self) -> [[Option<Player>; MACRO_SIZE]; MACRO_SIZE] {
        let mut marks = [[None; MACRO_SIZE]; MACRO_SIZE];
        for (r, row) in marks.iter_mut().enumerate() {
            for (c, mark) in row.iter_mut().enumerate() {
                if let Status::Won(p) = self.macro_status[r][c] {
                    *mark = Some(p);
                }
            }
        }
        marks
    }

    /// Outcome of the game as a whole: a line of sub-boards won by one
    /// player wins, all nine decided with no line is a draw
    #[must_use]
    pub fn game_status(&self) -> Status {
        if let Some(p) = winner(&self.macro_marks()) {
            return Status::Won(p);
        }
        let all_decided = self
            .macro_status
            .iter()
            .all(|row| row.iter().all(|s| s.is_decided()));
        if all_decided {
            Status::Drawn
        } else {
            Status::Open
        }
    }

    /// True when the game is over: the macro board is decided or no
    /// active sub-board has an empty cell left
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        if self.game_status().is_decided() {
            return true;
        }
        self.available_moves().is_empty()
    }

    /// Every empty cell inside an active sub-board, in row-major order
    /// over the full 9x9 grid
    #[must_use]
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.active[row / MACRO_SIZE][col / MACRO_SIZE] && self.cells[row][col].is_none()
                {
                    moves.push(Move::new(row as u8, col as u8));
                }
            }
        }
        moves
    }

    /// Place a mark and update the derived state.
    ///
    /// Recomputes the containing sub-board's status, then applies the
    /// activation rule: the move's intra-board coordinates name the next
    /// active sub-board; if that one is already decided, every undecided
    /// sub-board becomes active instead.
    ///
    /// Playing an occupied cell or an inactive sub-board is a caller bug.
    pub fn apply_move(&mut self, mv: Move, player: Player) {
        let (sub_row, sub_col) = mv.sub_board();
        debug_assert!(
            self.active[sub_row][sub_col] && self.cells[mv.row as usize][mv.col as usize].is_none(),
            "illegal move ({}, {})",
            mv.row,
            mv.col
        );

        self.cells[mv.row as usize][mv.col as usize] = Some(player);
        if self.macro_status[sub_row][sub_col] == Status::Open {
            self.macro_status[sub_row][sub_col] = section_status(&self.sub_cells(sub_row, sub_col));
        }
        self.last_move = Some(Move::new(mv.row, mv.col));

        let (target_row, target_col) = mv.target();
        if self.macro_status[target_row][target_col].is_decided() {
            // Free move: everything still open is playable
            for r in 0..MACRO_SIZE {
                for c in 0..MACRO_SIZE {
                    self.active[r][c] = self.macro_status[r][c] == Status::Open;
                }
            }
        } else {
            self.active = [[false; MACRO_SIZE]; MACRO_SIZE];
            self.active[target_row][target_col] = true;
        }
    }

    /// Overwrite the cell grid from a field payload (81 values, row-major)
    pub fn load_field(&mut self, values: &[i8]) -> ProtocolResult<()> {
        if values.len() != TOTAL_CELLS {
            return Err(ProtocolError::ValueCount {
                context: "field",
                expected: TOTAL_CELLS,
                actual: values.len(),
            });
        }
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (i, &value) in values.iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] = match value {
                0 => None,
                1 | 2 => Player::from_id(value),
                _ => return Err(ProtocolError::InvalidCell { value }),
            };
        }
        self.cells = cells;
        self.last_move = None;
        Ok(())
    }

    /// Overwrite statuses and the active set from a macroboard payload
    /// (9 values, row-major, sentinel-encoded)
    pub fn load_macroboard(&mut self, values: &[i8]) -> ProtocolResult<()> {
        if values.len() != MACRO_CELLS {
            return Err(ProtocolError::ValueCount {
                context: "macroboard",
                expected: MACRO_CELLS,
                actual: values.len(),
            });
        }
        let mut status = [[Status::Open; MACRO_SIZE]; MACRO_SIZE];
        let mut active = [[false; MACRO_SIZE]; MACRO_SIZE];
        for (i, &value) in values.iter().enumerate() {
            let (r, c) = (i / MACRO_SIZE, i % MACRO_SIZE);
            match value {
                -1 => active[r][c] = true,
                0 => {}
                3 => status[r][c] = Status::Drawn,
                _ => match Player::from_id(value) {
                    Some(p) => status[r][c] = Status::Won(p),
                    None => return Err(ProtocolError::InvalidMacro { value }),
                },
            }
        }
        self.macro_status = status;
        self.active = active;
        Ok(())
    }

    /// Re-encode the cell grid as a field payload
    #[must_use]
    pub fn field_line(&self) -> String {
        let values = (0..TOTAL_CELLS).map(|i| {
            let cell = self.cells[i / BOARD_SIZE][i % BOARD_SIZE];
            cell.map_or(0, Player::id).to_string()
        });
        values.collect::<Vec<_>>().join(",")
    }

    /// Re-encode statuses and the active set as a macroboard payload.
    /// Round-trips bit-for-bit with `load_macroboard`.
    #[must_use]
    pub fn macroboard_line(&self) -> String {
        let values = (0..MACRO_CELLS).map(|i| {
            let (r, c) = (i / MACRO_SIZE, i % MACRO_SIZE);
            let value = match self.macro_status[r][c] {
                Status::Won(p) => p.id(),
                Status::Drawn => 3,
                Status::Open if self.active[r][c] => -1,
                Status::Open => 0,
            };
            value.to_string()
        });
        values.collect::<Vec<_>>().join(",")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

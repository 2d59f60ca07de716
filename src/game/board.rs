use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Chip(Player),
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// `Board` is `Copy`: callers that want to try a move without committing to
/// it play into a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is playable iff its top cell is empty
    pub fn is_column_playable(&self, col: usize) -> Result<bool, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        Ok(self.cells[0][col] == Cell::Empty)
    }

    /// Columns that can still take a chip, in ascending order
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.cells[0][col] == Cell::Empty)
    }

    /// Row a chip dropped into `col` would settle in, without touching the board
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a chip in a column, returns the row where it landed.
    /// The board is unchanged on error.
    pub fn apply(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Number of chips stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .filter(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full.
    /// Gravity keeps columns packed, so looking at the top row is enough.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if no chip has been played yet
    pub fn is_empty(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|&cell| cell == Cell::Empty)
    }

    /// Build a board from six text rows, top row first. `X` is Player 1,
    /// `O` is Player 2, anything else is empty. Gravity is not checked.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(COLS).enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::Chip(Player::One),
                    'O' => Cell::Chip(Player::Two),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_apply() {
        let mut board = Board::new();

        let row = board.apply(3, Player::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Chip(Player::One));

        let row = board.apply(3, Player::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first chip
        assert_eq!(board.get(4, 3), Cell::Chip(Player::Two));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply(0, Player::One).unwrap();
        }

        assert_eq!(board.is_column_playable(0), Ok(false));
        let before = board;
        assert_eq!(board.apply(0, Player::Two), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.apply(7, Player::One), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.is_column_playable(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.landing_row(7), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.apply(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.playable_columns().count(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.apply(2, Player::One).unwrap();
        board.apply(2, Player::Two).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_playable_columns_skips_full() {
        let board = Board::from_diagram([
            "X.O....",
            "O.X....",
            "X.O....",
            "O.X....",
            "X.O....",
            "O.X....",
        ]);
        let playable: Vec<usize> = board.playable_columns().collect();
        assert_eq!(playable, vec![1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_landing_row_matches_apply() {
        let mut board = Board::new();
        board.apply(4, Player::Two).unwrap();
        let expected = board.landing_row(4);
        assert_eq!(expected, Some(4));
        assert_eq!(board.apply(4, Player::One).ok(), expected);
    }

    quickcheck! {
        fn gravity_law(moves: Vec<u8>) -> bool {
            let mut board = Board::new();
            let mut player = Player::One;
            for m in moves {
                let col = m as usize % COLS;
                let height = board.column_height(col);
                match board.apply(col, player) {
                    Ok(row) => {
                        // lands on the lowest empty cell, everything below is occupied
                        if row != ROWS - 1 - height {
                            return false;
                        }
                        if (row + 1..ROWS).any(|r| board.get(r, col) == Cell::Empty) {
                            return false;
                        }
                        player = player.other();
                    }
                    Err(MoveError::ColumnFull(_)) => {
                        if height != ROWS {
                            return false;
                        }
                    }
                    Err(MoveError::InvalidColumn(_)) => return false,
                }
                if (0..COLS).any(|c| board.column_height(c) > ROWS) {
                    return false;
                }
            }
            true
        }
    }
}

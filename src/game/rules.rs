//! Win and draw detection. Everything here is pure: the board is only read.

use super::board::{Board, COLS, ROWS};
use super::Player;

/// The four line directions; each is scanned both ways from the anchor.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // diagonal /
];

/// Number of connected chips needed to win
pub const CONNECT: usize = 4;

/// Count consecutive chips of `player` strictly beyond `(row, col)` when
/// stepping by `(d_row, d_col)`. Stops at the edge of the grid or at the first
/// cell that is not `player`'s.
pub fn count_run(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> usize {
    let cell = player.to_cell();
    let mut count = 0;
    let mut r = row as isize + d_row;
    let mut c = col as isize + d_col;
    while (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += d_row;
        c += d_col;
    }
    count
}

/// Check whether the chip `player` just placed at `(row, col)` completes a line.
///
/// Only lines through the anchor are scanned: a single drop cannot create a
/// line that does not contain it.
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    AXES.iter().any(|&(d_row, d_col)| {
        1 + count_run(board, row, col, d_row, d_col, player)
            + count_run(board, row, col, -d_row, -d_col, player)
            >= CONNECT
    })
}

/// A full board is a draw. Only meaningful after a move that did not win;
/// a move that fills the board and wins is a win.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

use super::grid::Cells;
use super::types::{CELL_COUNT, MoveOutcome, Symbol};

/// No line can be complete before the fifth mark is placed.
pub const MIN_MOVES_FOR_WIN: usize = 5;

const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &Cells, symbol: Symbol) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(x, y)| cells[x][y] == Some(symbol)))
}

/// Decides the game right after `symbol` was placed as move number `move_count`.
pub fn evaluate(cells: &Cells, move_count: usize, symbol: Symbol) -> MoveOutcome {
    if move_count < MIN_MOVES_FOR_WIN {
        return MoveOutcome::Continue;
    }

    if check_win(cells, symbol) {
        return MoveOutcome::Winner(symbol);
    }

    if move_count == CELL_COUNT {
        MoveOutcome::Draw
    } else {
        MoveOutcome::Continue
    }
}

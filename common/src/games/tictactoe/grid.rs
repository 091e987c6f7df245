use std::fmt;

use crate::line_io::{LineReader, LineWriter};

use super::error::{Axis, GameError};
use super::player::Player;
use super::text_format::expect_line;
use super::types::{GRID_SIZE, MoveOutcome, Symbol};
use super::win_detector::{check_win, evaluate};

/// Cells indexed as `cells[x][y]`, where `x` is the row and `y` the column.
pub type Cells = [[Option<Symbol>; GRID_SIZE]; GRID_SIZE];

const EMPTY_CELL: char = ' ';

/// The 3x3 board plus the number of marks placed so far.
///
/// The move count always equals the number of occupied cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Cells,
    moves: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `(x, y)` with the player's symbol and reports whether that move
    /// decided the game. Nothing changes when an error is returned.
    pub fn place_move(
        &mut self,
        player: &Player,
        x: usize,
        y: usize,
    ) -> Result<MoveOutcome, GameError> {
        check_coordinate(Axis::X, x)?;
        check_coordinate(Axis::Y, y)?;

        if self.cells[x][y].is_some() {
            return Err(GameError::CellOccupied { x, y });
        }

        let symbol = player.symbol();
        self.cells[x][y] = Some(symbol);
        self.moves += 1;

        Ok(evaluate(&self.cells, self.moves, symbol))
    }

    /// `None` for empty cells and for coordinates outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Symbol> {
        self.cells.get(x)?.get(y).copied().flatten()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn has_line(&self, symbol: Symbol) -> bool {
        check_win(&self.cells, symbol)
    }

    pub fn available_moves(&self) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for (x, row) in self.cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    pub fn serialize<W: LineWriter>(&self, writer: &mut W) -> Result<(), GameError> {
        for row in &self.cells {
            let line = row
                .iter()
                .map(|&cell| cell_char(cell).to_string())
                .collect::<Vec<_>>()
                .join(":");
            writer.write_line(&line)?;
        }
        writer.write_line(&self.moves.to_string())?;
        Ok(())
    }

    /// Reads rows back in the order [`Grid::serialize`] writes them.
    pub fn deserialize<R: LineReader>(reader: &mut R) -> Result<Self, GameError> {
        let mut grid = Grid::new();

        for x in 0..GRID_SIZE {
            let line = expect_line(reader, "grid row")?;
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() != GRID_SIZE {
                return Err(GameError::malformed(&line, "grid row must have three cells"));
            }
            for (y, field) in fields.iter().enumerate() {
                grid.cells[x][y] = parse_cell(field, &line)?;
            }
        }

        let line = expect_line(reader, "move count")?;
        let moves: usize = line
            .trim()
            .parse()
            .map_err(|_| GameError::malformed(&line, "move count is not a number"))?;

        let occupied = grid.cells.iter().flatten().filter(|c| c.is_some()).count();
        if moves != occupied {
            return Err(GameError::malformed(
                &line,
                "move count does not match the occupied cells",
            ));
        }
        grid.moves = moves;

        Ok(grid)
    }
}

fn check_coordinate(axis: Axis, value: usize) -> Result<(), GameError> {
    if value >= GRID_SIZE {
        return Err(GameError::CoordinateOutOfRange { axis, value });
    }
    Ok(())
}

fn cell_char(cell: Option<Symbol>) -> char {
    cell.map(Symbol::as_char).unwrap_or(EMPTY_CELL)
}

fn parse_cell(field: &str, line: &str) -> Result<Option<Symbol>, GameError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(EMPTY_CELL), None) => Ok(None),
        (Some(c), None) => Symbol::try_from(c)
            .map(Some)
            .map_err(|_| GameError::malformed(line, "cell must be ' ', 'X' or 'O'")),
        _ => Err(GameError::malformed(line, "cell must be a single character")),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, row) in self.cells.iter().enumerate() {
            if x > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, "   |   |   ")?;
            writeln!(
                f,
                " {} | {} | {} ",
                cell_char(row[0]),
                cell_char(row[1]),
                cell_char(row[2])
            )?;
            if x + 1 < GRID_SIZE {
                writeln!(f, "   |   |   ")?;
            } else {
                write!(f, "   |   |   ")?;
            }
        }
        Ok(())
    }
}

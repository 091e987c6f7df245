//! Two-player 3x3 tic-tac-toe: players, grid, turn handling and the
//! line-oriented text format used for save files.

mod error;
mod game_state;
mod grid;
mod player;
mod text_format;
mod types;
mod win_detector;

pub use error::{Axis, ErrorKind, GameError};
pub use game_state::Game;
pub use grid::{Cells, Grid};
pub use player::Player;
pub use text_format::SEPARATOR;
pub use types::{CELL_COUNT, FirstPlayerMode, GRID_SIZE, MoveOutcome, SYMBOL_ALPHABET, Symbol};
pub use win_detector::{MIN_MOVES_FOR_WIN, check_win, evaluate};

use std::fmt;

use crate::games::SessionRng;
use crate::line_io::{LineReader, LineWriter};

use super::error::GameError;
use super::grid::Grid;
use super::player::{Player, validate_name};
use super::text_format::{SEPARATOR, expect_separator, format_bool, read_bool};
use super::types::{FirstPlayerMode, MoveOutcome, Symbol};

/// A match between two players on one grid.
///
/// The player in turn and the winner are indices into `players`, so they
/// always refer to one of the two participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: [Player; 2],
    grid: Grid,
    current: usize,
    game_over: bool,
    draw: bool,
    winner: Option<usize>,
}

impl Game {
    /// Starts a game where `player_one` plays 'X', `player_two` plays 'O' and
    /// the opening move goes to a randomly drawn player.
    pub fn new(player_one: &str, player_two: &str) -> Result<Self, GameError> {
        let mut rng = SessionRng::from_random();
        Self::with_first_player(player_one, player_two, FirstPlayerMode::Random, &mut rng)
    }

    pub fn with_first_player(
        player_one: &str,
        player_two: &str,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Result<Self, GameError> {
        validate_name(player_one)?;
        validate_name(player_two)?;
        if player_one == player_two {
            return Err(GameError::DuplicateName(player_one.to_string()));
        }

        let players = [
            Player::with_symbol(player_one, Symbol::X)?,
            Player::with_symbol(player_two, Symbol::O)?,
        ];

        let current = match first_player_mode {
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    0
                } else {
                    1
                }
            }
            FirstPlayerMode::PlayerOne => 0,
        };

        Ok(Self {
            players,
            grid: Grid::new(),
            current,
            game_over: false,
            draw: false,
            winner: None,
        })
    }

    /// Places the current player's symbol at `(x, y)`. The turn passes to the
    /// other player only when the move leaves the game undecided.
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }

        let outcome = self.grid.place_move(&self.players[self.current], x, y)?;
        match outcome {
            MoveOutcome::Continue => self.current = 1 - self.current,
            MoveOutcome::Winner(_) => {
                self.game_over = true;
                self.winner = Some(self.current);
            }
            MoveOutcome::Draw => {
                self.game_over = true;
                self.draw = true;
            }
        }

        Ok(outcome)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_draw(&self) -> bool {
        self.draw
    }

    pub fn winner(&self) -> Option<&Player> {
        if !self.game_over || self.draw {
            return None;
        }
        self.winner.map(|index| &self.players[index])
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn serialize<W: LineWriter>(&self, writer: &mut W) -> Result<(), GameError> {
        for player in &self.players {
            player.serialize(writer)?;
        }
        writer.write_line(SEPARATOR)?;

        self.grid.serialize(writer)?;
        writer.write_line(SEPARATOR)?;

        self.current_player().serialize(writer)?;
        writer.write_line(SEPARATOR)?;

        writer.write_line(format_bool(self.game_over))?;
        writer.write_line(format_bool(self.draw))?;
        Ok(())
    }

    /// Rebuilds a game from the layout written by [`Game::serialize`].
    ///
    /// The winner is not stored: a finished, non-drawn game is won by the
    /// player recorded as in turn, whose symbol must complete a line.
    pub fn deserialize<R: LineReader>(reader: &mut R) -> Result<Self, GameError> {
        let players = [Player::deserialize(reader)?, Player::deserialize(reader)?];
        if players[0].name() == players[1].name() {
            return Err(GameError::DuplicateName(players[0].name().to_string()));
        }
        if players[0].symbol() == players[1].symbol() {
            return Err(GameError::DuplicateSymbol(players[0].symbol()));
        }
        expect_separator(reader)?;

        let grid = Grid::deserialize(reader)?;
        expect_separator(reader)?;

        let in_turn = Player::deserialize(reader)?;
        let current = players
            .iter()
            .position(|player| *player == in_turn)
            .ok_or_else(|| {
                GameError::malformed(
                    format!("{}:{}", in_turn.name(), in_turn.symbol()),
                    "player in turn is not one of the two players",
                )
            })?;
        expect_separator(reader)?;

        let game_over = read_bool(reader, "game-over flag")?;
        let draw = read_bool(reader, "draw flag")?;

        let winner = match (game_over, draw) {
            (false, true) => {
                return Err(GameError::malformed(
                    format_bool(draw),
                    "a drawn game must also be over",
                ));
            }
            (false, false) => {
                if grid.is_full() || players.iter().any(|p| grid.has_line(p.symbol())) {
                    return Err(GameError::malformed(
                        format_bool(game_over),
                        "game is marked in progress but the grid is already decided",
                    ));
                }
                None
            }
            (true, true) => {
                if !grid.is_full() || players.iter().any(|p| grid.has_line(p.symbol())) {
                    return Err(GameError::malformed(
                        format_bool(draw),
                        "a draw needs a full grid without a completed line",
                    ));
                }
                None
            }
            (true, false) => {
                let winner_symbol = players[current].symbol();
                if !grid.has_line(winner_symbol) {
                    return Err(GameError::malformed(
                        format_bool(game_over),
                        "winner recorded in turn has no completed line",
                    ));
                }
                if grid.has_line(winner_symbol.opponent()) {
                    return Err(GameError::malformed(
                        format_bool(game_over),
                        "both players have a completed line",
                    ));
                }
                Some(current)
            }
        };

        Ok(Self {
            players,
            grid,
            current,
            game_over,
            draw,
            winner,
        })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game grid:\n{}\nTo move: {}",
            self.grid,
            self.current_player()
        )
    }
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use common::LineReader;
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, Game, Player, SYMBOL_ALPHABET};
use common::log;
use common::save::{load_game, save_game};

/// What to do with an existing save file at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    Ask,
    Resume,
    New,
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub save_path: PathBuf,
    pub autosave: bool,
    pub start_mode: StartMode,
    pub first_player: FirstPlayerMode,
}

/// Drives one game over a line-based input and a text output.
pub struct ConsoleSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    options: SessionOptions,
    session_rng: SessionRng,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
            session_rng: SessionRng::from_random(),
        }
    }

    /// Plays until the game ends or the input runs out.
    ///
    /// Returns the last game state, or `None` when input ended before a game
    /// was started.
    pub fn run(&mut self) -> io::Result<Option<Game>> {
        if self.options.autosave {
            writeln!(
                self.output,
                "The game is saved to {} after every move.",
                self.options.save_path.display()
            )?;
        }

        let Some(mut game) = self.start_game()? else {
            log!("Input ended before a game was started");
            return Ok(None);
        };
        writeln!(self.output, "Game started")?;

        while !game.is_game_over() {
            writeln!(self.output, "{}", game)?;
            self.autosave(&game)?;

            let Some(x) = self.prompt("Enter x (row): ")? else {
                log!("Input ended, leaving the game unfinished");
                return Ok(Some(game));
            };
            let Some(y) = self.prompt("Enter y (column): ")? else {
                log!("Input ended, leaving the game unfinished");
                return Ok(Some(game));
            };

            let result = match (parse_coordinate(&x), parse_coordinate(&y)) {
                (Some(x), Some(y)) => game.apply_move(x, y).map_err(|e| e.to_string()),
                _ => Err(format!(
                    "coordinates must be whole numbers, got '{}' and '{}'",
                    x.trim(),
                    y.trim()
                )),
            };
            if let Err(reason) = result {
                writeln!(self.output, "Invalid move: {}", reason)?;
            }
        }

        writeln!(self.output, "{}", game.grid())?;
        match game.winner() {
            Some(winner) => {
                writeln!(self.output, "Winner: {}", winner)?;
                log!("Game over, {} won", winner.name());
            }
            None => {
                writeln!(self.output, "Draw")?;
                log!("Game over, draw");
            }
        }
        self.autosave(&game)?;

        Ok(Some(game))
    }

    fn start_game(&mut self) -> io::Result<Option<Game>> {
        let load = match self.options.start_mode {
            StartMode::New => false,
            StartMode::Resume => true,
            StartMode::Ask => match self.prompt("Load the saved game? [y/N] ")? {
                Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
                None => return Ok(None),
            },
        };

        if load {
            match load_game(&self.options.save_path) {
                Ok(game) => {
                    log!("Loaded game from {}", self.options.save_path.display());
                    writeln!(self.output, "Loaded the saved game.")?;
                    return Ok(Some(game));
                }
                Err(e) => {
                    log!(
                        "Failed to load game from {}: {}",
                        self.options.save_path.display(),
                        e
                    );
                    writeln!(
                        self.output,
                        "Could not load the saved game ({}), starting a new one.",
                        e
                    )?;
                }
            }
        }

        self.new_game()
    }

    fn new_game(&mut self) -> io::Result<Option<Game>> {
        let Some(first) = self.prompt_name(1)? else {
            return Ok(None);
        };

        loop {
            let Some(second) = self.prompt_name(2)? else {
                return Ok(None);
            };

            match Game::with_first_player(
                &first,
                &second,
                self.options.first_player,
                &mut self.session_rng,
            ) {
                Ok(game) => {
                    log!(
                        "New game: {} vs {}, {} moves first",
                        first,
                        second,
                        game.current_player().name()
                    );
                    return Ok(Some(game));
                }
                Err(e) => writeln!(self.output, "Invalid name: {}", e)?,
            }
        }
    }

    /// Reprompts until the name is acceptable for the given seat.
    fn prompt_name(&mut self, seat: usize) -> io::Result<Option<String>> {
        let symbol = SYMBOL_ALPHABET[seat - 1];
        loop {
            let prompt = format!("Player {} ({}) name: ", seat, symbol);
            let Some(name) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            let name = name.trim().to_string();
            match Player::new(name.as_str(), symbol) {
                Ok(_) => return Ok(Some(name)),
                Err(e) => writeln!(self.output, "Invalid name: {}", e)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_line()
    }

    fn autosave(&mut self, game: &Game) -> io::Result<()> {
        if !self.options.autosave {
            return Ok(());
        }

        if let Err(e) = save_game(&self.options.save_path, game) {
            log!(
                "Failed to save game to {}: {}",
                self.options.save_path.display(),
                e
            );
            writeln!(self.output, "Could not save the game: {}", e)?;
        }
        Ok(())
    }
}

fn parse_coordinate(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

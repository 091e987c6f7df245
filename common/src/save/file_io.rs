use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::games::tictactoe::{Game, GameError};

#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    NotFound,
    EmptyFile,
    GameError(GameError),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::NotFound => write!(f, "Save file not found"),
            SaveError::EmptyFile => write!(f, "Empty save file"),
            SaveError::GameError(e) => write!(f, "Invalid save file: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::IoError(e) => Some(e),
            SaveError::GameError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == ErrorKind::NotFound {
            SaveError::NotFound
        } else {
            SaveError::IoError(e)
        }
    }
}

impl From<GameError> for SaveError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::Io(io) => SaveError::from(io),
            other => SaveError::GameError(other),
        }
    }
}

/// Overwrites `path` with the full game state.
pub fn save_game(path: &Path, game: &Game) -> Result<(), SaveError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    game.serialize(&mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn save_game_to_string(game: &Game) -> Result<String, SaveError> {
    let mut buffer: Vec<u8> = Vec::new();
    game.serialize(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn load_game(path: &Path) -> Result<Game, SaveError> {
    let file = std::fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(SaveError::EmptyFile);
    }

    let mut reader = BufReader::new(file);
    let game = Game::deserialize(&mut reader)?;
    Ok(game)
}

pub fn load_game_from_str(content: &str) -> Result<Game, SaveError> {
    if content.is_empty() {
        return Err(SaveError::EmptyFile);
    }

    let game = Game::deserialize(&mut content.as_bytes())?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::{ErrorKind as GameErrorKind, FirstPlayerMode};
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_save_{}.txt", random_number));
        path
    }

    fn sample_game() -> Game {
        let mut game = Game::with_first_player(
            "Ann",
            "Bob",
            FirstPlayerMode::PlayerOne,
            &mut SessionRng::new(3),
        )
        .unwrap();
        game.apply_move(0, 1).unwrap();
        game.apply_move(2, 2).unwrap();
        game.apply_move(1, 0).unwrap();
        game
    }

    #[test]
    fn test_save_load_game_file() {
        let game = sample_game();
        let path = get_temp_file_path();

        save_game(&path, &game).unwrap();
        let loaded = load_game(&path).unwrap();
        assert_eq!(loaded, game);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let mut game = sample_game();
        let path = get_temp_file_path();

        save_game(&path, &game).unwrap();
        game.apply_move(1, 1).unwrap();
        save_game(&path, &game).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, save_game_to_string(&game).unwrap());
        assert_eq!(load_game(&path).unwrap().grid().move_count(), 4);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_save_load_game_string() {
        let game = sample_game();
        let content = save_game_to_string(&game).unwrap();
        assert!(content.starts_with("Ann:X\nBob:O\n----------------\n"));
        assert_eq!(load_game_from_str(&content).unwrap(), game);
    }

    #[test]
    fn test_load_missing_file_error() {
        let result = load_game(Path::new("this_save_file_does_not_exist.txt"));
        assert!(matches!(result, Err(SaveError::NotFound)));
    }

    #[test]
    fn test_load_empty_file_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "").unwrap();

        assert!(matches!(load_game(&path), Err(SaveError::EmptyFile)));
        assert!(matches!(load_game_from_str(""), Err(SaveError::EmptyFile)));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_corrupt_content_error() {
        let result = load_game_from_str("Ann:X\nBob:O\n");
        match result {
            Err(SaveError::GameError(e)) => assert_eq!(e.kind(), GameErrorKind::EndOfInput),
            other => panic!("expected a game error, got {:?}", other),
        }
    }
}

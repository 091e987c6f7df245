pub mod file_io;

pub use file_io::{SaveError, load_game, load_game_from_str, save_game, save_game_to_string};

pub const SAVE_FILE_NAME: &str = "tictactoe_save.txt";

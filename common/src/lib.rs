pub mod config;
pub mod games;
pub mod line_io;
pub mod logger;
pub mod save;

pub use line_io::{LineReader, LineWriter};

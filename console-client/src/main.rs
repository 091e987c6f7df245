mod config;
mod session;

use clap::Parser;
use common::{log, logger};
use std::path::PathBuf;

use session::{ConsoleSession, SessionOptions, StartMode};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save file to use instead of the configured location
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Load the saved game without asking
    #[arg(long, conflicts_with = "new")]
    resume: bool,

    /// Start a new game without asking
    #[arg(long)]
    new: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(args.config);
    let config = config_manager.get_config()?;
    log!("Using config {}", config_manager.source());

    let start_mode = if args.resume {
        StartMode::Resume
    } else if args.new {
        StartMode::New
    } else {
        StartMode::Ask
    };

    let options = SessionOptions {
        save_path: args
            .save_file
            .unwrap_or_else(|| PathBuf::from(&config.save.location)),
        autosave: config.save.autosave,
        start_mode,
        first_player: config.first_player,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), options);
    session.run()?;

    log!("Session finished");
    Ok(())
}

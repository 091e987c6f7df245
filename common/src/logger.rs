use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Writes timestamped lines to stderr so they never mix with the board on stdout.
pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format_line(message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Console".to_string()));
        let line = logger.format_line("saved");
        assert!(line.contains("][Console] saved"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format_line("saved");
        assert!(line.ends_with("] saved"));
        assert!(!line.contains("]["));
    }
}

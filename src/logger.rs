use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Returned when a log level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

pub struct Logger {
    min_level: LogLevel,
    target: String,
    log_file: Option<Arc<Mutex<std::fs::File>>>,
    /// Lines kept in memory (used by tests to inspect output)
    captured: Option<Arc<Mutex<Vec<String>>>>,
    console_output: bool,
}

impl Logger {
    /// Creates a new logger with console output only
    pub fn new(min_level: LogLevel) -> Self {
        Logger {
            min_level,
            target: "widgetsim".to_string(),
            log_file: None,
            captured: None,
            console_output: true,
        }
    }

    /// Creates a new logger with both console and file output
    pub fn with_file(min_level: LogLevel, file_path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        Ok(Logger {
            log_file: Some(Arc::new(Mutex::new(file))),
            ..Logger::new(min_level)
        })
    }

    /// Creates a logger that keeps lines in memory instead of printing them
    pub fn capturing(min_level: LogLevel) -> Self {
        Logger {
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
            console_output: false,
            ..Logger::new(min_level)
        }
    }

    /// Sets the name shown in each line
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Sets whether console output is enabled
    pub fn set_console_output(&mut self, enabled: bool) {
        self.console_output = enabled;
    }

    /// Sets the minimum log level
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Lines captured so far; empty unless built with `capturing`
    pub fn captured_lines(&self) -> Vec<String> {
        match &self.captured {
            Some(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Internal method to log a message
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!(
            "[{}] [{}] [{}] {}",
            timestamp,
            level.as_str(),
            self.target,
            message
        );

        if self.console_output {
            println!("{}", formatted);
        }

        if let Some(file) = &self.log_file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", formatted);
            }
        }

        if let Some(lines) = &self.captured {
            if let Ok(mut lines) = lines.lock() {
                lines.push(formatted);
            }
        }
    }

    /// Log a debug message
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logger_default() {
        let logger = Logger::default();
        assert_eq!(logger.min_level, LogLevel::Info);
        assert_eq!(logger.target, "widgetsim");
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_capture_respects_level() {
        let logger = Logger::capturing(LogLevel::Info).with_target("machine");
        logger.debug("hidden");
        logger.info("shown");
        logger.error("also shown");

        let lines = logger.captured_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] [machine] shown"));
        assert!(lines[1].contains("[ERROR] [machine] also shown"));
    }

    #[test]
    fn test_min_level_can_be_raised() {
        let mut logger = Logger::capturing(LogLevel::Debug);
        logger.debug("before");
        logger.set_min_level(LogLevel::Error);
        logger.warning("dropped");
        logger.error("kept");

        let lines = logger.captured_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("before"));
        assert!(lines[1].ends_with("kept"));
    }

    #[test]
    fn test_file_output_appends() {
        let path = std::env::temp_dir().join(format!(
            "widgetsim_log_{}.log",
            chrono::Local::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let mut logger = Logger::with_file(LogLevel::Debug, path.to_str().unwrap()).unwrap();
        logger.set_console_output(false);
        logger.warning("low fuel");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[WARNING] [widgetsim] low fuel"));

        let _ = std::fs::remove_file(path);
    }
}

use log::{debug, error, info};
use proxy_wasm::types::LogLevel;

pub const LOG_LEVEL_TRACE: &str = "TRACE";
pub const LOG_LEVEL_DEBUG: &str = "DEBUG";
pub const LOG_LEVEL_INFO: &str = "INFO";
pub const LOG_LEVEL_WARN: &str = "WARN";
pub const LOG_LEVEL_ERROR: &str = "ERROR";
pub const LOG_LEVEL_CRITICAL: &str = "CRITICAL";

#[doc = "Maps a configured log level name to the host log level."]
pub fn parse_log_level(name: &str) -> Option<LogLevel> {
    match name {
        LOG_LEVEL_TRACE => Some(LogLevel::Trace),
        LOG_LEVEL_DEBUG => Some(LogLevel::Debug),
        LOG_LEVEL_INFO => Some(LogLevel::Info),
        LOG_LEVEL_WARN => Some(LogLevel::Warn),
        LOG_LEVEL_ERROR => Some(LogLevel::Error),
        LOG_LEVEL_CRITICAL => Some(LogLevel::Critical),
        _ => None,
    }
}

#[doc = "The logger for the filter. One per HTTP context."]
pub struct Logger {
    log_id : u64,
    policy_id : String,
    log_level : LogLevel,
}

impl Logger {

    #[doc = "Creates a new logger."]
    pub fn new(policy_id : String, log_level : LogLevel)-> Self {
        Logger {
            log_id : 0,
            policy_id,
            log_level
        }
    }

    #[doc = "Logs a debug message."]
    pub fn log_debug(&mut self, message: &str) {
        if let Some(line) = self.format(LogLevel::Debug, "DEBUG", message) {
            debug!("{}", line);
        }
    }

    #[doc = "Logs an info message."]
    pub fn log_info(&mut self, message: &str) {
        if let Some(line) = self.format(LogLevel::Info, "INFO", message) {
            info!("{}", line);
        }
    }

    #[doc = "Logs an error message."]
    pub fn log_error(&mut self, message: &str) {
        if let Some(line) = self.format(LogLevel::Error, "ERROR", message) {
            error!("{}", line);
        }
    }

    // Consumes a sequence number only for lines that are emitted.
    fn format(&mut self, level: LogLevel, tag: &str, message: &str) -> Option<String> {
        if !self.should_log(level) {
            return None;
        }
        let line = format!("[{}] [{}]: {} - {}", self.policy_id, tag, self.log_id, message);
        self.log_id += 1;
        Some(line)
    }

    #[doc = "Determines if the logger should log the message."]
    fn should_log(&self, log_level: LogLevel) -> bool {
        log_level as u32 >= self.log_level as u32
    }
}

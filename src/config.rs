use proxy_wasm::types::LogLevel;
use serde::Deserialize;

use crate::core::logger::parse_log_level;

#[doc = "The configuration for the filter.
\n\r Only logging is configurable; the coin flip itself is not."]
#[derive(Default, Clone, Debug, Deserialize)]
pub struct PolicyConfig {

    #[serde(alias = "log-level")]
    pub log_level: Option<String>,
}

impl PolicyConfig {

    #[doc = "Parses the plugin configuration, falling back to the default one when it is not valid JSON."]
    pub fn from_slice(data: &[u8]) -> Self {
        match serde_json::from_slice(data) {
            Ok(policy_config) => policy_config,
            Err(_) => PolicyConfig::default(),
        }
    }

    #[doc = "The configured log level, `Info` when missing or unknown."]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(LogLevel::Info)
    }
}

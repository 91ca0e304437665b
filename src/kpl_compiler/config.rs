// Tool configuration, loaded from a TOML file
//
// Every key is optional; an empty file yields the defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::kpl_compiler::error::CompilerError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub logging: LoggingConfig,
    pub script: ScriptConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter used when RUST_LOG is unset
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Reject scripts whose version stamp is not the current format version
    pub require_version: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub show_zero_codes: bool,
    pub show_empty_fields: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            logging: LoggingConfig::default(),
            script: ScriptConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig {
            require_version: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            show_zero_codes: false,
            show_empty_fields: false,
        }
    }
}

impl CompilerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CompilerError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CompilerError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            CompilerError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config = CompilerConfig::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

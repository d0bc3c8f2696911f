use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::svg::Theme;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Write the SVG card here on every run unless `--svg` overrides it
    #[serde(default)]
    pub svg_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AGECARD__DISPLAY__THEME, etc.)
    /// 2. Config file given by path, or AGECARD_CONFIG
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// Like [`Config::load`], but reads `AGECARD__*` variables from `vars`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_path: Option<String>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("display.theme", "light")?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("AGECARD_CONFIG").ok())
            .unwrap_or_else(|| "config/agecard.toml".to_string());

        // Optional; a missing file just means defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("AGECARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(vars),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.observability.log_format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(format!(
                    "Unknown log_format '{other}' (expected pretty or json)"
                ));
            }
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("log_level must not be empty".to_string());
        }
        if let Some(path) = &self.display.svg_path {
            if path.trim().is_empty() {
                return Err("display.svg_path must not be empty when set".to_string());
            }
        }
        Ok(())
    }
}

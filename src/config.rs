//! Configuration management for Shelfkeeper

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Comma-delimited book list loaded at startup
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DemoConfig {
    /// Titles reserved, in order, before lending starts
    pub reservations: Vec<String>,
    /// Lend calls made in the first round
    pub lend_rounds: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from files, environment variables and the first
    /// command-line argument
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_path(env::args().nth(1))
    }

    /// Same as [`load`](Self::load) with an explicit catalog path override
    pub fn load_with_path(path_override: Option<String>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (SHELFKEEPER__SECTION__KEY)
            .add_source(
                Environment::with_prefix("SHELFKEEPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("catalog.path", env::var("CATALOG_PATH").ok())?
            .set_override_option("catalog.path", path_override)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/books.csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            reservations: [
                "1984",
                "1984",
                "To Kill a Mockingbird",
                "The Catcher in the Rye",
                "Pride and Prejudice",
                "The Great Gatsby",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            lend_rounds: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

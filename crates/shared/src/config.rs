//! Application configuration management.

use serde::Deserialize;

use crate::types::money::DEFAULT_CURRENCY_SYMBOL;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reporting and presentation configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Seed data configuration.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Symbol prefixed to rendered amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Label shown for donations and expenses whose project no longer exists.
    #[serde(default = "default_unknown_project_label")]
    pub unknown_project_label: String,
    /// Number of donations listed in a project's recent donations.
    #[serde(default = "default_recent_donations_limit")]
    pub recent_donations_limit: usize,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_unknown_project_label() -> String {
    "Unknown Project".to_string()
}

fn default_recent_donations_limit() -> usize {
    5
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            unknown_project_label: default_unknown_project_label(),
            recent_donations_limit: default_recent_donations_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "donatrack=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Seed data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Load the demo projects, donations and expenses on startup.
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

fn default_demo_data() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("DONATRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

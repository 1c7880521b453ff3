//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// List screen configuration.
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Configuration for the generic list screens.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Page size used when a screen is first opened.
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
    /// Page sizes offered by the page-size selector.
    #[serde(default = "default_per_page_options")]
    pub per_page_options: Vec<u32>,
}

fn default_per_page() -> u32 {
    10
}

fn default_per_page_options() -> Vec<u32> {
    vec![10, 25, 50, 100]
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            per_page_options: default_per_page_options(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing: ListingConfig::default(),
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
            .add_source(config::Environment::with_prefix("JURNAL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

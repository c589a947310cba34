//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Caller-side settings for talking to the listing backend.
pub struct ListingConfig {
    /// Base URL of the room search API.
    pub api_base_url: String,
    /// Page size of the general listing section.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ListingConfig {
    /// Loads settings from `config/default.yaml`, an optional `APP_ENV`
    /// overlay, and `APP`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the recipe suggestion service
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Directory holding the persisted cache slot
    #[serde(default = "default_cache_dir")]
    pub dir: String,
    /// Maximum age of a cached result set in minutes
    #[serde(default = "default_cache_ttl_minutes")]
    pub ttl_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
            cache: CacheConfig::default(),
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_dir() -> String {
    ".recipe-suggest".to_string()
}

fn default_cache_ttl_minutes() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__API_BASE_URL, RECIPE__CACHE__DIR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE__CACHE__TTL_MINUTES
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_api_base_url(), "http://localhost:8080");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_cache_dir(), ".recipe-suggest");
        assert_eq!(default_cache_ttl_minutes(), 30);
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.cache.ttl_minutes, 30);
    }

    #[test]
    fn test_config_deserializes_from_partial_source() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api_base_url": "https://recipes.example.com"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://recipes.example.com");
        // Unspecified fields fall back to defaults
        assert_eq!(config.timeout, 30);
        assert_eq!(config.cache.dir, ".recipe-suggest");
    }
}

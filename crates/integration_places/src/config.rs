//! Places service configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the places web service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the places API (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent with every request (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred language of returned labels (e.g. "pt-BR")
    #[serde(default)]
    pub language: Option<String>,

    /// Cache TTL for place-details lookups in minutes (0 to disable caching,
    /// at most `MAX_CACHE_TTL_MINUTES`)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_cache_ttl_minutes() -> u64 {
    60
}

/// Longest accepted details cache TTL (one year)
pub const MAX_CACHE_TTL_MINUTES: u64 = 525_600;

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: None,
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl PlacesConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key".to_string())),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// A missing API key is allowed here; requests fail with a
    /// configuration error until one is provided.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.cache_ttl_minutes > MAX_CACHE_TTL_MINUTES {
            return Err(format!(
                "cache_ttl_minutes must be at most {MAX_CACHE_TTL_MINUTES}, got {}",
                self.cache_ttl_minutes
            ));
        }

        Ok(())
    }
}

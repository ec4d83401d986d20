//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the news API base URL.
pub const API_BASE_URL_ENV_VAR: &str = "NEWSGRAPH_API_BASE_URL";

/// Environment variable overriding the metagraph info URL (data layer).
pub const METAGRAPH_INFO_URL_ENV_VAR: &str = "NEWSGRAPH_METAGRAPH_INFO_URL";

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// News backend API settings.
    pub api: ApiConfig,

    /// Ledger network endpoints used by the wallet session.
    pub ledger: LedgerConfig,

    /// Node-info endpoints, one per metagraph layer.
    pub metagraph: MetagraphConfig,

    /// News feed presentation settings.
    pub feed: FeedConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ClientConfig {
    /// Build a configuration from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides in place.
    ///
    /// Only the news API base URL and the metagraph info URL are
    /// environment-addressable; ledger endpoints come from the config file
    /// or their local defaults.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(API_BASE_URL_ENV_VAR) {
            self.api.base_url = base_url;
        }
        if let Ok(info_url) = std::env::var(METAGRAPH_INFO_URL_ENV_VAR) {
            self.metagraph.data_l1_url = info_url;
        }
    }
}

/// News backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the news backend (e.g., "http://localhost:8000").
    pub base_url: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Ledger network endpoints.
///
/// The wallet session talks to three layers: the block explorer (balances),
/// the global layer 0, and the currency layer 1 (transactions).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Block explorer URL.
    pub be_url: String,

    /// Global layer-0 URL.
    pub l0_url: String,

    /// Currency layer-1 URL.
    pub l1_url: String,

    /// Request timeout in seconds for ledger calls.
    pub request_timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            be_url: "http://localhost:9000".to_string(),
            l0_url: "http://localhost:9000".to_string(),
            l1_url: "http://localhost:9010".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Node-info endpoint per metagraph layer.
///
/// Each URL is a base; `/node/info` is appended at fetch time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetagraphConfig {
    /// Global L0 node.
    pub global_l0_url: String,

    /// Metagraph L0 node.
    pub metagraph_l0_url: String,

    /// Currency L1 node.
    pub currency_l1_url: String,

    /// Data L1 node.
    pub data_l1_url: String,
}

impl Default for MetagraphConfig {
    fn default() -> Self {
        Self {
            global_l0_url: "http://localhost:9000".to_string(),
            metagraph_l0_url: "http://localhost:9200".to_string(),
            currency_l1_url: "http://localhost:9300".to_string(),
            data_l1_url: "http://localhost:9400".to_string(),
        }
    }
}

/// News feed settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Articles per page.
    pub page_size: u32,

    /// Maximum minted items fetched for the my-items view.
    pub my_items_limit: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            my_items_limit: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ledger.be_url, "http://localhost:9000");
        assert_eq!(config.ledger.l1_url, "http://localhost:9010");
        assert_eq!(config.metagraph.data_l1_url, "http://localhost:9400");
        assert_eq!(config.feed.page_size, 9);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://news.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://news.example.com");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.feed.page_size, 9);
    }
}

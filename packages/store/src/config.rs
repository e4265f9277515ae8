//! # Client configuration: `devconnector.toml`
//!
//! The web client embeds a small TOML document that tells it where the
//! DevConnector API lives and how the browser session is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [session]
//! ttl_days = 7               # lifetime of the token cookie
//! token_key = "Token"        # cookie holding the session token
//! owned_posts_key = "userPosts"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DevConnectorConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base URL every request path is appended to. |
//! | [`SessionConfig`] | Token lifetime and the storage keys used by [`crate::Session`]. |
//!
//! Every field has a default, so an empty document is equivalent to
//! [`DevConnectorConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Top-level configuration stored in `devconnector.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DevConnectorConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and optional prefix. Request paths (`/api/...`) are
    /// appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Browser session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of the persisted token, in days.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u32,
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_owned_posts_key")]
    pub owned_posts_key: String,
}

fn default_ttl_days() -> u32 {
    7
}

fn default_token_key() -> String {
    "Token".to_string()
}

fn default_owned_posts_key() -> String {
    "userPosts".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: default_ttl_days(),
            token_key: default_token_key(),
            owned_posts_key: default_owned_posts_key(),
        }
    }
}

impl SessionConfig {
    /// Token lifetime as a [`Duration`]. Zero days would expire every token
    /// on write, so it falls back to the default lifetime.
    pub fn ttl(&self) -> Duration {
        let days = if self.ttl_days == 0 {
            tracing::warn!(
                "session.ttl_days is 0, using {} days",
                default_ttl_days()
            );
            default_ttl_days()
        } else {
            self.ttl_days
        };
        Duration::from_secs(u64::from(days) * SECONDS_PER_DAY)
    }
}

impl DevConnectorConfig {
    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "devconnector.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DevConnectorConfig::from_toml("").unwrap();
        assert_eq!(config, DevConnectorConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.session.token_key, "Token");
        assert_eq!(config.session.owned_posts_key, "userPosts");
        assert_eq!(config.session.ttl(), Duration::from_secs(7 * 24 * 60 * 60));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = DevConnectorConfig::from_toml(
            r#"
            [api]
            base_url = "https://devconnector.example.com"

            [session]
            ttl_days = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://devconnector.example.com");
        assert_eq!(config.session.ttl(), Duration::from_secs(24 * 60 * 60));
        assert_eq!(config.session.token_key, "Token");
    }

    #[test]
    fn with_base_url_overrides_only_the_api_host() {
        let config = DevConnectorConfig::default().with_base_url("http://api.test");
        assert_eq!(config.api.base_url, "http://api.test");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn toml_output_parses_back() {
        let config = DevConnectorConfig::default().with_base_url("http://api.test");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[session]"));
        assert_eq!(DevConnectorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn zero_day_ttl_falls_back_to_default() {
        let config = DevConnectorConfig::from_toml("[session]\nttl_days = 0").unwrap();
        assert_eq!(config.session.ttl(), SessionConfig::default().ttl());
        assert!(config.session.ttl() > Duration::ZERO);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(DevConnectorConfig::from_toml("[session]\nttl_days = \"week\"").is_err());
    }
}

use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "site.json";

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::load);

#[derive(Embed)]
#[folder = "config"]
struct ConfigAssets;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("config file {0} not found")]
    Missing(String),
    #[error("couldn't parse site config: {0}")]
    Parse(String),
}

/// Tunables for the page. Every field falls back to its default when absent
/// from `config/site.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport line (px from the top) a section must straddle to be active.
    pub scroll_threshold_px: f64,
    pub loading_delay_ms: u64,
    /// How long the "message prepared" notice stays up after a hand-off.
    pub submitted_reset_ms: u64,
    pub scrolled_offset_px: f64,
    pub back_to_top_offset_px: f64,
    pub messaging_base_url: String,
    pub recipient: String,
    pub sender_tag: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            loading_delay_ms: 2000,
            submitted_reset_ms: 5000,
            scrolled_offset_px: 50.0,
            back_to_top_offset_px: 400.0,
            messaging_base_url: "https://wa.me".to_string(),
            recipient: "+237653193185".to_string(),
            sender_tag: "Ayuk Ikome Portfolio Website".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn read_embedded() -> Result<Self, ConfigError> {
        let file = ConfigAssets::get(CONFIG_FILE)
            .ok_or_else(|| ConfigError::Missing(CONFIG_FILE.to_string()))?;
        let raw = String::from_utf8(file.data.into_owned())
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_json(&raw)
    }

    /// Reads the embedded config, falling back to defaults on any failure.
    pub fn load() -> Self {
        match Self::read_embedded() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn submitted_reset(&self) -> Duration {
        Duration::from_millis(self.submitted_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "scroll_threshold_px": 64.0 }"#)
            .expect("partial config should parse");
        assert_eq!(config.scroll_threshold_px, 64.0);
        assert_eq!(config.loading_delay_ms, 2000);
        assert_eq!(config.recipient, "+237653193185");
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let res = SiteConfig::from_json("{ not json");
        assert!(matches!(res, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        // the shipped site.json mirrors the built-in values
        let config = SiteConfig::read_embedded().expect("embedded config should load");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.loading_delay(), Duration::from_millis(2000));
        assert_eq!(config.submitted_reset(), Duration::from_secs(5));
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Sirocco configuration. Every section and key is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SiroccoConfig {
    /// Training window settings.
    #[serde(default)]
    pub history: HistoryToml,

    /// Order search settings.
    #[serde(default)]
    pub search: SearchToml,

    /// Data provider settings.
    #[serde(default)]
    pub source: SourceToml,
}

impl SiroccoConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryToml {
    #[serde(default = "default_history_start")]
    pub start: String,
    #[serde(default = "default_history_end")]
    pub end: String,
}

impl Default for HistoryToml {
    fn default() -> Self {
        Self {
            start: default_history_start(),
            end: default_history_end(),
        }
    }
}

fn default_history_start() -> String {
    "20000101".to_string()
}
fn default_history_end() -> String {
    "20250101".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_p_max")]
    pub p_max: usize,
    #[serde(default = "default_q_max")]
    pub q_max: usize,
    #[serde(default = "default_significance_threshold")]
    pub significance_threshold: f64,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            p_max: default_p_max(),
            q_max: default_q_max(),
            significance_threshold: default_significance_threshold(),
        }
    }
}

fn default_p_max() -> usize {
    sirocco_forecast::DEFAULT_P_MAX
}
fn default_q_max() -> usize {
    sirocco_forecast::DEFAULT_Q_MAX
}
fn default_significance_threshold() -> f64 {
    sirocco_forecast::DEFAULT_SIGNIFICANCE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceToml {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_community")]
    pub community: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceToml {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            community: default_community(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    sirocco_io::DEFAULT_BASE_URL.to_string()
}
fn default_community() -> String {
    sirocco_io::DEFAULT_COMMUNITY.to_string()
}
fn default_timeout_secs() -> u64 {
    sirocco_io::DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: SiroccoConfig = toml::from_str("").unwrap();
        assert_eq!(config.history.start, "20000101");
        assert_eq!(config.history.end, "20250101");
        assert_eq!((config.search.p_max, config.search.q_max), (2, 2));
        assert_eq!(config.search.significance_threshold, 0.05);
        assert_eq!(config.source.community, "SB");
        assert_eq!(config.source.timeout_secs, 120);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: SiroccoConfig = toml::from_str(
            r#"
            [search]
            p_max = 3

            [source]
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.search.p_max, 3);
        assert_eq!(config.search.q_max, 2);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.source.base_url, sirocco_io::DEFAULT_BASE_URL);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<SiroccoConfig>("[search]\nr_max = 1\n").is_err());
        assert!(toml::from_str::<SiroccoConfig>("[cache]\nttl = 1\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sirocco.toml");
        std::fs::write(&path, "[history]\nstart = \"2010-01-01\"\n").unwrap();
        let config = SiroccoConfig::load(Some(&path)).unwrap();
        assert_eq!(config.history.start, "2010-01-01");
        assert_eq!(config.history.end, "20250101");
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = SiroccoConfig::load(Some(Path::new("/nonexistent/sirocco.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/sirocco.toml"));
    }

    #[test]
    fn missing_path_is_default() {
        let config = SiroccoConfig::load(None).unwrap();
        assert_eq!(config.search.p_max, 2);
    }
}

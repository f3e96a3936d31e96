//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::{HistoryToml, SearchToml, SourceToml};

use sirocco_calendar::{HistoryWindow, ObsDate};
use sirocco_forecast::EngineConfig;
use sirocco_io::PowerConfig;

/// Builds a [`HistoryWindow`] from the TOML history section.
pub fn build_history_window(history: &HistoryToml) -> Result<HistoryWindow> {
    let start = ObsDate::parse(&history.start).context("invalid [history].start")?;
    let end = ObsDate::parse(&history.end).context("invalid [history].end")?;
    HistoryWindow::new(start, end).context("invalid [history] window")
}

/// Builds a validated [`EngineConfig`] from the TOML history and search
/// sections.
pub fn build_engine_config(history: &HistoryToml, search: &SearchToml) -> Result<EngineConfig> {
    let cfg = EngineConfig::default()
        .with_history(build_history_window(history)?)
        .with_p_max(search.p_max)
        .with_q_max(search.q_max)
        .with_significance_threshold(search.significance_threshold);
    cfg.validate().context("invalid [search] settings")?;
    Ok(cfg)
}

/// Builds a validated [`PowerConfig`] from the TOML source section.
pub fn build_power_config(source: &SourceToml) -> Result<PowerConfig> {
    let cfg = PowerConfig::default()
        .with_base_url(&source.base_url)
        .with_community(&source.community)
        .with_timeout_secs(source.timeout_secs);
    cfg.validate().context("invalid [source] settings")?;
    Ok(cfg)
}

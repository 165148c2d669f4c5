//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::{Path, PathBuf};

use pricex_core::models::config::PricexConfig;
use pricex_core::{AmountExtractor, LocaleHint};

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pricex")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PricexConfig> {
    if let Some(path) = config_path {
        return Ok(PricexConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(PricexConfig::from_file(&default_path)?)
    } else {
        Ok(PricexConfig::default())
    }
}

/// Build an extractor; an explicit `--locale` overrides the configured one.
pub fn build_extractor(
    config: &PricexConfig,
    locale: Option<&str>,
    no_collapse: bool,
) -> anyhow::Result<AmountExtractor> {
    let mut extractor = AmountExtractor::from_config(&config.extraction)?;

    if let Some(tag) = locale {
        let hint: LocaleHint = tag
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --locale '{}': {}", tag, e))?;
        extractor = extractor.with_locale(hint);
    }

    if no_collapse {
        extractor = extractor.with_whitespace_collapse(false);
    }

    Ok(extractor)
}

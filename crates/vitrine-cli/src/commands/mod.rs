pub mod check;
pub mod config;
pub mod inspect;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use vitrine_core::config::ViewerConfig;

/// Load a viewer config from TOML, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => ViewerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

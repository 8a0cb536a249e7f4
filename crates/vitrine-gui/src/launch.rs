use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use vitrine_core::config::ViewerConfig;

/// Command line of the desktop viewer.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "vitrine-gui", about = "Desktop product image viewer")]
#[command(version)]
pub struct LaunchArgs {
    /// Viewer config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Images to show, in order
    pub images: Vec<PathBuf>,
}

impl LaunchArgs {
    pub fn load_config(&self) -> Result<ViewerConfig> {
        let Some(path) = &self.config else {
            return Ok(ViewerConfig::default());
        };
        read_config(path)
    }
}

pub fn read_config(path: &Path) -> Result<ViewerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

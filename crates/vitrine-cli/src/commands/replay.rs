use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use vitrine_core::script::ReplayScript;

use crate::summary::print_replay_report;

#[derive(Args)]
pub struct ReplayArgs {
    /// Replay script (TOML)
    pub script: PathBuf,

    /// Viewer config overriding the script's [config] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit one JSON record per step instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let mut script: ReplayScript = toml::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;
    if args.config.is_some() {
        script.config = super::load_config(args.config.as_deref())?;
    }

    info!(
        steps = script.steps.len(),
        mode = %script.mode,
        "replaying script"
    );
    let report = script.run()?;

    if args.json {
        for record in &report.records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        print_replay_report(&report, &args.script.display().to_string());
    }

    Ok(())
}

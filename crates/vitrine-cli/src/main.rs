mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vitrine", about = "Product image viewer toolkit")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted input sequence against a viewer
    Replay(commands::replay::ReplayArgs),
    /// Normalize the images of a product record
    Inspect(commands::inspect::InspectArgs),
    /// Check that image files decode
    Check(commands::check::CheckArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;
use vitrine_core::io::{load_image, resolve_uri};

#[derive(Args)]
pub struct CheckArgs {
    /// Image URIs or paths to decode
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Directory relative URIs resolve against
    #[arg(long, default_value = ".")]
    pub base: PathBuf,
}

struct CheckOutcome {
    uri: String,
    result: std::result::Result<(u32, u32), String>,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let pb = ProgressBar::new(args.images.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Decoding images");

    let outcomes: Vec<CheckOutcome> = args
        .images
        .par_iter()
        .map(|uri| {
            let result = resolve_uri(uri, &args.base)
                .and_then(|path| load_image(&path))
                .map(|img| (img.width, img.height))
                .map_err(|e| e.to_string());
            pb.inc(1);
            CheckOutcome {
                uri: uri.clone(),
                result,
            }
        })
        .collect();
    pb.finish_with_message("Decoded");

    println!("\n{:<48}  {:>12}", "Image", "Size");
    println!("{}", "-".repeat(62));
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok((w, h)) => println!("{:<48}  {:>12}", outcome.uri, format!("{w}x{h}")),
            Err(reason) => {
                failed += 1;
                warn!(uri = %outcome.uri, %reason, "image falls back to placeholder");
                println!("{:<48}  {:>12}  {}", outcome.uri, "placeholder", reason);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} images failed to decode", failed, outcomes.len());
    }
    println!("\nAll {} images decoded.", outcomes.len());
    Ok(())
}

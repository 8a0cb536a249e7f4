use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use vitrine_core::image_set::{ImageSet, ImageSource};

use crate::summary::print_image_set;

#[derive(Args)]
pub struct InspectArgs {
    /// Product record (.json or .toml)
    pub file: PathBuf,

    /// Print the normalized image list as JSON
    #[arg(long)]
    pub json: bool,
}

/// The part of a product record the viewer cares about.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub images: Vec<ImageSource>,
}

impl ProductRecord {
    pub fn image_set(&self) -> ImageSet {
        let fallback = self.name.as_deref().unwrap_or("Product image");
        ImageSet::from_sources(&self.images, fallback)
    }
}

pub fn read_product(path: &Path) -> Result<ProductRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let record = if is_toml {
        toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };
    Ok(record)
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let product = read_product(&args.file)?;
    let images = product.image_set();

    if args.json {
        let list: Vec<_> = images.iter().collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print_image_set(product.name.as_deref(), &images);
    }

    Ok(())
}

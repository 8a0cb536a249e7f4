//! Decoding image references for hosts that render pixels themselves.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ViewerError};
use crate::image_set::ImageRef;

/// 8-bit RGBA pixels, row-major, unpremultiplied.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Map an image URI to a local path. Relative paths resolve against `base`.
pub fn resolve_uri(uri: &str, base: &Path) -> Result<PathBuf> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        return Err(ViewerError::UnsupportedUri(uri.to_string()));
    }
    let path = Path::new(uri.strip_prefix("file://").unwrap_or(uri));
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base.join(path))
    }
}

pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(path = %path.display(), width, height, "decoded image");
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

pub fn load_image_ref(image: &ImageRef, base: &Path) -> Result<DecodedImage> {
    load_image(&resolve_uri(&image.uri, base)?)
}

use std::path::PathBuf;

use vitrine_core::config::ViewerConfig;
use vitrine_core::image_set::ImageRef;
use vitrine_core::io::DecodedImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode every image of a gallery. `generation` tags the results so a
    /// gallery replaced in the meantime can ignore them.
    LoadImages {
        generation: u64,
        images: Vec<ImageRef>,
        base: PathBuf,
    },
}

/// One decoded slot, index-aligned with the gallery's image set.
pub struct LoadedImage {
    pub index: usize,
    pub result: Result<DecodedImage, String>,
}

/// Results sent from worker and dialog threads back to UI thread.
pub enum WorkerResult {
    ImagesLoaded {
        generation: u64,
        images: Vec<LoadedImage>,
    },
    FilesPicked {
        paths: Vec<PathBuf>,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}

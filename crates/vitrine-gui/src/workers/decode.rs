use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::warn;
use vitrine_core::image_set::ImageRef;
use vitrine_core::io::load_image_ref;

use crate::messages::{LoadedImage, WorkerResult};

use super::{send, send_log};

pub(super) fn handle_load_images(
    generation: u64,
    images: &[ImageRef],
    base: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let loaded: Vec<LoadedImage> = images
        .par_iter()
        .enumerate()
        .map(|(index, image)| {
            let result = load_image_ref(image, base).map_err(|e| {
                warn!(uri = %image.uri, error = %e, "image decode failed");
                format!("{}: {e}", image.uri)
            });
            LoadedImage { index, result }
        })
        .collect();

    let failed = loaded.iter().filter(|l| l.result.is_err()).count();
    send_log(
        tx,
        ctx,
        format!(
            "Decoded {} of {} images in {}ms",
            loaded.len() - failed,
            loaded.len(),
            start.elapsed().as_millis()
        ),
    );
    send(
        tx,
        ctx,
        WorkerResult::ImagesLoaded {
            generation,
            images: loaded,
        },
    );
}

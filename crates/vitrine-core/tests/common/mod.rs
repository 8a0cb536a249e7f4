#![allow(dead_code)]

use std::sync::{mpsc, Arc};

use vitrine_core::config::ViewerConfig;
use vitrine_core::image_set::ImageSet;
use vitrine_core::observer::ViewerEvent;
use vitrine_core::scroll_lock::CountingScrollLock;
use vitrine_core::shell::{ModalViewer, PresentationMode, ViewerCore, ViewerShell};

/// `n` images named `img0.png`, `img1.png`, ...
pub fn image_set(n: usize) -> Arc<ImageSet> {
    Arc::new(ImageSet::from_uris(
        (0..n).map(|i| format!("img{i}.png")),
        "Image",
    ))
}

/// A modal viewer wired to a counting scroll lock and an event channel.
pub fn modal(
    n: usize,
    initial_index: i64,
) -> (ModalViewer, CountingScrollLock, mpsc::Receiver<ViewerEvent>) {
    let lock = CountingScrollLock::new();
    let (tx, rx) = mpsc::channel::<ViewerEvent>();
    let mut core = ViewerCore::new(image_set(n), initial_index, &ViewerConfig::default()).unwrap();
    core.set_observer(Box::new(tx));
    let viewer = ModalViewer::new(core).with_scroll_lock(Arc::new(lock.clone()));
    (viewer, lock, rx)
}

pub fn shell(n: usize, initial_index: i64, mode: PresentationMode) -> ViewerShell {
    ViewerShell::new(image_set(n), initial_index, mode, &ViewerConfig::default()).unwrap()
}

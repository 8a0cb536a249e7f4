use std::sync::{mpsc, Arc};

use vitrine_core::config::ViewerConfig;
use vitrine_core::error::Result;
use vitrine_core::image_set::ImageSet;
use vitrine_core::observer::ViewerEvent;
use vitrine_core::scroll_lock::CountingScrollLock;
use vitrine_core::shell::{ModalViewer, Navigate, PresentationMode, ViewerCore, ViewerShell};

use super::{SettleTracker, TouchTracker};

/// Texture state of one gallery slot.
pub enum Slide {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// The product gallery: the page presentation (inline or mobile carousel)
/// and the full-screen modal, sharing one image set.
pub struct GalleryState {
    pub generation: u64,
    images: Arc<ImageSet>,
    pub page: ViewerShell,
    pub modal: ModalViewer,
    page_events: mpsc::Receiver<ViewerEvent>,
    modal_events: mpsc::Receiver<ViewerEvent>,
    pub slides: Vec<Slide>,
    pub settle: SettleTracker,
    pub touches: TouchTracker,
}

impl GalleryState {
    pub fn new(
        images: Arc<ImageSet>,
        generation: u64,
        layout: PresentationMode,
        config: &ViewerConfig,
        page_lock: &CountingScrollLock,
    ) -> Result<Self> {
        let (page, page_events) = build_page(&images, 0, layout, config)?;

        let (modal_tx, modal_events) = mpsc::channel::<ViewerEvent>();
        let mut modal = ModalViewer::new(ViewerCore::new(images.clone(), 0, config)?)
            .with_scroll_lock(Arc::new(page_lock.clone()));
        modal.set_observer(Box::new(modal_tx));

        let slides = images.iter().map(|_| Slide::Loading).collect();

        Ok(Self {
            generation,
            images,
            page,
            modal,
            page_events,
            modal_events,
            slides,
            settle: SettleTracker::default(),
            touches: TouchTracker::default(),
        })
    }

    pub fn images(&self) -> &Arc<ImageSet> {
        &self.images
    }

    /// Rebuild both viewers with a new config. Textures and the page index
    /// carry over, and an open modal reopens on the image it was showing.
    /// On error the gallery is left as it was.
    pub fn reload(
        &mut self,
        layout: PresentationMode,
        config: &ViewerConfig,
        page_lock: &CountingScrollLock,
    ) -> Result<()> {
        let mut rebuilt = Self::new(
            self.images.clone(),
            self.generation,
            layout,
            config,
            page_lock,
        )?;
        rebuilt.slides = std::mem::take(&mut self.slides);
        rebuilt.page_go_to(self.page.active_index());
        let reopen = self.modal.is_open().then(|| self.modal.active_index());

        // Drops the old modal, which releases its hold on the page lock.
        *self = rebuilt;
        if let Some(index) = reopen {
            self.modal.open(index as i64);
        }
        Ok(())
    }

    /// Swap the page presentation, keeping the active image.
    pub fn set_layout(&mut self, layout: PresentationMode, config: &ViewerConfig) -> Result<()> {
        let index = self.page.active_index() as i64;
        let (page, events) = build_page(&self.images, index, layout, config)?;
        self.page = page;
        self.page_events = events;
        self.settle = SettleTracker::default();
        Ok(())
    }

    pub fn open_modal(&mut self) {
        self.touches.clear();
        self.modal.open(self.page.active_index() as i64);
    }

    /// Page navigation from a host control. Re-aims the mobile scroll.
    pub fn page_go_to(&mut self, index: usize) {
        if self.page.go_to(index as i64).changed {
            self.settle.snap_pending = true;
        }
    }

    /// Drain observer events. Index changes in the modal carry over to the
    /// page so closing it lands on the same image. Returns log lines.
    pub fn drain_events(&mut self) -> Vec<String> {
        let mut log = Vec::new();
        while let Ok(event) = self.modal_events.try_recv() {
            match event {
                ViewerEvent::IndexChanged(index) => self.page_go_to(index),
                ViewerEvent::OpenChanged(open) => {
                    log.push(if open {
                        format!("Viewer opened at {}", self.modal.counter_label())
                    } else {
                        "Viewer closed".to_string()
                    });
                }
            }
        }
        while let Ok(event) = self.page_events.try_recv() {
            if let ViewerEvent::IndexChanged(index) = event {
                let alt = &self.images.get_clamped(index).alt;
                log.push(format!("Showing {} ({alt})", self.page.counter_label()));
            }
        }
        log
    }

    pub fn texture(&self, index: usize) -> Option<&egui::TextureHandle> {
        match self.slides.get(index) {
            Some(Slide::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    pub fn is_loading(&self, index: usize) -> bool {
        matches!(self.slides.get(index), Some(Slide::Loading))
    }
}

fn build_page(
    images: &Arc<ImageSet>,
    index: i64,
    layout: PresentationMode,
    config: &ViewerConfig,
) -> Result<(ViewerShell, mpsc::Receiver<ViewerEvent>)> {
    let (tx, rx) = mpsc::channel::<ViewerEvent>();
    let page = ViewerShell::new(images.clone(), index, layout, config)?.with_observer(Box::new(tx));
    Ok((page, rx))
}

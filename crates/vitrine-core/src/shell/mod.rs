//! Presentations of the viewer: full-screen modal, inline hover-zoom, and the
//! mobile swipe carousel.

mod inline;
mod mobile;
mod modal;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::carousel::{Carousel, Navigation};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::gesture::GestureEngine;
use crate::image_set::{ImageRef, ImageSet};
use crate::input::InputEvent;
use crate::observer::{NoOpObserver, ViewerObserver};
use crate::transform::Transform;

pub use inline::{InlineZoom, LensPosition};
pub use mobile::MobileCarousel;
pub use modal::{CloseReason, ModalViewer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationMode {
    #[default]
    Modal,
    Inline,
    MobileCarousel,
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modal => write!(f, "modal"),
            Self::Inline => write!(f, "inline"),
            Self::MobileCarousel => write!(f, "mobile-carousel"),
        }
    }
}

/// One entry of a thumbnail strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub image: &'a ImageRef,
    pub active: bool,
}

/// Image list, carousel and observer shared by every presentation.
pub struct ViewerCore {
    images: Arc<ImageSet>,
    carousel: Carousel,
    observer: Box<dyn ViewerObserver>,
}

impl ViewerCore {
    /// Fails with [`ViewerError::InvalidConfig`](crate::error::ViewerError)
    /// when `config` does not validate.
    pub fn new(images: Arc<ImageSet>, initial_index: i64, config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        let carousel = Carousel::new(
            &images,
            initial_index,
            GestureEngine::new(config.gesture.clone()),
        );
        Ok(Self {
            images,
            carousel,
            observer: Box::new(NoOpObserver),
        })
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn set_observer(&mut self, observer: Box<dyn ViewerObserver>) {
        self.observer = observer;
    }

    /// Forward an index change to the observer, after the mutation.
    pub(crate) fn notify(&mut self, nav: Navigation) -> Navigation {
        if nav.changed {
            self.observer.on_index_change(nav.index);
        }
        nav
    }
}

/// Index navigation common to all presentations.
pub trait Navigate {
    fn core(&self) -> &ViewerCore;

    fn core_mut(&mut self) -> &mut ViewerCore;

    fn active_index(&self) -> usize {
        self.core().carousel.active_index()
    }

    fn images(&self) -> &ImageSet {
        self.core().images()
    }

    fn active_image(&self) -> &ImageRef {
        let core = self.core();
        core.images.get_clamped(core.carousel.active_index())
    }

    fn can_previous(&self) -> bool {
        self.core().carousel.can_previous()
    }

    fn can_next(&self) -> bool {
        self.core().carousel.can_next()
    }

    fn next(&mut self) -> Navigation {
        let core = self.core_mut();
        let nav = core.carousel.next();
        core.notify(nav)
    }

    fn previous(&mut self) -> Navigation {
        let core = self.core_mut();
        let nav = core.carousel.previous();
        core.notify(nav)
    }

    fn go_to(&mut self, index: i64) -> Navigation {
        let core = self.core_mut();
        let nav = core.carousel.go_to(index);
        core.notify(nav)
    }

    /// `"index / total"`, 1-based.
    fn counter_label(&self) -> String {
        format!("{} / {}", self.active_index() + 1, self.images().len())
    }

    fn thumbnails(&self) -> Vec<Thumbnail<'_>> {
        let active = self.active_index();
        self.images()
            .iter()
            .enumerate()
            .map(|(index, image)| Thumbnail {
                index,
                image,
                active: index == active,
            })
            .collect()
    }

    fn set_observer(&mut self, observer: Box<dyn ViewerObserver>) {
        self.core_mut().set_observer(observer);
    }
}

/// A viewer in one of its presentation modes.
pub enum ViewerShell {
    Modal(ModalViewer),
    Inline(InlineZoom),
    MobileCarousel(MobileCarousel),
}

impl ViewerShell {
    pub fn new(
        images: Arc<ImageSet>,
        initial_index: i64,
        mode: PresentationMode,
        config: &ViewerConfig,
    ) -> Result<Self> {
        let core = ViewerCore::new(images, initial_index, config)?;
        Ok(match mode {
            PresentationMode::Modal => Self::Modal(ModalViewer::new(core)),
            PresentationMode::Inline => {
                Self::Inline(InlineZoom::new(core, config.inline.magnification))
            }
            PresentationMode::MobileCarousel => Self::MobileCarousel(MobileCarousel::new(core)),
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn ViewerObserver>) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn mode(&self) -> PresentationMode {
        match self {
            Self::Modal(_) => PresentationMode::Modal,
            Self::Inline(_) => PresentationMode::Inline,
            Self::MobileCarousel(_) => PresentationMode::MobileCarousel,
        }
    }

    /// Only the modal has an open state. The other modes report `false`.
    pub fn is_open(&self) -> bool {
        match self {
            Self::Modal(m) => m.is_open(),
            _ => false,
        }
    }

    /// Zoom/pan of the active image. Identity outside the modal.
    pub fn transform(&self) -> Transform {
        match self {
            Self::Modal(m) => m.transform(),
            _ => Transform::IDENTITY,
        }
    }

    pub fn is_dragging(&self) -> bool {
        match self {
            Self::Modal(m) => m.is_dragging(),
            _ => false,
        }
    }

    /// Returns whether the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self {
            Self::Modal(m) => m.handle_input(event),
            _ => false,
        }
    }

    pub fn as_modal(&self) -> Option<&ModalViewer> {
        match self {
            Self::Modal(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_inline(&self) -> Option<&InlineZoom> {
        match self {
            Self::Inline(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_mobile(&self) -> Option<&MobileCarousel> {
        match self {
            Self::MobileCarousel(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_modal_mut(&mut self) -> Option<&mut ModalViewer> {
        match self {
            Self::Modal(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_inline_mut(&mut self) -> Option<&mut InlineZoom> {
        match self {
            Self::Inline(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_mobile_mut(&mut self) -> Option<&mut MobileCarousel> {
        match self {
            Self::MobileCarousel(m) => Some(m),
            _ => None,
        }
    }
}

impl Navigate for ViewerShell {
    fn core(&self) -> &ViewerCore {
        match self {
            Self::Modal(m) => m.core(),
            Self::Inline(i) => i.core(),
            Self::MobileCarousel(m) => m.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ViewerCore {
        match self {
            Self::Modal(m) => m.core_mut(),
            Self::Inline(i) => i.core_mut(),
            Self::MobileCarousel(m) => m.core_mut(),
        }
    }
}

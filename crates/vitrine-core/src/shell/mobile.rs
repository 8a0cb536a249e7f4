use crate::carousel::Navigation;

use super::{Navigate, ViewerCore};

/// Horizontally scrolling strip of full-width slides with dot indicators.
///
/// The host owns native scrolling; once momentum settles it reports the rest
/// offset and the carousel snaps that to a slide index.
pub struct MobileCarousel {
    core: ViewerCore,
}

impl MobileCarousel {
    pub fn new(core: ViewerCore) -> Self {
        Self { core }
    }

    pub fn on_scroll_settle(&mut self, scroll_offset: f32, viewport_width: f32) -> Navigation {
        let nav = self
            .core
            .carousel
            .on_swipe_settle(scroll_offset, viewport_width);
        self.core.notify(nav)
    }

    /// One flag per slide, true for the active one.
    pub fn dots(&self) -> Vec<bool> {
        let active = self.active_index();
        (0..self.images().len()).map(|i| i == active).collect()
    }

    /// Offset the host should scroll to so the active slide is shown.
    pub fn scroll_offset(&self, viewport_width: f32) -> f32 {
        self.active_index() as f32 * viewport_width.max(0.0)
    }
}

impl Navigate for MobileCarousel {
    fn core(&self) -> &ViewerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewerCore {
        &mut self.core
    }
}

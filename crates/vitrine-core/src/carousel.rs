use tracing::debug;

use crate::gesture::{GestureEngine, ZoomState};
use crate::image_set::ImageSet;
use crate::input::Key;

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub index: usize,
    /// False when the request was clamped to the current index.
    pub changed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Navigated(Navigation),
    CloseRequested,
    Ignored,
}

/// Active image index plus the zoom state of the image at that index.
///
/// Navigation never wraps and never fails: out-of-range requests clamp.
/// Any change of index resets zoom and pan.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    zoom: ZoomState,
}

impl Carousel {
    pub fn new(images: &ImageSet, initial_index: i64, engine: GestureEngine) -> Self {
        let mut carousel = Self {
            len: images.len(),
            active: 0,
            zoom: ZoomState::new(engine),
        };
        carousel.active = carousel.clamp(initial_index);
        carousel
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut ZoomState {
        &mut self.zoom
    }

    pub fn can_previous(&self) -> bool {
        self.active > 0
    }

    pub fn can_next(&self) -> bool {
        self.active + 1 < self.len
    }

    fn clamp(&self, index: i64) -> usize {
        let last = self.len.saturating_sub(1) as i64;
        index.clamp(0, last) as usize
    }

    fn move_to(&mut self, target: usize) -> Navigation {
        let changed = target != self.active;
        if changed {
            debug!(from = self.active, to = target, "active image changed");
            self.active = target;
            self.zoom.reset();
        }
        Navigation {
            index: self.active,
            changed,
        }
    }

    pub fn next(&mut self) -> Navigation {
        let target = (self.active + 1).min(self.len.saturating_sub(1));
        self.move_to(target)
    }

    pub fn previous(&mut self) -> Navigation {
        self.move_to(self.active.saturating_sub(1))
    }

    pub fn go_to(&mut self, index: i64) -> Navigation {
        let target = self.clamp(index);
        self.move_to(target)
    }

    /// Reconcile a settled scroll position with a discrete slide index.
    pub fn on_swipe_settle(&mut self, scroll_offset: f32, viewport_width: f32) -> Navigation {
        let page = (scroll_offset / viewport_width).round();
        if viewport_width.is_nan() || viewport_width <= 0.0 || !page.is_finite() {
            return Navigation {
                index: self.active,
                changed: false,
            };
        }
        self.go_to(page as i64)
    }

    pub fn on_keyboard(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::ArrowLeft => KeyOutcome::Navigated(self.previous()),
            Key::ArrowRight => KeyOutcome::Navigated(self.next()),
            Key::Escape => KeyOutcome::CloseRequested,
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Jump to `index` and reset zoom even if the index is unchanged.
    pub fn restart_at(&mut self, index: i64) -> Navigation {
        let nav = self.go_to(index);
        self.zoom.reset();
        nav
    }
}

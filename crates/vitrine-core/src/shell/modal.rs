use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::carousel::{KeyOutcome, Navigation};
use crate::gesture::{ZoomPhase, ZoomState};
use crate::input::{InputEvent, KeyFocus};
use crate::scroll_lock::{CountingScrollLock, ScrollLock, ScrollLockGuard};
use crate::transform::Transform;

use super::{Navigate, ViewerCore};

/// What closed the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Explicit,
    Escape,
    Backdrop,
    Unmount,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Escape => write!(f, "escape key"),
            Self::Backdrop => write!(f, "backdrop click"),
            Self::Unmount => write!(f, "unmount"),
        }
    }
}

/// Full-screen viewer with zoom, pan and keyboard navigation.
///
/// While open it holds one acquisition of the page scroll lock and listens
/// for keys. Every exit path, including drop, releases both exactly once.
pub struct ModalViewer {
    core: ViewerCore,
    scroll_lock: Arc<dyn ScrollLock>,
    guard: Option<ScrollLockGuard>,
    keys_attached: bool,
}

impl ModalViewer {
    pub fn new(core: ViewerCore) -> Self {
        Self {
            core,
            scroll_lock: Arc::new(CountingScrollLock::new()),
            guard: None,
            keys_attached: false,
        }
    }

    /// Use the host's page scroll lock. Takes effect at the next `open`.
    pub fn with_scroll_lock(mut self, lock: Arc<dyn ScrollLock>) -> Self {
        self.scroll_lock = lock;
        self
    }

    pub fn set_scroll_lock(&mut self, lock: Arc<dyn ScrollLock>) {
        self.scroll_lock = lock;
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn key_listener_attached(&self) -> bool {
        self.keys_attached
    }

    pub fn zoom(&self) -> &ZoomState {
        self.core.carousel.zoom()
    }

    pub fn transform(&self) -> Transform {
        self.zoom().transform()
    }

    pub fn is_dragging(&self) -> bool {
        self.zoom().is_dragging()
    }

    pub fn phase(&self) -> ZoomPhase {
        self.zoom().phase()
    }

    /// Open at `initial_index`, or restart there if already open. Zoom and
    /// pan always start from identity.
    pub fn open(&mut self, initial_index: i64) -> Navigation {
        let nav = self.core.carousel.restart_at(initial_index);
        let was_open = self.is_open();
        if !was_open {
            self.guard = Some(ScrollLockGuard::acquire(self.scroll_lock.clone()));
            self.keys_attached = true;
            debug!(index = nav.index, "viewer opened");
        }
        let nav = self.core.notify(nav);
        if !was_open {
            self.core.observer.on_open_change(true);
        }
        nav
    }

    /// Returns false when already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let Some(mut guard) = self.guard.take() else {
            return false;
        };
        guard.release();
        self.keys_attached = false;
        self.core.carousel.zoom_mut().reset();
        debug!(%reason, "viewer closed");
        self.core.observer.on_open_change(false);
        true
    }

    pub fn backdrop_click(&mut self) -> bool {
        self.close(CloseReason::Backdrop)
    }

    /// Dispatch one input event. Ignored while closed. Returns whether the
    /// event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.is_open() {
            return false;
        }

        let zoom = self.core.carousel.zoom_mut();
        match event {
            InputEvent::Wheel { delta_y } => zoom.wheel(*delta_y),
            InputEvent::DoubleClick => zoom.toggle_zoom(),
            InputEvent::PointerDown { pos } => return zoom.pointer_down(*pos),
            InputEvent::PointerMove { pos } => {
                if !zoom.is_dragging() {
                    return false;
                }
                zoom.pointer_move(*pos);
            }
            InputEvent::PointerUp => zoom.pointer_up(),
            InputEvent::Touch { phase, touches } => zoom.touch(*phase, touches),
            InputEvent::Key { key, focus } => {
                if !self.keys_attached || *focus == KeyFocus::TextInput {
                    return false;
                }
                return match self.core.carousel.on_keyboard(*key) {
                    KeyOutcome::Navigated(nav) => {
                        self.core.notify(nav);
                        true
                    }
                    KeyOutcome::CloseRequested => self.close(CloseReason::Escape),
                    KeyOutcome::Ignored => false,
                };
            }
        }
        true
    }
}

impl Navigate for ModalViewer {
    fn core(&self) -> &ViewerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewerCore {
        &mut self.core
    }
}

impl Drop for ModalViewer {
    fn drop(&mut self) {
        self.close(CloseReason::Unmount);
    }
}

use serde::Serialize;

use crate::consts::{LENS_CENTER_PERCENT, LENS_PERCENT_MAX};
use crate::geometry::{Point, Rect};

use super::{Navigate, ViewerCore};

/// Pointer position over the image as percentages of its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LensPosition {
    pub x: f32,
    pub y: f32,
}

impl LensPosition {
    pub const CENTER: Self = Self {
        x: LENS_CENTER_PERCENT,
        y: LENS_CENTER_PERCENT,
    };

    /// Percentages of `pos` within `bounds`, clamped to `[0, 100]`.
    pub fn from_pointer(pos: Point, bounds: Rect) -> Self {
        Self {
            x: percent(pos.x - bounds.min.x, bounds.width()),
            y: percent(pos.y - bounds.min.y, bounds.height()),
        }
    }

    /// The lens as an absolute point inside `bounds`.
    pub fn origin_in(&self, bounds: Rect) -> Point {
        Point::new(
            bounds.min.x + bounds.width() * self.x / LENS_PERCENT_MAX,
            bounds.min.y + bounds.height() * self.y / LENS_PERCENT_MAX,
        )
    }
}

impl Default for LensPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

fn percent(offset: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !extent.is_finite() {
        return LENS_CENTER_PERCENT;
    }
    (offset / extent * LENS_PERCENT_MAX).clamp(0.0, LENS_PERCENT_MAX)
}

/// Desktop hover magnifier. No open state and no zoom state machine: the
/// pointer position maps one-to-one to the magnification origin.
pub struct InlineZoom {
    core: ViewerCore,
    magnification: f32,
    hovering: bool,
    lens: LensPosition,
}

impl InlineZoom {
    pub fn new(core: ViewerCore, magnification: f32) -> Self {
        Self {
            core,
            magnification,
            hovering: false,
            lens: LensPosition::CENTER,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn lens_position(&self) -> LensPosition {
        self.lens
    }

    pub fn magnification(&self) -> f32 {
        self.magnification
    }

    /// Current scale: the magnification while hovering, 1 otherwise.
    pub fn scale(&self) -> f32 {
        if self.hovering {
            self.magnification
        } else {
            1.0
        }
    }

    pub fn pointer_enter(&mut self, pos: Point, bounds: Rect) {
        self.hovering = true;
        self.lens = LensPosition::from_pointer(pos, bounds);
    }

    pub fn pointer_move(&mut self, pos: Point, bounds: Rect) {
        if self.hovering {
            self.lens = LensPosition::from_pointer(pos, bounds);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    /// Where the image is drawn: magnified about the lens while hovering,
    /// `bounds` unchanged otherwise.
    pub fn magnified_rect(&self, bounds: Rect) -> Rect {
        if !self.hovering {
            return bounds;
        }
        bounds.scale_about(self.lens.origin_in(bounds), self.magnification)
    }

    /// CSS `transform-origin` value.
    pub fn transform_origin_css(&self) -> String {
        format!("{}% {}%", self.lens.x, self.lens.y)
    }
}

impl Navigate for InlineZoom {
    fn core(&self) -> &ViewerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewerCore {
        &mut self.core
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MIN_SCALE;
use crate::geometry::{Point, Rect};

/// Viewport transform of a single image: scale about the image centre,
/// then translate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f32,
    pub translate: Point,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: DEFAULT_MIN_SCALE,
        translate: Point::ZERO,
    };

    pub fn new(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale,
            translate: Point::new(translate_x, translate_y),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value equivalent to this transform.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// Map the unzoomed on-screen rect of the image to where it is drawn.
    pub fn apply_to_rect(&self, fitted: Rect) -> Rect {
        fitted
            .scale_about(fitted.center(), self.scale)
            .translate(self.translate)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}x @ ({:.1}, {:.1})",
            self.scale, self.translate.x, self.translate.y
        )
    }
}

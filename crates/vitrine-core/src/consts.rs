/// Scale of an unzoomed image. Also the lower scale bound.
pub const DEFAULT_MIN_SCALE: f32 = 1.0;

/// Upper scale bound for wheel and pinch zoom.
pub const DEFAULT_MAX_SCALE: f32 = 4.0;

/// Scales this close to the minimum snap to it and re-centre. Absorbs the
/// drift of repeated `f32` wheel and pinch steps.
pub const SCALE_SNAP_EPSILON: f32 = 1e-4;

/// Scale change applied per wheel tick.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.15;

/// Scale change per pixel of finger-distance change during a pinch.
pub const DEFAULT_PINCH_SENSITIVITY: f32 = 0.008;

/// Scale jumped to by a double-click or double-tap from the unzoomed state.
pub const DEFAULT_TOGGLE_SCALE: f32 = 2.5;

/// Fixed magnification of the inline hover-zoom presentation.
pub const DEFAULT_HOVER_MAGNIFICATION: f32 = 1.8;

/// Image reference substituted when a product has no images.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Alt text of the substituted placeholder.
pub const PLACEHOLDER_ALT: &str = "No image available";

/// Lens coordinates are percentages of the image bounding box.
pub const LENS_PERCENT_MAX: f32 = 100.0;

/// Lens position used before the pointer has entered the image (centre).
pub const LENS_CENTER_PERCENT: f32 = 50.0;

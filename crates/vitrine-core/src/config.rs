use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{
    DEFAULT_HOVER_MAGNIFICATION, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_PINCH_SENSITIVITY,
    DEFAULT_TOGGLE_SCALE, DEFAULT_WHEEL_SENSITIVITY,
};
use crate::error::{Result, ViewerError};

/// Tuning for the viewer. Every host validates it before building a shell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub inline: InlineZoomConfig,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        self.gesture.validate()?;
        self.inline.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Scale change per wheel tick.
    pub wheel_sensitivity: f32,
    /// Scale change per pixel of pinch distance change.
    pub pinch_sensitivity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Scale reached by double-click from the unzoomed state.
    pub toggle_scale: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            pinch_sensitivity: DEFAULT_PINCH_SENSITIVITY,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            toggle_scale: DEFAULT_TOGGLE_SCALE,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<()> {
        let reject = |msg: String| {
            warn!(%msg, "rejecting gesture config");
            Err(ViewerError::InvalidConfig(msg))
        };

        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return reject(format!("min_scale must be > 0, got {}", self.min_scale));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return reject(format!(
                "max_scale ({}) must be >= min_scale ({})",
                self.max_scale, self.min_scale
            ));
        }
        if !self.toggle_scale.is_finite()
            || self.toggle_scale <= self.min_scale
            || self.toggle_scale > self.max_scale
        {
            return reject(format!(
                "toggle_scale ({}) must lie in ({}, {}]",
                self.toggle_scale, self.min_scale, self.max_scale
            ));
        }
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return reject(format!(
                "wheel_sensitivity must be > 0, got {}",
                self.wheel_sensitivity
            ));
        }
        if !self.pinch_sensitivity.is_finite() || self.pinch_sensitivity <= 0.0 {
            return reject(format!(
                "pinch_sensitivity must be > 0, got {}",
                self.pinch_sensitivity
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineZoomConfig {
    /// Fixed magnification while hovering.
    pub magnification: f32,
}

impl Default for InlineZoomConfig {
    fn default() -> Self {
        Self {
            magnification: DEFAULT_HOVER_MAGNIFICATION,
        }
    }
}

impl InlineZoomConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.magnification.is_finite() || self.magnification < 1.0 {
            warn!(magnification = self.magnification, "rejecting inline zoom config");
            return Err(ViewerError::InvalidConfig(format!(
                "magnification must be >= 1, got {}",
                self.magnification
            )));
        }
        Ok(())
    }
}

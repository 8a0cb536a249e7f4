//! Gesture-driven zoom and pan for a single image.
//!
//! [`GestureEngine`] holds the pure transform math: every operation takes the
//! current [`Transform`] and returns a new, bounded one. [`ZoomState`] is the
//! per-image state machine (`Idle -> Zoomed -> Dragging`) that feeds classified
//! pointer and touch gestures through the engine.

use serde::{Deserialize, Serialize};

use crate::config::GestureConfig;
use crate::consts::SCALE_SNAP_EPSILON;
use crate::geometry::Point;
use crate::transform::Transform;

/// Pointer position minus translate, captured when a pan starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor(pub Point);

/// Stateless transform math parameterized by a [`GestureConfig`].
#[derive(Clone, Debug, Default)]
pub struct GestureEngine {
    config: GestureConfig,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The fully zoomed-out, centred transform.
    pub fn rest(&self) -> Transform {
        Transform {
            scale: self.config.min_scale,
            translate: Point::ZERO,
        }
    }

    pub fn is_zoomed(&self, t: Transform) -> bool {
        t.scale - self.config.min_scale > SCALE_SNAP_EPSILON
    }

    /// Clamp scale into bounds and re-centre whenever it reaches the minimum.
    ///
    /// Scales within [`SCALE_SNAP_EPSILON`] of the minimum count as the
    /// minimum, so wheel and pinch steps that cancel out in exact arithmetic
    /// also cancel out in `f32`.
    fn settle(&self, scale: f32, translate: Point) -> Transform {
        // max/min rather than clamp: an unvalidated config must not panic here.
        let scale = scale.min(self.config.max_scale).max(self.config.min_scale);
        if scale - self.config.min_scale <= SCALE_SNAP_EPSILON {
            self.rest()
        } else {
            Transform { scale, translate }
        }
    }

    /// One wheel tick. Negative `delta_y` (scroll up) zooms in.
    pub fn apply_wheel_delta(&self, t: Transform, delta_y: f32) -> Transform {
        let direction = if delta_y < 0.0 {
            1.0
        } else if delta_y > 0.0 {
            -1.0
        } else {
            return t;
        };
        self.settle(
            t.scale + direction * self.config.wheel_sensitivity,
            t.translate,
        )
    }

    /// Double-click convenience: zoomed goes back to rest, rest jumps to the
    /// toggle scale.
    pub fn toggle_zoom(&self, t: Transform) -> Transform {
        if self.is_zoomed(t) {
            self.rest()
        } else {
            self.settle(self.config.toggle_scale, Point::ZERO)
        }
    }

    /// `None` when there is nothing to pan.
    pub fn begin_drag(&self, t: Transform, pointer: Point) -> Option<DragAnchor> {
        self.is_zoomed(t).then(|| DragAnchor(pointer - t.translate))
    }

    /// Pan freely while zoomed. Translate extent is not bounded.
    pub fn continue_drag(&self, t: Transform, pointer: Point, anchor: DragAnchor) -> Transform {
        if !self.is_zoomed(t) {
            return self.rest();
        }
        Transform {
            scale: t.scale,
            translate: pointer - anchor.0,
        }
    }

    pub fn apply_pinch(&self, previous_distance: f32, current_distance: f32, t: Transform) -> Transform {
        let delta = (current_distance - previous_distance) * self.config.pinch_sensitivity;
        if !delta.is_finite() {
            return t;
        }
        self.settle(t.scale + delta, t.translate)
    }

    pub fn end_drag(&self, t: Transform) -> Transform {
        self.settle(t.scale, t.translate)
    }
}

/// What an incoming touch list means, decided from the touch count alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    None,
    Pan(Point),
    Pinch { distance: f32 },
}

impl GestureIntent {
    pub fn classify(touches: &[Point]) -> Self {
        match touches {
            [] => Self::None,
            [only] => Self::Pan(*only),
            [a, b, ..] => Self::Pinch {
                distance: a.distance(*b),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomPhase {
    Idle,
    Zoomed,
    Dragging,
}

/// Zoom/pan state of the image currently on screen.
#[derive(Clone, Debug, Default)]
pub struct ZoomState {
    engine: GestureEngine,
    transform: Transform,
    drag: Option<DragAnchor>,
    pinch_distance: Option<f32>,
}

impl ZoomState {
    pub fn new(engine: GestureEngine) -> Self {
        let transform = engine.rest();
        Self {
            engine,
            transform,
            drag: None,
            pinch_distance: None,
        }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn phase(&self) -> ZoomPhase {
        if self.drag.is_some() {
            ZoomPhase::Dragging
        } else if self.engine.is_zoomed(self.transform) {
            ZoomPhase::Zoomed
        } else {
            ZoomPhase::Idle
        }
    }

    pub fn reset(&mut self) {
        self.transform = self.engine.rest();
        self.drag = None;
        self.pinch_distance = None;
    }

    fn set(&mut self, t: Transform) {
        self.transform = t;
        if !self.engine.is_zoomed(t) {
            self.drag = None;
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        let t = self.engine.apply_wheel_delta(self.transform, delta_y);
        self.set(t);
    }

    pub fn toggle_zoom(&mut self) {
        self.drag = None;
        let t = self.engine.toggle_zoom(self.transform);
        self.set(t);
    }

    /// Returns whether a pan started.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        self.drag = self.engine.begin_drag(self.transform, pos);
        self.drag.is_some()
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if let Some(anchor) = self.drag {
            let t = self.engine.continue_drag(self.transform, pos, anchor);
            self.set(t);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
        let t = self.engine.end_drag(self.transform);
        self.set(t);
    }

    /// Apply one touch event. `touches` lists the fingers still in contact
    /// after the event.
    pub fn touch(&mut self, phase: TouchPhase, touches: &[Point]) {
        let touches = if phase == TouchPhase::Cancel { &[][..] } else { touches };

        match GestureIntent::classify(touches) {
            GestureIntent::None => {
                self.pinch_distance = None;
                self.pointer_up();
            }
            GestureIntent::Pan(pos) => {
                self.pinch_distance = None;
                match self.drag {
                    Some(anchor) if phase == TouchPhase::Move => {
                        let t = self.engine.continue_drag(self.transform, pos, anchor);
                        self.set(t);
                    }
                    // New finger, or the survivor of a pinch: re-anchor.
                    _ => {
                        self.drag = self.engine.begin_drag(self.transform, pos);
                    }
                }
            }
            GestureIntent::Pinch { distance } => {
                self.drag = None;
                if phase == TouchPhase::Move {
                    if let Some(previous) = self.pinch_distance {
                        let t = self.engine.apply_pinch(previous, distance, self.transform);
                        self.set(t);
                    }
                }
                self.pinch_distance = Some(distance);
            }
        }
    }
}

//! Scripted input replay against a [`ViewerShell`].
//!
//! A script names the images, the presentation mode, and a list of steps.
//! Running it records the viewer state after each step together with the
//! events the shell emitted during that step.

use std::sync::{mpsc, Arc};

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::geometry::{Point, Rect};
use crate::gesture::TouchPhase;
use crate::image_set::{ImageSet, ImageSource};
use crate::input::{InputEvent, Key, KeyFocus};
use crate::observer::ViewerEvent;
use crate::scroll_lock::CountingScrollLock;
use crate::shell::{CloseReason, LensPosition, Navigate, PresentationMode, ViewerShell};
use crate::transform::Transform;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub images: Vec<ImageSource>,
    #[serde(default)]
    pub initial_index: i64,
    #[serde(default)]
    pub mode: PresentationMode,
    #[serde(default)]
    pub config: ViewerConfig,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Open {
        #[serde(default)]
        index: i64,
    },
    Close,
    Backdrop,
    Next,
    Previous,
    GoTo { index: i64 },
    SwipeSettle { offset: f32, width: f32 },
    Wheel { delta_y: f32 },
    DoubleClick,
    PointerDown { pos: Point },
    PointerMove { pos: Point },
    PointerUp,
    Touch {
        phase: TouchPhase,
        #[serde(default)]
        touches: Vec<Point>,
    },
    Key {
        key: Key,
        #[serde(default)]
        focus: KeyFocus,
    },
    HoverEnter { pos: Point, bounds: Rect },
    HoverMove { pos: Point, bounds: Rect },
    HoverLeave,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Close => "close",
            Self::Backdrop => "backdrop",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GoTo { .. } => "go_to",
            Self::SwipeSettle { .. } => "swipe_settle",
            Self::Wheel { .. } => "wheel",
            Self::DoubleClick => "double_click",
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::Touch { .. } => "touch",
            Self::Key { .. } => "key",
            Self::HoverEnter { .. } => "hover_enter",
            Self::HoverMove { .. } => "hover_move",
            Self::HoverLeave => "hover_leave",
        }
    }

    /// The gesture or key event this step stands for, if any.
    pub fn as_input(&self) -> Option<InputEvent> {
        let event = match self {
            Self::Wheel { delta_y } => InputEvent::Wheel { delta_y: *delta_y },
            Self::DoubleClick => InputEvent::DoubleClick,
            Self::PointerDown { pos } => InputEvent::PointerDown { pos: *pos },
            Self::PointerMove { pos } => InputEvent::PointerMove { pos: *pos },
            Self::PointerUp => InputEvent::PointerUp,
            Self::Touch { phase, touches } => InputEvent::Touch {
                phase: *phase,
                touches: touches.clone(),
            },
            Self::Key { key, focus } => InputEvent::Key {
                key: *key,
                focus: *focus,
            },
            _ => return None,
        };
        Some(event)
    }
}

/// Viewer state after one step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub action: &'static str,
    pub index: usize,
    pub transform: Transform,
    pub open: bool,
    pub dragging: bool,
    pub hovering: bool,
    pub lens: Option<LensPosition>,
    pub lock_depth: usize,
    pub events: Vec<ViewerEvent>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    pub mode: PresentationMode,
    pub image_count: usize,
    pub records: Vec<StepRecord>,
    /// Scroll lock depth after the shell was dropped.
    pub final_lock_depth: usize,
}

impl ReplayScript {
    pub fn image_set(&self) -> ImageSet {
        ImageSet::from_sources(&self.images, "Product image")
    }

    pub fn run(&self) -> Result<ReplayReport> {
        let lock = CountingScrollLock::new();
        let (tx, rx) = mpsc::channel::<ViewerEvent>();
        let mut shell = ViewerShell::new(
            Arc::new(self.image_set()),
            self.initial_index,
            self.mode,
            &self.config,
        )?
        .with_observer(Box::new(tx));
        if let Some(modal) = shell.as_modal_mut() {
            modal.set_scroll_lock(Arc::new(lock.clone()));
        }

        let mut records = Vec::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            apply_step(&mut shell, step).map_err(|reason| ViewerError::InvalidStep {
                index: i,
                reason,
            })?;
            records.push(snapshot(&shell, i, step, &lock, rx.try_iter().collect()));
        }

        let mode = shell.mode();
        let image_count = shell.images().len();
        drop(shell);

        Ok(ReplayReport {
            mode,
            image_count,
            records,
            final_lock_depth: lock.depth(),
        })
    }
}

fn snapshot(
    shell: &ViewerShell,
    step_index: usize,
    step: &Step,
    lock: &CountingScrollLock,
    events: Vec<ViewerEvent>,
) -> StepRecord {
    let (hovering, lens) = shell
        .as_inline()
        .map_or((false, None), |inline| {
            (inline.is_hovering(), Some(inline.lens_position()))
        });
    StepRecord {
        step: step_index,
        action: step.name(),
        index: shell.active_index(),
        transform: shell.transform(),
        open: shell.is_open(),
        dragging: shell.is_dragging(),
        hovering,
        lens,
        lock_depth: lock.depth(),
        events,
    }
}

fn apply_step(shell: &mut ViewerShell, step: &Step) -> std::result::Result<(), String> {
    let mode = shell.mode();
    let unsupported = || format!("'{}' is not available in {mode} mode", step.name());

    match step {
        Step::Open { index } => {
            shell.as_modal_mut().ok_or_else(unsupported)?.open(*index);
        }
        Step::Close => {
            shell
                .as_modal_mut()
                .ok_or_else(unsupported)?
                .close(CloseReason::Explicit);
        }
        Step::Backdrop => {
            shell.as_modal_mut().ok_or_else(unsupported)?.backdrop_click();
        }
        Step::Next => {
            shell.next();
        }
        Step::Previous => {
            shell.previous();
        }
        Step::GoTo { index } => {
            shell.go_to(*index);
        }
        Step::SwipeSettle { offset, width } => {
            shell
                .as_mobile_mut()
                .ok_or_else(unsupported)?
                .on_scroll_settle(*offset, *width);
        }
        Step::HoverEnter { pos, bounds } => {
            shell
                .as_inline_mut()
                .ok_or_else(unsupported)?
                .pointer_enter(*pos, *bounds);
        }
        Step::HoverMove { pos, bounds } => {
            shell
                .as_inline_mut()
                .ok_or_else(unsupported)?
                .pointer_move(*pos, *bounds);
        }
        Step::HoverLeave => {
            shell.as_inline_mut().ok_or_else(unsupported)?.pointer_leave();
        }
        Step::Wheel { .. }
        | Step::DoubleClick
        | Step::PointerDown { .. }
        | Step::PointerMove { .. }
        | Step::PointerUp
        | Step::Touch { .. }
        | Step::Key { .. } => {
            let modal = shell.as_modal_mut().ok_or_else(unsupported)?;
            if let Some(event) = step.as_input() {
                modal.handle_input(&event);
            }
        }
    }
    Ok(())
}

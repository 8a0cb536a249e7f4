/// Frames the horizontal offset must hold still before it counts as settled.
const SETTLE_FRAMES: u32 = 6;
const MOVE_EPSILON: f32 = 0.5;

/// Detects when native scrolling of the mobile carousel has come to rest.
pub struct SettleTracker {
    last_offset: Option<f32>,
    still_frames: u32,
    settled: bool,
    /// Scroll to the active slide on the next frame.
    pub snap_pending: bool,
}

impl Default for SettleTracker {
    fn default() -> Self {
        Self {
            last_offset: None,
            still_frames: 0,
            settled: false,
            snap_pending: true,
        }
    }
}

impl SettleTracker {
    /// Feed this frame's offset. Returns the offset once, when it settles.
    pub fn observe(&mut self, offset: f32, pointer_down: bool) -> Option<f32> {
        let moved = self
            .last_offset
            .is_none_or(|last| (last - offset).abs() > MOVE_EPSILON);
        self.last_offset = Some(offset);

        if moved || pointer_down {
            self.still_frames = 0;
            self.settled = false;
            return None;
        }
        if self.settled {
            return None;
        }
        self.still_frames += 1;
        if self.still_frames >= SETTLE_FRAMES {
            self.settled = true;
            return Some(offset);
        }
        None
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

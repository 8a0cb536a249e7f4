use std::collections::BTreeMap;

use vitrine_core::geometry::Point;
use vitrine_core::gesture::TouchPhase;

/// Active touch points keyed by egui's touch id.
#[derive(Default)]
pub struct TouchTracker {
    points: BTreeMap<u64, Point>,
}

impl TouchTracker {
    pub fn is_active(&self) -> bool {
        !self.points.is_empty()
    }

    /// Record one touch event and return the phase and the points still down.
    pub fn apply(
        &mut self,
        id: egui::TouchId,
        phase: egui::TouchPhase,
        pos: egui::Pos2,
    ) -> (TouchPhase, Vec<Point>) {
        let point = Point::new(pos.x, pos.y);
        let phase = match phase {
            egui::TouchPhase::Start => {
                self.points.insert(id.0, point);
                TouchPhase::Start
            }
            egui::TouchPhase::Move => {
                self.points.insert(id.0, point);
                TouchPhase::Move
            }
            egui::TouchPhase::End => {
                self.points.remove(&id.0);
                TouchPhase::End
            }
            egui::TouchPhase::Cancel => {
                self.points.clear();
                TouchPhase::Cancel
            }
        };
        (phase, self.points.values().copied().collect())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

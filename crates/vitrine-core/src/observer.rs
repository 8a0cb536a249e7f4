use std::sync::mpsc;

use serde::Serialize;

/// Notification emitted by a shell after its state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ViewerEvent {
    IndexChanged(usize),
    OpenChanged(bool),
}

/// Receives viewer state changes.
///
/// Called synchronously after the mutation, and only for actual changes.
/// All methods have default no-op implementations.
pub trait ViewerObserver: Send {
    fn on_index_change(&mut self, _index: usize) {}

    fn on_open_change(&mut self, _is_open: bool) {}
}

pub struct NoOpObserver;
impl ViewerObserver for NoOpObserver {}

/// Forward events to another component over a channel. A hung-up receiver
/// is ignored.
impl ViewerObserver for mpsc::Sender<ViewerEvent> {
    fn on_index_change(&mut self, index: usize) {
        let _ = self.send(ViewerEvent::IndexChanged(index));
    }

    fn on_open_change(&mut self, is_open: bool) {
        let _ = self.send(ViewerEvent::OpenChanged(is_open));
    }
}

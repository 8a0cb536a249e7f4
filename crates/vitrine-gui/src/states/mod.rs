mod gallery;
mod mobile;
mod touch;
mod ui;

pub use gallery::{GalleryState, Slide};
pub use mobile::SettleTracker;
pub use touch::TouchTracker;
pub use ui::UIState;

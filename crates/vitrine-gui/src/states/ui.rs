use vitrine_core::shell::PresentationMode;

/// Overall UI state.
pub struct UIState {
    /// Page layout: `Inline` for desktop, `MobileCarousel` for the phone frame.
    pub layout: PresentationMode,

    /// Worker is decoding the current gallery.
    pub loading: bool,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            layout: PresentationMode::Inline,
            loading: false,
            log_messages: Vec::new(),
            show_about: false,
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn is_mobile(&self) -> bool {
        self.layout == PresentationMode::MobileCarousel
    }
}

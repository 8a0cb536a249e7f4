use vitrine_core::shell::Navigate;

use crate::app::VitrineApp;

pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if app.ui_state.loading {
                ui.spinner();
                ui.separator();
            }
            ui.label(format!("Layout: {}", app.ui_state.layout));
            ui.separator();
            ui.label(app.gallery.page.counter_label());
            ui.separator();
            if app.gallery.modal.is_open() {
                ui.label(format!("Viewer: {}", app.gallery.modal.transform()));
            } else {
                ui.label("Viewer: closed");
            }
            ui.separator();
            let lock = if app.page_lock.is_locked() {
                "locked"
            } else {
                "free"
            };
            ui.label(format!("Page scroll: {lock}"));
        });

        ui.add_space(2.0);
    });
}

use vitrine_core::shell::Navigate;

use crate::app::VitrineApp;
use crate::convert::{to_egui_rect, to_point, to_rect};

use super::{fit, paint_texture, thumbnail_strip};

const MAIN_IMAGE_SIDE: f32 = 520.0;
const THUMB_SIDE: f32 = 72.0;

/// The product page. Scrolling is frozen while the modal holds the page lock.
pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let locked = app.page_lock.is_locked();
        egui::ScrollArea::vertical()
            .id_salt("product_page")
            .enable_scrolling(!locked)
            .show(ui, |ui| {
                if app.ui_state.is_mobile() {
                    super::mobile::show(ui, app);
                } else {
                    show_inline(ui, app);
                }
            });
    });
}

fn show_inline(ui: &mut egui::Ui, app: &mut VitrineApp) {
    ui.add_space(12.0);
    ui.horizontal_top(|ui| {
        let side = MAIN_IMAGE_SIDE.min(ui.available_width() * 0.6).max(160.0);
        let (bounds, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        ui.painter()
            .rect_filled(bounds, 4.0, egui::Color32::from_gray(24));

        let index = app.gallery.page.active_index();
        let texture = app.slide_texture(index);
        let fitted = fit(texture, bounds);

        let Some(inline) = app.gallery.page.as_inline_mut() else {
            return;
        };
        match response.hover_pos() {
            Some(pos) if inline.is_hovering() => inline.pointer_move(to_point(pos), to_rect(fitted)),
            Some(pos) => inline.pointer_enter(to_point(pos), to_rect(fitted)),
            None if inline.is_hovering() => inline.pointer_leave(),
            None => {}
        }
        let drawn = to_egui_rect(inline.magnified_rect(to_rect(fitted)));
        let hovering = inline.is_hovering();
        let origin = inline.transform_origin_css();

        paint_texture(&ui.painter_at(bounds), texture, drawn);
        if app.gallery.is_loading(index) {
            ui.put(bounds, egui::Spinner::new());
        }
        if hovering {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ZoomIn);
        }
        if response.clicked() {
            app.gallery.open_modal();
        }

        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.heading("Product gallery");
            ui.add_space(4.0);
            ui.label(app.gallery.page.counter_label());
            ui.label(
                egui::RichText::new(&app.gallery.page.active_image().alt)
                    .color(egui::Color32::from_gray(160)),
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.gallery.page.can_previous(), egui::Button::new("Previous"))
                    .clicked()
                {
                    app.gallery.page.previous();
                }
                if ui
                    .add_enabled(app.gallery.page.can_next(), egui::Button::new("Next"))
                    .clicked()
                {
                    app.gallery.page.next();
                }
            });
            if ui.button("View full screen").clicked() {
                app.gallery.open_modal();
            }
            ui.add_space(12.0);
            ui.small("Hover to magnify, click to open the viewer.");
            if hovering {
                ui.small(format!("transform-origin: {origin}"));
            }
        });
    });

    ui.add_space(12.0);
    let clicked = {
        let thumbs = app.gallery.page.thumbnails();
        thumbnail_strip(ui, "page_thumbnails", app, &thumbs, THUMB_SIDE)
    };
    if let Some(index) = clicked {
        app.gallery.page_go_to(index);
    }
}

use vitrine_core::shell::Navigate;

use crate::app::VitrineApp;

use super::{fit, paint_texture, thumbnail_strip};

const PHONE_WIDTH: f32 = 390.0;
const SLIDE_ASPECT: f32 = 1.0;
const DOT_RADIUS: f32 = 4.0;
const DOT_SPACING: f32 = 16.0;
const THUMB_SIDE: f32 = 56.0;

/// Phone-width swipe carousel with dot indicators.
pub fn show(ui: &mut egui::Ui, app: &mut VitrineApp) {
    let width = PHONE_WIDTH.min(ui.available_width());
    let height = width * SLIDE_ASPECT;
    let locked = app.page_lock.is_locked();

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(width);

        let mut area = egui::ScrollArea::horizontal()
            .id_salt("mobile_carousel")
            .max_width(width)
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .enable_scrolling(!locked);
        if app.gallery.settle.snap_pending {
            if let Some(mobile) = app.gallery.page.as_mobile_mut() {
                area = area.horizontal_scroll_offset(mobile.scroll_offset(width));
            }
            app.gallery.settle.snap_pending = false;
        }

        let mut tapped = false;
        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for index in 0..app.gallery.images().len() {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
                    ui.painter()
                        .rect_filled(rect, 0.0, egui::Color32::from_gray(24));
                    let texture = app.slide_texture(index);
                    paint_texture(ui.painter(), texture, fit(texture, rect));
                    tapped |= response.clicked();
                }
            });
        });

        let pointer_down = ui.input(|i| i.pointer.any_down()) || app.gallery.touches.is_active();
        if let Some(offset) = app.gallery.settle.observe(output.state.offset.x, pointer_down) {
            if let Some(mobile) = app.gallery.page.as_mobile_mut() {
                mobile.on_scroll_settle(offset, width);
            }
            app.gallery.settle.snap_pending = true;
        }
        if !app.gallery.settle.is_settled() || app.gallery.settle.snap_pending {
            ui.ctx().request_repaint();
        }
        if tapped {
            app.gallery.open_modal();
        }

        ui.add_space(8.0);
        if let Some(index) = dots(ui, app) {
            app.gallery.page_go_to(index);
        }
        ui.label(app.gallery.page.counter_label());
    });

    ui.add_space(12.0);
    let clicked = {
        let thumbs = app.gallery.page.thumbnails();
        thumbnail_strip(ui, "mobile_thumbnails", app, &thumbs, THUMB_SIDE)
    };
    if let Some(index) = clicked {
        app.gallery.page_go_to(index);
    }
}

/// Dot indicators. Returns the dot that was clicked.
fn dots(ui: &mut egui::Ui, app: &VitrineApp) -> Option<usize> {
    let flags = app.gallery.page.as_mobile()?.dots();

    let row = egui::vec2(DOT_SPACING * flags.len() as f32, DOT_SPACING);
    let (rect, _) = ui.allocate_exact_size(row, egui::Sense::hover());
    let active_color = ui.visuals().selection.stroke.color;

    let mut clicked = None;
    for (index, active) in flags.into_iter().enumerate() {
        let center = egui::pos2(
            rect.min.x + DOT_SPACING * (index as f32 + 0.5),
            rect.center().y,
        );
        let hit = egui::Rect::from_center_size(center, egui::vec2(DOT_SPACING, DOT_SPACING));
        let response = ui.interact(hit, ui.id().with(("dot", index)), egui::Sense::click());
        let color = if active {
            active_color
        } else {
            egui::Color32::from_gray(90)
        };
        ui.painter().circle_filled(center, DOT_RADIUS, color);
        if response.clicked() {
            clicked = Some(index);
        }
    }
    clicked
}

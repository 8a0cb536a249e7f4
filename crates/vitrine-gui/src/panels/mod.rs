pub mod menu_bar;
pub mod mobile;
pub mod modal;
pub mod page;
pub mod status;

use vitrine_core::shell::Thumbnail;

use crate::app::{SlideTexture, VitrineApp};
use crate::convert::{to_egui_rect, to_rect};

/// Rect inside `bounds` that keeps the texture's aspect ratio.
pub(crate) fn fit(texture: SlideTexture, bounds: egui::Rect) -> egui::Rect {
    to_egui_rect(to_rect(bounds).fit_content(texture.size.x, texture.size.y))
}

pub(crate) fn paint_texture(painter: &egui::Painter, texture: SlideTexture, rect: egui::Rect) {
    painter.image(
        texture.id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Row of clickable thumbnails. Returns the index that was clicked.
pub(crate) fn thumbnail_strip(
    ui: &mut egui::Ui,
    id_salt: &str,
    app: &VitrineApp,
    thumbs: &[Thumbnail<'_>],
    side: f32,
) -> Option<usize> {
    let mut clicked = None;
    egui::ScrollArea::horizontal()
        .id_salt(id_salt)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for thumb in thumbs {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
                    ui.painter().rect_filled(rect, 2.0, egui::Color32::from_gray(24));
                    let texture = app.slide_texture(thumb.index);
                    paint_texture(ui.painter(), texture, fit(texture, rect.shrink(2.0)));

                    let stroke = if thumb.active {
                        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::from_gray(60))
                    };
                    ui.painter()
                        .rect_stroke(rect, 2.0, stroke, egui::StrokeKind::Inside);

                    if response.on_hover_text(&thumb.image.alt).clicked() {
                        clicked = Some(thumb.index);
                    }
                }
            });
        });
    clicked
}

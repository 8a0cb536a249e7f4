use vitrine_core::gesture::ZoomPhase;
use vitrine_core::input::{InputEvent, Key, KeyFocus};
use vitrine_core::shell::{CloseReason, Navigate};

use crate::app::VitrineApp;
use crate::convert::{to_egui_rect, to_point, to_rect};

use super::{fit, paint_texture, thumbnail_strip};

const STAGE_MARGIN_X: f32 = 72.0;
const STAGE_MARGIN_TOP: f32 = 56.0;
const STAGE_MARGIN_BOTTOM: f32 = 140.0;
const THUMB_SIDE: f32 = 64.0;

const KEY_MAP: [(egui::Key, Key); 3] = [
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::Escape, Key::Escape),
];

/// Full-screen viewer overlay, drawn above the page while the modal is open.
pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    if !app.gallery.modal.is_open() {
        return;
    }

    for event in key_events(ctx) {
        app.gallery.modal.handle_input(&event);
    }
    if !app.gallery.modal.is_open() {
        return;
    }

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("modal_viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(235));
            let backdrop = ui.interact(screen, ui.id().with("backdrop"), egui::Sense::click());

            let stage = egui::Rect::from_min_max(
                screen.min + egui::vec2(STAGE_MARGIN_X, STAGE_MARGIN_TOP),
                screen.max - egui::vec2(STAGE_MARGIN_X, STAGE_MARGIN_BOTTOM),
            );
            let response = ui.interact(stage, ui.id().with("stage"), egui::Sense::click_and_drag());

            for event in stage_events(ui, &response, stage, app) {
                app.gallery.modal.handle_input(&event);
            }
            draw_stage(ui, app, stage, &response);
            draw_chrome(ui, app, screen, stage);

            if backdrop.clicked() {
                app.gallery.modal.backdrop_click();
            }
        });
}

fn key_events(ctx: &egui::Context) -> Vec<InputEvent> {
    let focus = if ctx.wants_keyboard_input() {
        KeyFocus::TextInput
    } else {
        KeyFocus::Viewer
    };
    KEY_MAP
        .iter()
        .filter(|(egui_key, _)| ctx.input(|i| i.key_pressed(*egui_key)))
        .map(|(_, key)| InputEvent::Key { key: *key, focus })
        .collect()
}

/// Translate this frame's pointer, wheel and touch input over the stage.
fn stage_events(
    ui: &egui::Ui,
    response: &egui::Response,
    stage: egui::Rect,
    app: &mut VitrineApp,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    let touches: Vec<_> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                egui::Event::Touch { id, phase, pos, .. } => Some((*id, *phase, *pos)),
                _ => None,
            })
            .collect()
    });
    let touching = !touches.is_empty() || app.gallery.touches.is_active();
    for (id, phase, pos) in touches {
        if phase == egui::TouchPhase::Start && !stage.contains(pos) {
            continue;
        }
        let (phase, touches) = app.gallery.touches.apply(id, phase, pos);
        events.push(InputEvent::Touch { phase, touches });
    }

    if response.hovered() {
        // egui reports scroll up as positive, wheel deltaY is the opposite.
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            events.push(InputEvent::Wheel { delta_y: -scroll });
        }
    }

    if response.double_clicked() {
        events.push(InputEvent::DoubleClick);
    }

    // Touch drives its own gestures; skip the pointer emulation egui derives from it.
    if !touching {
        if response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(pos) = origin {
                events.push(InputEvent::PointerDown { pos: to_point(pos) });
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(InputEvent::PointerMove { pos: to_point(pos) });
            }
        }
        if response.drag_stopped() {
            events.push(InputEvent::PointerUp);
        }
    }

    events
}

fn draw_stage(ui: &egui::Ui, app: &VitrineApp, stage: egui::Rect, response: &egui::Response) {
    let modal = &app.gallery.modal;
    let texture = app.slide_texture(modal.active_index());
    let fitted = fit(texture, stage);
    let drawn = to_egui_rect(modal.transform().apply_to_rect(to_rect(fitted)));
    paint_texture(&ui.painter_at(stage), texture, drawn);

    if response.hovered() {
        let icon = match modal.phase() {
            ZoomPhase::Idle => egui::CursorIcon::ZoomIn,
            ZoomPhase::Zoomed => egui::CursorIcon::Grab,
            ZoomPhase::Dragging => egui::CursorIcon::Grabbing,
        };
        ui.ctx().set_cursor_icon(icon);
    }
}

/// Counter, caption, close and arrow buttons, thumbnail strip.
fn draw_chrome(ui: &mut egui::Ui, app: &mut VitrineApp, screen: egui::Rect, stage: egui::Rect) {
    let text_color = egui::Color32::from_gray(220);
    ui.painter().text(
        egui::pos2(screen.center().x, screen.min.y + STAGE_MARGIN_TOP / 2.0),
        egui::Align2::CENTER_CENTER,
        app.gallery.modal.counter_label(),
        egui::FontId::proportional(16.0),
        text_color,
    );
    ui.painter().text(
        egui::pos2(screen.center().x, stage.max.y + 16.0),
        egui::Align2::CENTER_CENTER,
        &app.gallery.modal.active_image().alt,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(160),
    );

    let close_rect = egui::Rect::from_center_size(
        egui::pos2(screen.max.x - 32.0, screen.min.y + 28.0),
        egui::vec2(32.0, 32.0),
    );
    if ui.put(close_rect, egui::Button::new("\u{2715}")).clicked() {
        app.gallery.modal.close(CloseReason::Explicit);
        return;
    }

    let arrow = egui::vec2(40.0, 64.0);
    let prev_rect =
        egui::Rect::from_center_size(egui::pos2(screen.min.x + 36.0, stage.center().y), arrow);
    let next_rect =
        egui::Rect::from_center_size(egui::pos2(screen.max.x - 36.0, stage.center().y), arrow);
    if arrow_button(ui, prev_rect, "\u{2039}", app.gallery.modal.can_previous()) {
        app.gallery.modal.previous();
    }
    if arrow_button(ui, next_rect, "\u{203a}", app.gallery.modal.can_next()) {
        app.gallery.modal.next();
    }

    let strip = egui::Rect::from_min_max(
        egui::pos2(screen.min.x + STAGE_MARGIN_X, stage.max.y + 36.0),
        egui::pos2(screen.max.x - STAGE_MARGIN_X, screen.max.y - 8.0),
    );
    let clicked = ui
        .scope_builder(egui::UiBuilder::new().max_rect(strip), |ui| {
            let thumbs = app.gallery.modal.thumbnails();
            thumbnail_strip(ui, "modal_thumbnails", app, &thumbs, THUMB_SIDE)
        })
        .inner;
    if let Some(index) = clicked {
        app.gallery.modal.go_to(index as i64);
    }
}

fn arrow_button(ui: &mut egui::Ui, rect: egui::Rect, label: &str, enabled: bool) -> bool {
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.add_enabled(enabled, egui::Button::new(label).min_size(rect.size()))
            .clicked()
    })
    .inner
}

use vitrine_core::shell::PresentationMode;

use crate::app::VitrineApp;
use crate::launch::read_config;
use crate::messages::WorkerResult;
use crate::workers::send;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut VitrineApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Images...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_images(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut layout = app.ui_state.layout;
                ui.radio_value(&mut layout, PresentationMode::Inline, "Desktop layout");
                ui.radio_value(&mut layout, PresentationMode::MobileCarousel, "Mobile layout");
                if layout != app.ui_state.layout {
                    ui.close();
                    app.set_layout(layout);
                }

                ui.separator();

                if ui
                    .add_enabled(!app.gallery.modal.is_open(), egui::Button::new("Open Viewer"))
                    .clicked()
                {
                    ui.close();
                    app.gallery.open_modal();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_images(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_images(ctx: &egui::Context, app: &mut VitrineApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_files()
        {
            send(&result_tx, &ctx, WorkerResult::FilesPicked { paths });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut VitrineApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match read_config(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("{e:#}"),
            },
        };
        send(&result_tx, &ctx, result);
    });
}

fn export_config(app: &mut VitrineApp) {
    let config = app.config.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("vitrine.toml")
            .save_file()
        {
            if let Ok(content) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, content);
            }
        }
    });
}

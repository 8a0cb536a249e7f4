use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use vitrine_core::config::ViewerConfig;
use vitrine_core::image_set::ImageSet;
use vitrine_core::scroll_lock::CountingScrollLock;
use vitrine_core::shell::PresentationMode;

use crate::convert::{decoded_to_color_image, placeholder_color_image};
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{GalleryState, Slide, UIState};
use crate::workers;

const PLACEHOLDER_SIDE: usize = 256;
const FALLBACK_ALT: &str = "Product image";

/// A texture ready to paint, with its pixel size.
#[derive(Clone, Copy)]
pub struct SlideTexture {
    pub id: egui::TextureId,
    pub size: egui::Vec2,
}

pub struct VitrineApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub config: ViewerConfig,
    /// Page scroll lock held by the open modal.
    pub page_lock: CountingScrollLock,
    pub gallery: GalleryState,
    placeholder: egui::TextureHandle,
    next_generation: u64,
}

impl VitrineApp {
    pub fn new(
        ctx: &egui::Context,
        config: ViewerConfig,
        paths: Vec<PathBuf>,
    ) -> anyhow::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;

        let page_lock = CountingScrollLock::new();
        let ui_state = UIState::default();
        let gallery = GalleryState::new(
            Arc::new(ImageSet::new(Vec::new())),
            0,
            ui_state.layout,
            &config,
            &page_lock,
        )?;
        let placeholder = ctx.load_texture(
            "placeholder",
            placeholder_color_image(PLACEHOLDER_SIDE),
            egui::TextureOptions::NEAREST,
        );

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state,
            config,
            page_lock,
            gallery,
            placeholder,
            next_generation: 1,
        };
        app.load_gallery(paths);
        Ok(app)
    }

    /// Replace the gallery with `paths` and start decoding them.
    pub fn load_gallery(&mut self, paths: Vec<PathBuf>) {
        let images = Arc::new(ImageSet::from_uris(
            paths.iter().map(|p| p.display().to_string()),
            FALLBACK_ALT,
        ));
        let generation = self.next_generation;
        self.next_generation += 1;

        // Dropping the old gallery closes its modal and frees the page lock.
        self.gallery = match GalleryState::new(
            images.clone(),
            generation,
            self.ui_state.layout,
            &self.config,
            &self.page_lock,
        ) {
            Ok(gallery) => gallery,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };

        if images.is_placeholder() {
            self.gallery.slides = vec![Slide::Failed];
            self.ui_state.add_log("No images, showing placeholder".into());
            return;
        }

        self.ui_state.loading = true;
        self.ui_state
            .add_log(format!("Loading {} images", images.len()));
        self.send_command(WorkerCommand::LoadImages {
            generation,
            images: images.iter().cloned().collect(),
            base: std::env::current_dir().unwrap_or_default(),
        });
    }

    /// Rebuild the viewers with a new config, keeping textures and an open
    /// modal. A rejected config leaves the current one in place.
    fn apply_config(&mut self, config: ViewerConfig) {
        match self
            .gallery
            .reload(self.ui_state.layout, &config, &self.page_lock)
        {
            Ok(()) => {
                self.config = config;
                self.ui_state.add_log("Config imported".into());
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn set_layout(&mut self, layout: PresentationMode) {
        if self.ui_state.layout == layout {
            return;
        }
        if let Err(e) = self.gallery.set_layout(layout, &self.config) {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        self.ui_state.layout = layout;
        self.ui_state.add_log(format!("Layout: {layout}"));
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImagesLoaded { generation, images } => {
                    if generation != self.gallery.generation {
                        continue;
                    }
                    for loaded in images {
                        let slide = match loaded.result {
                            Ok(decoded) => Slide::Ready(ctx.load_texture(
                                format!("slide-{generation}-{}", loaded.index),
                                decoded_to_color_image(&decoded),
                                egui::TextureOptions::LINEAR,
                            )),
                            Err(message) => {
                                self.ui_state
                                    .add_log(format!("Placeholder for {message}"));
                                Slide::Failed
                            }
                        };
                        if let Some(entry) = self.gallery.slides.get_mut(loaded.index) {
                            *entry = slide;
                        }
                    }
                    self.ui_state.loading = false;
                }
                WorkerResult::FilesPicked { paths } => {
                    self.load_gallery(paths);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn slide_texture(&self, index: usize) -> SlideTexture {
        let texture = self.gallery.texture(index).unwrap_or(&self.placeholder);
        let [w, h] = texture.size();
        SlideTexture {
            id: texture.id(),
            size: egui::vec2(w as f32, h as f32),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::page::show(ctx, self);
        panels::modal::show(ctx, self);

        for line in self.gallery.drain_events() {
            self.ui_state.add_log(line);
        }

        if self.ui_state.show_about {
            egui::Window::new("About Vitrine")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Vitrine");
                        ui.label("Product Image Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

mod app;
mod convert;
mod launch;
mod messages;
mod panels;
mod states;
mod workers;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let launch = launch::LaunchArgs::parse();
    let config = launch.load_config()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Vitrine"),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::VitrineApp::new(
                &cc.egui_ctx,
                config,
                launch.images,
            )?))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start viewer window: {e}"))
}

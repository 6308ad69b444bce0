mod access;
mod app;
mod content;
mod form;
mod reveal;
mod scroll;
mod settings;
mod state;
mod theme;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    // eframe::Error is not Send + Sync with the glow backend, so it cannot
    // cross into anyhow via `?`.
    eframe::run_native(
        "CV Viewer",
        native_options,
        Box::new(|cc| Box::new(app::CvApp::new(cc))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}

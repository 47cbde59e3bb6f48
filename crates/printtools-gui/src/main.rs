mod app;
mod convert;
mod fonts;
mod messages;
mod panels;
mod state;
mod workers;

use printtools_core::route::Page;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional start page, e.g. `printtools-gui /image-tiler`.
    let page = std::env::args()
        .nth(1)
        .map(|path| Page::from_path(&path))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("PrintTools"),
        ..Default::default()
    };

    eframe::run_native(
        "PrintTools",
        options,
        Box::new(move |cc| Ok(Box::new(app::PrintToolsApp::new(cc, page)?))),
    )
}

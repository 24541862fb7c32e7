mod config;
mod core;
mod rendering;
mod ui;

use config::plot::PlotConfig;
use ui::app::TangentApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match PlotConfig::load() {
        Ok(config) => config,
        Err(error) => {
            log::error!("内嵌配置非法，使用默认值: {error}");
            PlotConfig::default()
        }
    };
    log::info!("Tangent Line Calculator v{} 启动", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tangent Line Calculator")
            .with_inner_size(config.window_size)
            .with_app_id("tangent-line"),
        ..Default::default()
    };

    eframe::run_native(
        "Tangent Line Calculator",
        options,
        Box::new(move |cc| Box::new(TangentApp::new(cc, &config))),
    )
}

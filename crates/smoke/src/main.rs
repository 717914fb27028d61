mod app;
mod logging;

use app::App;
use tracing::info;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    info!("smoke starting, version {}", env!("CARGO_PKG_VERSION"));

    let config = smoke_config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).and_then(|app| app.run(terminal));
    ratatui::restore();

    info!("smoke shutdown complete");
    result
}

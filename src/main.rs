#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use sparse_life::{App, Board, Config};

fn main() -> Result<()> {
    use eframe::egui::ViewportBuilder;

    env_logger::init();

    let board = match std::env::args().nth(1) {
        Some(path) => {
            let data = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
            Board::from_rle(&data).with_context(|| format!("failed to parse {path}"))?
        }
        None => Board::new(),
    };
    log::info!("starting with {} live cells", board.population());

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(Config::MIN_WINDOW_SIZE),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(board)))),
    )
    .map_err(|e| anyhow!("failed to run the window: {e}"))
}

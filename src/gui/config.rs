use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [800., 640.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [320., 240.];

    pub const PIXELS_PER_CELL: f32 = 10.;
    pub const MIN_SCALE: f32 = 0.1;
    pub const MAX_SCALE: f32 = 8.;
    pub const ZOOM_STEP: f32 = 1.1;
    pub const SCROLL_SCALE: f32 = 50.;
    pub const FIT_MARGIN: i64 = 2;

    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    pub const LIVE_COLOR: Color32 = Color32::BLUE;
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    // sky blue
    pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(135, 206, 235);

    pub const RANDOM_SIDE: u32 = 48;
    pub const RANDOM_FILL_RATE: f64 = 0.3;
}

mod app;
mod config;
mod draw;
mod playback;
mod viewport;

pub use app::App;
pub use config::Config;
pub use playback::Playback;
pub use viewport::Viewport;

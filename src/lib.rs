mod engine;
mod gui;
mod utils;

pub use engine::{Board, Cell, SharedBoard, NEIGHBOR_OFFSETS};
pub use gui::{App, Config, Playback, Viewport};
pub use utils::{find_pattern, parse_rle, Pattern, PATTERNS};

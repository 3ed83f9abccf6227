mod parse_rle;
mod patterns;

pub use parse_rle::parse_rle;
pub use patterns::{find_pattern, Pattern, PATTERNS};

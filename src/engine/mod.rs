mod board;
mod cell;
mod shared;

pub use board::Board;
pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use shared::SharedBoard;

mod board;
mod color;
mod r#move;
mod piece;
mod role;
mod square;

pub use board::*;
pub use color::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use square::*;

mod action;
mod decompose;
mod rearrange;

pub use action::*;
pub use decompose::*;
pub use rearrange::*;

mod encoder;
mod frame;
mod gpio;
mod probe;
mod sysfs;
mod transmitter;

pub use encoder::*;
pub use frame::*;
pub use gpio::*;
pub use probe::*;
pub use sysfs::*;
pub use transmitter::*;

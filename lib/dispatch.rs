mod dispatcher;
mod layout;
mod protocol;

pub use dispatcher::*;
pub use layout::*;
pub use protocol::*;

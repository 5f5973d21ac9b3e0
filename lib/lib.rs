/// Chess domain types.
pub mod chess;
/// Sequencing of physical actions over the wire.
pub mod dispatch;
/// Decomposition of chess moves into physical actions.
pub mod plan;
/// Binary command frames and their serial transmission.
pub mod wire;

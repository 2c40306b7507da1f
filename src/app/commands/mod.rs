pub mod enhance;
pub mod preview;

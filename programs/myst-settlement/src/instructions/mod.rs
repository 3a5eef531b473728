pub mod admin;
pub mod betting;
pub mod settlement;

pub use admin::*;
pub use betting::*;
pub use settlement::*;

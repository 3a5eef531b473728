pub mod bet;
pub mod ledger;
pub mod market;
pub mod platform;
pub mod pools;

pub use bet::*;
pub use ledger::*;
pub use market::*;
pub use platform::*;
pub use pools::*;

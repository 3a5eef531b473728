pub mod resolve_market;
pub mod settle_bet;

pub use resolve_market::*;
pub use settle_bet::*;

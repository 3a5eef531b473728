pub mod create_market;
pub mod grant_myst;
pub mod init_platform;
pub mod pause;
pub mod treasury_transfer;
pub mod update_fees;

pub use create_market::*;
pub use grant_myst::*;
pub use init_platform::*;
pub use pause::*;
pub use treasury_transfer::*;
pub use update_fees::*;

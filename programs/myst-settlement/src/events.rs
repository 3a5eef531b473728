use anchor_lang::prelude::*;

use crate::state::ledger::LedgerKind;
use crate::state::platform::FeeSplit;
use crate::state::pools::PoolKey;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub fee_bps: u16,
    pub fee_split: FeeSplit,
}

#[event]
pub struct FeeScheduleUpdated {
    pub fee_bps: u16,
    pub fee_split: FeeSplit,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub authority: Pubkey,
    pub title: String,
    pub options: Vec<String>,
}

#[event]
pub struct MystGranted {
    pub user: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub bet_id: u32,
    pub user: Pubkey,
    pub option: u8,
    pub amount: u64,
    pub option_pool_total: u64,
    pub timestamp: i64,
}

/// The full economic breakdown of a resolution — winners count, total
/// payout and the fee distribution — in one record.
#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub winning_option: u8,
    pub winning_label: String,
    pub refund_mode: bool,
    pub winners: u32,
    pub total_pool: u64,
    pub winning_total: u64,
    pub losing_total: u64,
    pub platform_fee: u64,
    pub total_payout: u64,
    pub treasury_cut: u64,
    pub leaderboard_cut: u64,
    pub referral_cut: u64,
    pub wheel_cut: u64,
    pub resolved_at: i64,
}

#[event]
pub struct BetSettled {
    pub market_id: u64,
    pub bet_id: u32,
    pub user: Pubkey,
    pub kind: LedgerKind,
    pub payout: u64,
    pub settled_bets: u32,
    pub remaining_pool: u64,
}

#[event]
pub struct TreasuryTransferred {
    pub from_pool: PoolKey,
    pub to_pool: PoolKey,
    pub amount: u64,
    pub new_from_balance: u64,
    pub new_to_balance: u64,
}

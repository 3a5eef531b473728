use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::platform::FeeSplit;
use state::pools::PoolKey;

declare_id!("F4JxG7aePgrKKwmVM9tXHUadeTKNLXwFMZFQoiBowLcr");

#[program]
pub mod myst_settlement {
    use super::*;

    pub fn init_platform(ctx: Context<InitPlatform>, fee_bps: u16, fee_split: FeeSplit) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(ctx, fee_bps, fee_split)
    }

    pub fn update_fees(ctx: Context<UpdateFees>, new_fee_bps: u16, new_fee_split: FeeSplit) -> Result<()> {
        instructions::admin::update_fees::process_update_fees(ctx, new_fee_bps, new_fee_split)
    }

    pub fn create_market(ctx: Context<CreateMarket>, market_id: u64, title: String, options: Vec<String>) -> Result<()> {
        instructions::admin::create_market::process_create_market(ctx, market_id, title, options)
    }

    pub fn grant_myst(ctx: Context<GrantMyst>, amount: u64) -> Result<()> {
        instructions::admin::grant_myst::process_grant_myst(ctx, amount)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, market_id: u64, option: u8, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, market_id, option, amount)
    }

    pub fn resolve_market(ctx: Context<ResolveMarket>, market_id: u64, winning_option: u8) -> Result<()> {
        instructions::settlement::resolve_market::process_resolve_market(ctx, market_id, winning_option)
    }

    pub fn settle_bet(ctx: Context<SettleBet>, market_id: u64) -> Result<()> {
        instructions::settlement::settle_bet::process_settle_bet(ctx, market_id)
    }

    pub fn treasury_transfer(ctx: Context<TreasuryTransfer>, from_pool: PoolKey, to_pool: PoolKey, amount: u64) -> Result<()> {
        instructions::admin::treasury_transfer::process_treasury_transfer(ctx, from_pool, to_pool, amount)
    }

    pub fn pause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::pause_platform(ctx)
    }

    pub fn unpause_platform(ctx: Context<PlatformAdmin>) -> Result<()> {
        instructions::admin::pause::unpause_platform(ctx)
    }
}

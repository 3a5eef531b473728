use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::MarketResolved;
use crate::state::{Market, PlatformConfig, PoolKey, PoolRegistry};
use crate::utils::settlement::FeeCuts;

/// Closes a market: computes the fee and the win pool, distributes the fee
/// across the accumulation pools and flips the market to Resolved, all in
/// one instruction. Per-bet payouts are materialized afterwards by
/// `settle_bet` from the snapshot frozen here.
#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct ResolveMarket<'info> {
    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ SettleError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"pools"],
        bump = pool_registry.bump,
    )]
    pub pool_registry: Account<'info, PoolRegistry>,

    pub admin: Signer<'info>,
}

pub fn process_resolve_market(
    ctx: Context<ResolveMarket>,
    market_id: u64,
    winning_option: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let platform = &ctx.accounts.platform_config;
    let market = &mut ctx.accounts.market;

    let plan = market.begin_resolution(winning_option, platform.fee_bps, clock.unix_timestamp)?;
    let cuts = FeeCuts::split(plan.platform_fee, &platform.fee_split)?;

    if plan.platform_fee > 0 {
        let pools = &mut ctx.accounts.pool_registry;
        pools.credit(PoolKey::Treasury, cuts.treasury)?;
        pools.credit(PoolKey::Leaderboard, cuts.leaderboard)?;
        pools.credit(PoolKey::Referral, cuts.referral)?;
        // wheel credit also writes the legacy myst_wheel alias
        pools.credit(PoolKey::Wheel, cuts.wheel)?;
    }

    emit!(MarketResolved {
        market_id,
        winning_option,
        winning_label: market.options[winning_option as usize].clone(),
        refund_mode: plan.refund_mode,
        winners: market.winners,
        total_pool: plan.total_pool,
        winning_total: plan.winning_total,
        losing_total: plan.losing_total,
        platform_fee: plan.platform_fee,
        total_payout: plan.win_pool,
        treasury_cut: cuts.treasury,
        leaderboard_cut: cuts.leaderboard,
        referral_cut: cuts.referral,
        wheel_cut: cuts.wheel,
        resolved_at: clock.unix_timestamp,
    });

    Ok(())
}

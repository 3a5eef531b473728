use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::PlatformInitialized;
use crate::state::{FeeSplit, PlatformConfig, PoolRegistry};

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(
        init,
        seeds = [b"platform_config"],
        bump,
        payer = admin,
        space = PlatformConfig::LEN
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        init,
        seeds = [b"pools"],
        bump,
        payer = admin,
        space = PoolRegistry::LEN
    )]
    pub pool_registry: Account<'info, PoolRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_platform(
    ctx: Context<InitPlatform>,
    fee_bps: u16,
    fee_split: FeeSplit,
) -> Result<()> {
    require!(fee_bps <= PlatformConfig::MAX_FEE_BPS, SettleError::FeeExceedsMax);
    fee_split.validate()?;

    let platform = &mut ctx.accounts.platform_config;
    platform.admin = ctx.accounts.admin.key();
    platform.fee_bps = fee_bps;
    platform.fee_split = fee_split;
    platform.paused = false;
    platform.total_markets = 0;
    platform.bump = ctx.bumps.platform_config;

    // pools start empty; only fee distribution and transfers move them
    ctx.accounts.pool_registry.bump = ctx.bumps.pool_registry;

    emit!(PlatformInitialized {
        admin: platform.admin,
        fee_bps,
        fee_split,
    });

    Ok(())
}

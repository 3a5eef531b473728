use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::FeeScheduleUpdated;
use crate::state::{FeeSplit, PlatformConfig};

#[derive(Accounts)]
pub struct UpdateFees<'info> {
    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ SettleError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub admin: Signer<'info>,
}

pub fn process_update_fees(
    ctx: Context<UpdateFees>,
    new_fee_bps: u16,
    new_fee_split: FeeSplit,
) -> Result<()> {
    require!(new_fee_bps <= PlatformConfig::MAX_FEE_BPS, SettleError::FeeExceedsMax);
    new_fee_split.validate()?;

    let platform = &mut ctx.accounts.platform_config;
    platform.fee_bps = new_fee_bps;
    platform.fee_split = new_fee_split;

    emit!(FeeScheduleUpdated {
        fee_bps: new_fee_bps,
        fee_split: new_fee_split,
    });

    Ok(())
}

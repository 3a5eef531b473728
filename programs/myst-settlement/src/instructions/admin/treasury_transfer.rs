use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::TreasuryTransferred;
use crate::state::{PlatformConfig, PoolKey, PoolRegistry};

/// Administrative pool-to-pool move, out of band from market settlement but
/// under the same non-negative-balance rule. Both legs land in one
/// instruction or not at all.
#[derive(Accounts)]
pub struct TreasuryTransfer<'info> {
    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ SettleError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [b"pools"],
        bump = pool_registry.bump,
    )]
    pub pool_registry: Account<'info, PoolRegistry>,

    pub admin: Signer<'info>,
}

pub fn process_treasury_transfer(
    ctx: Context<TreasuryTransfer>,
    from_pool: PoolKey,
    to_pool: PoolKey,
    amount: u64,
) -> Result<()> {
    let (new_from_balance, new_to_balance) =
        ctx.accounts.pool_registry.transfer(from_pool, to_pool, amount)?;

    emit!(TreasuryTransferred {
        from_pool,
        to_pool,
        amount,
        new_from_balance,
        new_to_balance,
    });

    Ok(())
}

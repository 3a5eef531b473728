use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::MystGranted;
use crate::state::{LedgerEntry, LedgerKind, PlatformConfig, UserAccount};
use crate::utils::math::to_signed;

/// Credits MYST to a user out of band — the ledger's inflow, since deposit
/// detection lives outside this program.
#[derive(Accounts)]
pub struct GrantMyst<'info> {
    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ SettleError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// CHECK: recipient identity only; no data is read or written
    pub recipient: AccountInfo<'info>,

    #[account(
        init_if_needed,
        seeds = [b"user", recipient.key().as_ref()],
        bump,
        payer = admin,
        space = UserAccount::LEN
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init,
        seeds = [
            b"ledger",
            recipient.key().as_ref(),
            user_account.entries.to_le_bytes().as_ref()
        ],
        bump,
        payer = admin,
        space = LedgerEntry::LEN
    )]
    pub ledger_entry: Account<'info, LedgerEntry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_grant_myst(ctx: Context<GrantMyst>, amount: u64) -> Result<()> {
    require!(amount > 0, SettleError::InvalidAmount);

    let clock = Clock::get()?;
    let user_account = &mut ctx.accounts.user_account;
    user_account.owner = ctx.accounts.recipient.key();
    user_account.bump = ctx.bumps.user_account;

    let seq = user_account.next_seq()?;
    let new_balance = user_account.credit(amount)?;

    let entry = &mut ctx.accounts.ledger_entry;
    entry.user = user_account.owner;
    entry.seq = seq;
    entry.kind = LedgerKind::AdminGrant;
    entry.amount = to_signed(amount)?;
    entry.market = None;
    entry.bet = None;
    entry.win_pool = 0;
    entry.pool_total = 0;
    entry.timestamp = clock.unix_timestamp;
    entry.bump = ctx.bumps.ledger_entry;

    emit!(MystGranted {
        user: user_account.owner,
        amount,
        new_balance,
    });

    Ok(())
}

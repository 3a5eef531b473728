use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::BetSettled;
use crate::state::{Bet, LedgerEntry, Market, UserAccount};
use crate::utils::math::to_signed;

/// Materializes one bet's payout from the resolution snapshot: writes
/// `myst_payout`, credits the bettor's balance and appends the matching
/// ledger entry in the same instruction. Anyone may crank this; the amounts
/// are fixed by the snapshot.
#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct SettleBet<'info> {
    #[account(
        mut,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [
            b"bet",
            market.key().as_ref(),
            bet.bet_id.to_le_bytes().as_ref()
        ],
        bump = bet.bump,
        constraint = bet.market == market.key() @ SettleError::BetMarketMismatch,
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        seeds = [b"user", bet.bettor.as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == bet.bettor @ SettleError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init,
        seeds = [
            b"ledger",
            bet.bettor.as_ref(),
            user_account.entries.to_le_bytes().as_ref()
        ],
        bump,
        payer = payer,
        space = LedgerEntry::LEN
    )]
    pub ledger_entry: Account<'info, LedgerEntry>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_settle_bet(ctx: Context<SettleBet>, market_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let market = &mut ctx.accounts.market;
    let bet = &mut ctx.accounts.bet;

    let (payout, kind) = market.settle_payout(bet)?;

    let user_account = &mut ctx.accounts.user_account;
    let seq = user_account.next_seq()?;
    if payout > 0 {
        user_account.credit(payout)?;
    }

    let entry = &mut ctx.accounts.ledger_entry;
    entry.user = bet.bettor;
    entry.seq = seq;
    entry.kind = kind;
    entry.amount = to_signed(payout)?;
    entry.market = Some(market.key());
    entry.bet = Some(bet.key());
    entry.win_pool = market.win_pool;
    entry.pool_total = market.payout_denominator();
    entry.timestamp = clock.unix_timestamp;
    entry.bump = ctx.bumps.ledger_entry;

    emit!(BetSettled {
        market_id,
        bet_id: bet.bet_id,
        user: bet.bettor,
        kind,
        payout,
        settled_bets: market.settled_bets,
        remaining_pool: market.win_pool - market.paid_out,
    });

    Ok(())
}

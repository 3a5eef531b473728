use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::BetPlaced;
use crate::state::{Bet, LedgerEntry, LedgerKind, Market, PlatformConfig, UserAccount};
use crate::utils::math::to_signed;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct PlaceBet<'info> {
    #[account(
        seeds = [b"platform_config"],
        bump = platform_config.bump,
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
        seeds = [b"user", bettor.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    // bet_id is the market's running bet counter at entry
    #[account(
        init,
        seeds = [
            b"bet",
            market.key().as_ref(),
            market.bets.to_le_bytes().as_ref()
        ],
        bump,
        payer = bettor,
        space = Bet::LEN
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        init,
        seeds = [
            b"ledger",
            bettor.key().as_ref(),
            user_account.entries.to_le_bytes().as_ref()
        ],
        bump,
        payer = bettor,
        space = LedgerEntry::LEN
    )]
    pub ledger_entry: Account<'info, LedgerEntry>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_place_bet(
    ctx: Context<PlaceBet>,
    market_id: u64,
    option: u8,
    amount: u64,
) -> Result<()> {
    require!(!ctx.accounts.platform_config.paused, SettleError::PlatformPaused);

    let clock = Clock::get()?;
    let market = &mut ctx.accounts.market;
    let bet_id = market.record_bet(option, amount)?;

    let user_account = &mut ctx.accounts.user_account;
    user_account.debit(amount)?;
    let seq = user_account.next_seq()?;

    let bet = &mut ctx.accounts.bet;
    bet.market = market.key();
    bet.bettor = ctx.accounts.bettor.key();
    bet.bet_id = bet_id;
    bet.option = option;
    bet.myst_bet = amount;
    bet.myst_payout = None;
    bet.settled = false;
    bet.placed_at = clock.unix_timestamp;
    bet.bump = ctx.bumps.bet;

    let entry = &mut ctx.accounts.ledger_entry;
    entry.user = bet.bettor;
    entry.seq = seq;
    entry.kind = LedgerKind::Stake;
    entry.amount = -to_signed(amount)?;
    entry.market = Some(market.key());
    entry.bet = Some(bet.key());
    entry.win_pool = 0;
    entry.pool_total = 0;
    entry.timestamp = clock.unix_timestamp;
    entry.bump = ctx.bumps.ledger_entry;

    emit!(BetPlaced {
        market_id,
        bet_id,
        user: bet.bettor,
        option,
        amount,
        option_pool_total: market.option_pools[option as usize],
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

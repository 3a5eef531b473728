use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::events::MarketCreated;
use crate::state::{Market, MarketStatus, PlatformConfig, MAX_OPTIONS, MAX_OPTION_LABEL, MAX_TITLE};

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CreateMarket<'info> {
    #[account(
        mut,
        seeds = [b"platform_config"],
        bump = platform_config.bump,
        constraint = platform_config.admin == admin.key() @ SettleError::Unauthorized
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        init,
        seeds = [b"market", market_id.to_le_bytes().as_ref()],
        bump,
        payer = admin,
        space = Market::LEN
    )]
    pub market: Account<'info, Market>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    title: String,
    options: Vec<String>,
) -> Result<()> {
    require!(title.len() <= MAX_TITLE, SettleError::TitleTooLong);
    require!(options.len() >= 2, SettleError::NotEnoughOptions);
    require!(options.len() <= MAX_OPTIONS, SettleError::TooManyOptions);
    for label in &options {
        require!(label.len() <= MAX_OPTION_LABEL, SettleError::OptionLabelTooLong);
    }

    let market = &mut ctx.accounts.market;
    market.market_id = market_id;
    market.authority = ctx.accounts.admin.key();
    market.title = title.clone();
    market.options = options.clone();
    market.status = MarketStatus::Active;
    market.winning_option = None;
    market.resolved_at = None;
    market.bump = ctx.bumps.market;

    let platform = &mut ctx.accounts.platform_config;
    platform.total_markets = platform
        .total_markets
        .checked_add(1)
        .ok_or(SettleError::MathOverflow)?;

    emit!(MarketCreated {
        market_id,
        authority: market.authority,
        title,
        options,
    });

    Ok(())
}

use anchor_lang::prelude::*;

#[error_code]
pub enum SettleError {
    #[msg("Platform is paused")]
    PlatformPaused,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Market is not active")]
    MarketNotActive,
    #[msg("Market already resolved")]
    AlreadyResolved,
    #[msg("Market is not resolved")]
    MarketNotResolved,
    #[msg("Winning option index out of range")]
    InvalidOption,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Source and destination pool are the same")]
    SamePool,
    #[msg("Insufficient MYST balance")]
    InsufficientFunds,
    #[msg("Pool balance would go negative")]
    InsufficientPoolFunds,
    #[msg("Bet already settled")]
    AlreadySettled,
    #[msg("Bet does not belong to this market")]
    BetMarketMismatch,
    #[msg("Fee exceeds maximum (20%)")]
    FeeExceedsMax,
    #[msg("Fee split shares must sum to 100%")]
    FeeSplitMismatch,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Title too long (max 128)")]
    TitleTooLong,
    #[msg("Option label too long (max 32)")]
    OptionLabelTooLong,
    #[msg("Too many options (max 8)")]
    TooManyOptions,
    #[msg("Market needs at least two options")]
    NotEnoughOptions,
}

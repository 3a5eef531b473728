use anchor_lang::prelude::*;

/// ─── Bet ──────────────────────────────────────────────────────────
///
/// PDA: seeds = [b"bet", market.key, bet_id.to_le_bytes()]
///
/// One stake on one option. `myst_bet` is fixed at placement; the only
/// later write is the settlement engine filling `myst_payout` exactly once.
#[account]
pub struct Bet {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub bet_id: u32,
    pub option: u8,
    pub myst_bet: u64,
    pub myst_payout: Option<u64>,
    pub settled: bool,
    pub placed_at: i64,
    pub bump: u8,
}

impl Bet {
    pub const LEN: usize = 8 + 32 + 32 + 4 + 1 + 8 + 9 + 1 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_serialized_size_matches_len() {
        let bet = Bet {
            market: Pubkey::new_unique(),
            bettor: Pubkey::new_unique(),
            bet_id: 3,
            option: 1,
            myst_bet: 100_000_000,
            myst_payout: Some(90_000_000),
            settled: true,
            placed_at: 1_700_000_000,
            bump: 252,
        };
        let bytes = bet.try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, Bet::LEN);
    }
}

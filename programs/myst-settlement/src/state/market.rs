use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::state::bet::Bet;
use crate::state::ledger::LedgerKind;
use crate::utils::math::mul_div_floor;
use crate::utils::settlement::SettlementPlan;

pub const MAX_OPTIONS: usize = 8;
pub const MAX_OPTION_LABEL: usize = 32;
pub const MAX_TITLE: usize = 128;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarketStatus {
    Active,
    Resolved,
}

/// ─── Market ───────────────────────────────────────────────────────
///
/// PDA: seeds = [b"market", market_id.to_le_bytes()]
///
/// A pari-mutuel wagering market: one stake accumulator per option, a
/// monotonic Active → Resolved lifecycle, and — once resolved — the frozen
/// settlement snapshot every bet is paid from.
#[account]
pub struct Market {
    pub market_id: u64,
    pub authority: Pubkey,
    pub title: String,
    /// Ordered outcome labels; index 0 is the conventional YES side.
    pub options: Vec<String>,
    pub option_pools: [u64; MAX_OPTIONS],
    pub option_bets: [u32; MAX_OPTIONS],
    pub bets: u32,
    pub status: MarketStatus,
    pub winning_option: Option<u8>,
    pub resolved_at: Option<i64>,

    // ─── Settlement snapshot (written once, at resolution) ───
    pub total_pool: u64,
    pub winning_total: u64,
    pub platform_fee: u64,
    pub win_pool: u64,
    pub refund_mode: bool,
    pub winners: u32,

    // ─── Settlement progress ───
    pub settled_bets: u32,
    pub settled_winners: u32,
    pub paid_out: u64,

    pub bump: u8,
}

impl Market {
    pub const LEN: usize = 8                        // discriminator
        + 8                                         // market_id
        + 32                                        // authority
        + (4 + MAX_TITLE)                           // title
        + (4 + MAX_OPTIONS * (4 + MAX_OPTION_LABEL)) // options
        + 8 * MAX_OPTIONS                           // option_pools
        + 4 * MAX_OPTIONS                           // option_bets
        + 4                                         // bets
        + 1                                         // status
        + 2                                         // winning_option option
        + 9                                         // resolved_at option
        + 8 * 4                                     // snapshot amounts
        + 1                                         // refund_mode
        + 4                                         // winners
        + 4 + 4 + 8                                 // settlement progress
        + 1;                                        // bump

    pub fn winning_label(&self) -> Option<&str> {
        self.winning_option
            .map(|index| self.options[index as usize].as_str())
    }

    /// Accumulates a new stake and hands out the bet id. Placement-side
    /// validation lives here so the accumulators and counters can never
    /// drift apart.
    pub fn record_bet(&mut self, option: u8, amount: u64) -> Result<u32> {
        require!(self.status == MarketStatus::Active, SettleError::MarketNotActive);
        require!((option as usize) < self.options.len(), SettleError::InvalidOption);
        require!(amount > 0, SettleError::InvalidAmount);

        let slot = option as usize;
        self.option_pools[slot] = self.option_pools[slot]
            .checked_add(amount)
            .ok_or(SettleError::MathOverflow)?;
        self.option_bets[slot] = self.option_bets[slot]
            .checked_add(1)
            .ok_or(SettleError::MathOverflow)?;

        let bet_id = self.bets;
        self.bets = bet_id.checked_add(1).ok_or(SettleError::MathOverflow)?;
        Ok(bet_id)
    }

    /// The one-shot Active → Resolved transition. The status guard and the
    /// status write happen inside the same instruction, so two concurrent
    /// resolutions of one market cannot both pass — the runtime serializes
    /// writes to this account and the loser observes Resolved.
    pub fn begin_resolution(
        &mut self,
        winning_option: u8,
        fee_bps: u16,
        now: i64,
    ) -> Result<SettlementPlan> {
        require!(self.status == MarketStatus::Active, SettleError::AlreadyResolved);

        let option_count = self.options.len();
        require!((winning_option as usize) < option_count, SettleError::InvalidOption);

        let plan =
            SettlementPlan::build(&self.option_pools[..option_count], winning_option as usize, fee_bps)?;

        self.total_pool = plan.total_pool;
        self.winning_total = plan.winning_total;
        self.platform_fee = plan.platform_fee;
        self.win_pool = plan.win_pool;
        self.refund_mode = plan.refund_mode;
        self.winners = if plan.refund_mode {
            0
        } else {
            self.option_bets[winning_option as usize]
        };

        self.status = MarketStatus::Resolved;
        self.winning_option = Some(winning_option);
        self.resolved_at = Some(now);

        Ok(plan)
    }

    /// Materializes one bet's share of the frozen snapshot. Amounts are
    /// fully determined at resolution; the only order-dependent piece is the
    /// residue rule: the last winning bet (or, in refund mode, the last bet
    /// overall) receives `win_pool - paid_out` so the pool drains exactly.
    pub fn settle_payout(&mut self, bet: &mut Bet) -> Result<(u64, LedgerKind)> {
        require!(self.status == MarketStatus::Resolved, SettleError::MarketNotResolved);
        require!(!bet.settled, SettleError::AlreadySettled);

        let (payout, kind) = if self.refund_mode {
            let last = self.settled_bets + 1 == self.bets;
            let amount = if last {
                self.win_pool
                    .checked_sub(self.paid_out)
                    .ok_or(SettleError::MathOverflow)?
            } else {
                mul_div_floor(bet.myst_bet, self.win_pool, self.total_pool)?
            };
            (amount, LedgerKind::Refund)
        } else if Some(bet.option) == self.winning_option {
            self.settled_winners = self
                .settled_winners
                .checked_add(1)
                .ok_or(SettleError::MathOverflow)?;
            let last = self.settled_winners == self.winners;
            let amount = if last {
                self.win_pool
                    .checked_sub(self.paid_out)
                    .ok_or(SettleError::MathOverflow)?
            } else {
                mul_div_floor(bet.myst_bet, self.win_pool, self.winning_total)?
            };
            (amount, LedgerKind::Win)
        } else {
            (0, LedgerKind::Loss)
        };

        self.settled_bets = self
            .settled_bets
            .checked_add(1)
            .ok_or(SettleError::MathOverflow)?;
        self.paid_out = self
            .paid_out
            .checked_add(payout)
            .ok_or(SettleError::MathOverflow)?;

        bet.settled = true;
        bet.myst_payout = Some(payout);

        Ok((payout, kind))
    }

    /// Denominator of the pro-rata ratio in force, for ledger audit meta.
    pub fn payout_denominator(&self) -> u64 {
        if self.refund_mode {
            self.total_pool
        } else {
            self.winning_total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::MYST_UNIT;
    use crate::utils::testing::{code_of, error_code};

    const FEE_BPS: u16 = 1_000;

    fn binary_market() -> Market {
        Market {
            market_id: 1,
            authority: Pubkey::new_unique(),
            title: "MYST above $1 by Friday?".to_string(),
            options: vec!["YES".to_string(), "NO".to_string()],
            option_pools: [0; MAX_OPTIONS],
            option_bets: [0; MAX_OPTIONS],
            bets: 0,
            status: MarketStatus::Active,
            winning_option: None,
            resolved_at: None,
            total_pool: 0,
            winning_total: 0,
            platform_fee: 0,
            win_pool: 0,
            refund_mode: false,
            winners: 0,
            settled_bets: 0,
            settled_winners: 0,
            paid_out: 0,
            bump: 255,
        }
    }

    fn place(market: &mut Market, option: u8, amount: u64) -> Bet {
        let bet_id = market.record_bet(option, amount).unwrap();
        Bet {
            market: Pubkey::new_unique(),
            bettor: Pubkey::new_unique(),
            bet_id,
            option,
            myst_bet: amount,
            myst_payout: None,
            settled: false,
            placed_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn record_bet_validates_and_accumulates() {
        let mut market = binary_market();
        let first = market.record_bet(0, 100).unwrap();
        let second = market.record_bet(1, 50).unwrap();
        assert_eq!((first, second), (0, 1));
        assert_eq!(market.option_pools[0], 100);
        assert_eq!(market.option_pools[1], 50);
        assert_eq!(market.option_bets[0], 1);
        assert_eq!(market.bets, 2);

        let err = market.record_bet(2, 10).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::InvalidOption));
        let err = market.record_bet(0, 0).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::InvalidAmount));
    }

    #[test]
    fn resolution_freezes_the_snapshot() {
        let mut market = binary_market();
        place(&mut market, 0, 700 * MYST_UNIT);
        place(&mut market, 1, 300 * MYST_UNIT);

        let plan = market.begin_resolution(0, FEE_BPS, 1_700_000_000).unwrap();
        assert_eq!(plan.platform_fee, 30 * MYST_UNIT);
        assert_eq!(market.status, MarketStatus::Resolved);
        assert_eq!(market.winning_option, Some(0));
        assert_eq!(market.winning_label(), Some("YES"));
        assert_eq!(market.resolved_at, Some(1_700_000_000));
        assert_eq!(market.win_pool, 970 * MYST_UNIT);
        assert_eq!(market.winners, 1);
    }

    #[test]
    fn resolving_twice_is_rejected_without_mutation() {
        let mut market = binary_market();
        place(&mut market, 0, 100);
        market.begin_resolution(0, FEE_BPS, 10).unwrap();

        let before_resolved_at = market.resolved_at;
        let before_win_pool = market.win_pool;
        let err = market.begin_resolution(1, FEE_BPS, 99).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::AlreadyResolved));
        assert_eq!(market.winning_option, Some(0));
        assert_eq!(market.resolved_at, before_resolved_at);
        assert_eq!(market.win_pool, before_win_pool);
    }

    #[test]
    fn resolution_rejects_out_of_range_option() {
        let mut market = binary_market();
        let err = market.begin_resolution(2, FEE_BPS, 0).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::InvalidOption));
        assert_eq!(market.status, MarketStatus::Active);
        assert_eq!(market.winning_option, None);
    }

    #[test]
    fn settle_requires_a_resolved_market() {
        let mut market = binary_market();
        let mut bet = place(&mut market, 0, 100);
        let err = market.settle_payout(&mut bet).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::MarketNotResolved));
        assert!(!bet.settled);
    }

    #[test]
    fn winners_split_pro_rata_and_losers_settle_to_zero() {
        let mut market = binary_market();
        let mut small = place(&mut market, 0, 100 * MYST_UNIT);
        let mut large = place(&mut market, 0, 200 * MYST_UNIT);
        let mut loser = place(&mut market, 1, 300 * MYST_UNIT);

        market.begin_resolution(0, FEE_BPS, 0).unwrap();
        // fee = 30, win_pool = 570
        assert_eq!(market.win_pool, 570 * MYST_UNIT);

        let (payout, kind) = market.settle_payout(&mut small).unwrap();
        assert_eq!(payout, 190 * MYST_UNIT);
        assert_eq!(kind, LedgerKind::Win);

        let (payout, kind) = market.settle_payout(&mut loser).unwrap();
        assert_eq!(payout, 0);
        assert_eq!(kind, LedgerKind::Loss);
        assert_eq!(loser.myst_payout, Some(0));

        let (payout, _) = market.settle_payout(&mut large).unwrap();
        assert_eq!(payout, 380 * MYST_UNIT);
        assert_eq!(large.myst_payout, Some(380 * MYST_UNIT));

        assert_eq!(market.paid_out, market.win_pool);
        assert_eq!(market.settled_bets, 3);
        assert_eq!(market.settled_winners, 2);
    }

    #[test]
    fn last_winner_absorbs_the_rounding_residue() {
        let mut market = binary_market();
        // winning stakes 1 and 2, losing 7: fee floors to 0, win_pool = 10,
        // floor shares are 3 and 6, leaving 1 unit of residue
        let mut first = place(&mut market, 0, 1);
        let mut second = place(&mut market, 0, 2);
        place(&mut market, 1, 7);

        market.begin_resolution(0, FEE_BPS, 0).unwrap();
        assert_eq!(market.win_pool, 10);

        let (first_payout, _) = market.settle_payout(&mut first).unwrap();
        assert_eq!(first_payout, 3);
        let (second_payout, _) = market.settle_payout(&mut second).unwrap();
        assert_eq!(second_payout, 7); // 6 + residue
        assert_eq!(market.paid_out, market.win_pool);
    }

    #[test]
    fn settling_a_bet_twice_is_rejected() {
        let mut market = binary_market();
        let mut bet = place(&mut market, 0, 100);
        market.begin_resolution(0, FEE_BPS, 0).unwrap();
        market.settle_payout(&mut bet).unwrap();

        let paid_before = market.paid_out;
        let err = market.settle_payout(&mut bet).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::AlreadySettled));
        assert_eq!(market.paid_out, paid_before);
        assert_eq!(market.settled_bets, 1);
    }

    #[test]
    fn degenerate_market_refunds_every_bet_with_the_fee_haircut() {
        let mut market = binary_market();
        let mut only = place(&mut market, 1, 100 * MYST_UNIT);

        // YES wins but nobody staked YES
        market.begin_resolution(0, FEE_BPS, 0).unwrap();
        assert!(market.refund_mode);
        assert_eq!(market.winners, 0);
        assert_eq!(market.win_pool, 90 * MYST_UNIT);

        let (refund, kind) = market.settle_payout(&mut only).unwrap();
        assert_eq!(refund, 90 * MYST_UNIT);
        assert_eq!(kind, LedgerKind::Refund);
        assert_eq!(market.payout_denominator(), 100 * MYST_UNIT);
        assert_eq!(market.paid_out, market.win_pool);
    }

    #[test]
    fn refund_mode_residue_goes_to_the_last_bet() {
        let mut market = binary_market();
        // three NO stakes of 1; YES wins; fee = 3 * 50% = 1, win_pool = 2,
        // floor refunds are 0 each so the last bet takes everything
        let mut bets: Vec<Bet> = (0..3).map(|_| place(&mut market, 1, 1)).collect();
        market.begin_resolution(0, 5_000, 0).unwrap();
        assert_eq!(market.win_pool, 2);

        let mut total = 0u64;
        for bet in bets.iter_mut() {
            let (refund, _) = market.settle_payout(bet).unwrap();
            total += refund;
        }
        assert_eq!(total, market.win_pool);
        assert_eq!(market.settled_bets, 3);
    }

    #[test]
    fn conservation_holds_across_full_settlement() {
        let mut market = binary_market();
        let stakes = [137u64, 903, 12, 448, 5_000];
        let mut bets: Vec<Bet> = stakes
            .iter()
            .enumerate()
            .map(|(index, stake)| place(&mut market, (index % 2) as u8, *stake * MYST_UNIT))
            .collect();

        market.begin_resolution(1, FEE_BPS, 0).unwrap();
        let mut paid = 0u64;
        for bet in bets.iter_mut() {
            let (payout, _) = market.settle_payout(bet).unwrap();
            paid += payout;
        }
        assert_eq!(paid + market.platform_fee, market.total_pool);
    }
}

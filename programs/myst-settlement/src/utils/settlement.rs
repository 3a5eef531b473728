use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::state::platform::FeeSplit;
use crate::utils::math::{mul_div_floor, BPS_DENOMINATOR};

/// Economic outcome of resolving a market, computed once from the side-pool
/// totals and frozen into the market as the settlement snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementPlan {
    pub winning_total: u64,
    pub losing_total: u64,
    pub total_pool: u64,
    /// `losing_total * fee_bps / 10_000` — the fee is levied on the losing
    /// side's stake only, never on the total pool.
    pub platform_fee: u64,
    /// `total_pool - platform_fee`, distributed in full to winners (or, in
    /// refund mode, returned pro rata to every bettor).
    pub win_pool: u64,
    /// Nobody staked the winning option: every bet is refunded
    /// `stake * win_pool / total_pool` instead of paying winners.
    pub refund_mode: bool,
}

impl SettlementPlan {
    pub fn build(option_pools: &[u64], winning: usize, fee_bps: u16) -> Result<Self> {
        require!(winning < option_pools.len(), SettleError::InvalidOption);

        let winning_total = option_pools[winning];
        let mut losing_total: u64 = 0;
        for (index, stake) in option_pools.iter().enumerate() {
            if index != winning {
                losing_total = losing_total
                    .checked_add(*stake)
                    .ok_or(SettleError::MathOverflow)?;
            }
        }
        let total_pool = winning_total
            .checked_add(losing_total)
            .ok_or(SettleError::MathOverflow)?;

        let platform_fee = mul_div_floor(losing_total, fee_bps as u64, BPS_DENOMINATOR)?;
        let win_pool = total_pool
            .checked_sub(platform_fee)
            .ok_or(SettleError::MathOverflow)?;

        Ok(SettlementPlan {
            winning_total,
            losing_total,
            total_pool,
            platform_fee,
            win_pool,
            refund_mode: winning_total == 0,
        })
    }

    /// Pro-rata payout for a winning stake: `stake * win_pool / winning_total`.
    pub fn payout_for(&self, stake: u64) -> Result<u64> {
        mul_div_floor(stake, self.win_pool, self.winning_total)
    }

    /// Refund for any stake in refund mode: `stake * win_pool / total_pool`.
    /// The fee haircut applies to refunds — preserved reference behavior.
    pub fn refund_for(&self, stake: u64) -> Result<u64> {
        mul_div_floor(stake, self.win_pool, self.total_pool)
    }
}

/// The platform fee divided into per-pool increments. Treasury takes the
/// exact remainder after the fixed-share cuts, so the four increments always
/// sum to the fee regardless of rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeCuts {
    pub treasury: u64,
    pub leaderboard: u64,
    pub referral: u64,
    pub wheel: u64,
}

impl FeeCuts {
    pub fn split(platform_fee: u64, split: &FeeSplit) -> Result<Self> {
        let leaderboard = mul_div_floor(platform_fee, split.leaderboard_bps as u64, BPS_DENOMINATOR)?;
        let referral = mul_div_floor(platform_fee, split.referral_bps as u64, BPS_DENOMINATOR)?;
        let wheel = mul_div_floor(platform_fee, split.wheel_bps as u64, BPS_DENOMINATOR)?;
        let treasury = platform_fee
            .checked_sub(leaderboard)
            .and_then(|rest| rest.checked_sub(referral))
            .and_then(|rest| rest.checked_sub(wheel))
            .ok_or(SettleError::MathOverflow)?;

        Ok(FeeCuts {
            treasury,
            leaderboard,
            referral,
            wheel,
        })
    }

    pub fn total(&self) -> u64 {
        self.treasury + self.leaderboard + self.referral + self.wheel
    }
}

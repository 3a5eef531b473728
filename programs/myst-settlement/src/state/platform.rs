use anchor_lang::prelude::*;

use crate::errors::SettleError;
use crate::utils::math::BPS_DENOMINATOR;

/// How the platform fee is divided across the accumulation pools, in basis
/// points. Shares must sum to exactly 100% so the fee is never partially
/// dropped; validated whenever the schedule is written.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeeSplit {
    pub treasury_bps: u16,
    pub leaderboard_bps: u16,
    pub referral_bps: u16,
    pub wheel_bps: u16,
}

impl FeeSplit {
    pub const LEN: usize = 2 * 4;

    /// Reference schedule: 70% treasury, 15% leaderboard, 10% referral,
    /// 5% wheel.
    pub const DEFAULT: FeeSplit = FeeSplit {
        treasury_bps: 7_000,
        leaderboard_bps: 1_500,
        referral_bps: 1_000,
        wheel_bps: 500,
    };

    pub fn validate(&self) -> Result<()> {
        let total = self.treasury_bps as u64
            + self.leaderboard_bps as u64
            + self.referral_bps as u64
            + self.wheel_bps as u64;
        require!(total == BPS_DENOMINATOR, SettleError::FeeSplitMismatch);
        Ok(())
    }
}

#[account]
pub struct PlatformConfig {
    pub admin: Pubkey,
    pub fee_bps: u16,
    pub fee_split: FeeSplit,
    pub paused: bool,
    pub total_markets: u64,
    pub bump: u8,
}

impl PlatformConfig {
    pub const LEN: usize = 8 + 32 + 2 + FeeSplit::LEN + 1 + 8 + 1;

    /// Hard ceiling on the platform fee rate (20%).
    pub const MAX_FEE_BPS: u16 = 2_000;

    /// Reference fee rate: 10% of the losing side's stake.
    pub const DEFAULT_FEE_BPS: u16 = 1_000;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{code_of, error_code};

    #[test]
    fn default_split_is_valid() {
        FeeSplit::DEFAULT.validate().unwrap();
    }

    #[test]
    fn split_must_sum_to_one_hundred_percent() {
        let short = FeeSplit {
            treasury_bps: 7_000,
            leaderboard_bps: 1_500,
            referral_bps: 1_000,
            wheel_bps: 499,
        };
        let err = short.validate().unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::FeeSplitMismatch));

        let over = FeeSplit {
            treasury_bps: 10_000,
            leaderboard_bps: 1,
            referral_bps: 0,
            wheel_bps: 0,
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn config_serialized_size_matches_len() {
        let config = PlatformConfig {
            admin: Pubkey::new_unique(),
            fee_bps: PlatformConfig::DEFAULT_FEE_BPS,
            fee_split: FeeSplit::DEFAULT,
            paused: false,
            total_markets: 3,
            bump: 254,
        };
        let bytes = config.try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, PlatformConfig::LEN);
    }
}

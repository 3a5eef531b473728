use anchor_lang::prelude::*;

use crate::errors::SettleError;

/// The closed set of fee-funded accumulation accounts.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PoolKey {
    Treasury,
    Leaderboard,
    Referral,
    Wheel,
}

/// ─── Pool Registry ────────────────────────────────────────────────
///
/// PDA: seeds = [b"pools"]
///
/// One account holds every pool balance so a fee distribution or transfer
/// touches a single row and commits (or aborts) as a unit. `myst_wheel` is
/// the legacy-keyed alias of the wheel pool; every wheel mutation writes
/// both fields until the alias is retired.
#[account]
#[derive(Default)]
pub struct PoolRegistry {
    pub treasury: u64,
    pub leaderboard: u64,
    pub referral: u64,
    pub wheel: u64,
    pub myst_wheel: u64,
    pub bump: u8,
}

impl PoolRegistry {
    pub const LEN: usize = 8 + 8 * 5 + 1;

    pub fn balance(&self, key: PoolKey) -> u64 {
        match key {
            PoolKey::Treasury => self.treasury,
            PoolKey::Leaderboard => self.leaderboard,
            PoolKey::Referral => self.referral,
            PoolKey::Wheel => self.wheel,
        }
    }

    fn set_balance(&mut self, key: PoolKey, value: u64) {
        match key {
            PoolKey::Treasury => self.treasury = value,
            PoolKey::Leaderboard => self.leaderboard = value,
            PoolKey::Referral => self.referral = value,
            PoolKey::Wheel => {
                self.wheel = value;
                self.myst_wheel = value;
            }
        }
    }

    pub fn credit(&mut self, key: PoolKey, amount: u64) -> Result<u64> {
        let updated = self
            .balance(key)
            .checked_add(amount)
            .ok_or(SettleError::MathOverflow)?;
        self.set_balance(key, updated);
        Ok(updated)
    }

    /// Fails before any write if the balance would go negative.
    pub fn debit(&mut self, key: PoolKey, amount: u64) -> Result<u64> {
        let updated = self
            .balance(key)
            .checked_sub(amount)
            .ok_or(SettleError::InsufficientPoolFunds)?;
        self.set_balance(key, updated);
        Ok(updated)
    }

    /// Administrative pool-to-pool move; both legs land together.
    pub fn transfer(&mut self, from: PoolKey, to: PoolKey, amount: u64) -> Result<(u64, u64)> {
        require!(amount > 0, SettleError::InvalidAmount);
        require!(from != to, SettleError::SamePool);
        let new_from = self.debit(from, amount)?;
        let new_to = self.credit(to, amount)?;
        Ok((new_from, new_to))
    }

    /// Snapshot of every pool balance, in registry order.
    pub fn balances(&self) -> [(PoolKey, u64); 4] {
        [
            (PoolKey::Treasury, self.treasury),
            (PoolKey::Leaderboard, self.leaderboard),
            (PoolKey::Referral, self.referral),
            (PoolKey::Wheel, self.wheel),
        ]
    }
}

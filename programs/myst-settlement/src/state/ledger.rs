use anchor_lang::prelude::*;

use crate::errors::SettleError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LedgerKind {
    /// Stake leaving a user's balance at bet placement.
    Stake,
    /// Pro-rata share of the win pool.
    Win,
    /// Pro-rata refund when nobody staked the winning option.
    Refund,
    /// Settled bet on a losing option; zero amount, recorded for audit.
    Loss,
    /// Administrative MYST credit.
    AdminGrant,
}

/// ─── Ledger Entry ─────────────────────────────────────────────────
///
/// PDA: seeds = [b"ledger", user.key, seq.to_le_bytes()]
///
/// Append-only record of one balance-affecting event. Never mutated after
/// init; the PDA seed sequence makes re-writing a slot impossible. For
/// settlement entries, `win_pool` / `pool_total` are the numerator basis and
/// denominator of the pro-rata ratio, so the payout can be replayed from the
/// entry alone.
#[account]
pub struct LedgerEntry {
    pub user: Pubkey,
    pub seq: u64,
    pub kind: LedgerKind,
    pub amount: i64,
    pub market: Option<Pubkey>,
    pub bet: Option<Pubkey>,
    pub win_pool: u64,
    pub pool_total: u64,
    pub timestamp: i64,
    pub bump: u8,
}

impl LedgerEntry {
    pub const LEN: usize = 8 + 32 + 8 + 1 + 8 + 33 + 33 + 8 + 8 + 8 + 1;
}

/// ─── User Account ─────────────────────────────────────────────────
///
/// PDA: seeds = [b"user", owner.key]
///
/// Materialized MYST balance: the running sum of the owner's ledger entries,
/// updated only in the same instruction that appends the entry, so the two
/// views cannot diverge. `entries` is the next ledger sequence number.
#[account]
#[derive(Default)]
pub struct UserAccount {
    pub owner: Pubkey,
    pub balance: u64,
    pub entries: u64,
    pub bump: u8,
}

impl UserAccount {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(SettleError::MathOverflow)?;
        Ok(self.balance)
    }

    pub fn debit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(SettleError::InsufficientFunds)?;
        Ok(self.balance)
    }

    /// Claims the next ledger sequence number.
    pub fn next_seq(&mut self) -> Result<u64> {
        let seq = self.entries;
        self.entries = seq.checked_add(1).ok_or(SettleError::MathOverflow)?;
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{code_of, error_code};

    #[test]
    fn balance_tracks_credits_and_debits() {
        let mut account = UserAccount::default();
        account.credit(1_000).unwrap();
        account.debit(400).unwrap();
        assert_eq!(account.balance, 600);
    }

    #[test]
    fn debit_beyond_balance_is_rejected_without_effect() {
        let mut account = UserAccount::default();
        account.credit(50).unwrap();
        let err = account.debit(51).unwrap_err();
        assert_eq!(error_code(err), code_of(SettleError::InsufficientFunds));
        assert_eq!(account.balance, 50);
    }

    #[test]
    fn sequence_numbers_are_consecutive() {
        let mut account = UserAccount::default();
        assert_eq!(account.next_seq().unwrap(), 0);
        assert_eq!(account.next_seq().unwrap(), 1);
        assert_eq!(account.entries, 2);
    }

    #[test]
    fn balance_equals_sum_of_signed_entry_amounts() {
        // the materialized counter moves in lockstep with the entries it
        // summarizes
        let mut account = UserAccount::default();
        let entry_amounts: [i64; 4] = [1_000, -300, 250, -100];
        for amount in entry_amounts {
            if amount >= 0 {
                account.credit(amount as u64).unwrap();
            } else {
                account.debit((-amount) as u64).unwrap();
            }
            account.next_seq().unwrap();
        }
        let sum: i64 = entry_amounts.iter().sum();
        assert_eq!(account.balance as i64, sum);
        assert_eq!(account.entries, entry_amounts.len() as u64);
    }

    #[test]
    fn entry_serialized_size_matches_len() {
        let entry = LedgerEntry {
            user: Pubkey::new_unique(),
            seq: 7,
            kind: LedgerKind::Win,
            amount: 970_000_000,
            market: Some(Pubkey::new_unique()),
            bet: Some(Pubkey::new_unique()),
            win_pool: 970_000_000,
            pool_total: 700_000_000,
            timestamp: 1_700_000_000,
            bump: 255,
        };
        let bytes = entry.try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, LedgerEntry::LEN);
    }

    #[test]
    fn user_account_serialized_size_matches_len() {
        let account = UserAccount {
            owner: Pubkey::new_unique(),
            balance: 1,
            entries: 2,
            bump: 253,
        };
        let bytes = account.try_to_vec().unwrap();
        assert_eq!(bytes.len() + 8, UserAccount::LEN);
    }
}

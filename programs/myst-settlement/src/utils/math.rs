use anchor_lang::prelude::*;

use crate::errors::SettleError;

/// Base units per whole MYST. All on-chain amounts are denominated in these
/// fixed-point units so fractional fee cuts (e.g. 4.5 MYST) stay exact.
pub const MYST_UNIT: u64 = 1_000_000;

/// Basis-point denominator for fee rates and split shares.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Floor of `a * b / denominator` with a u128 intermediate, so repeated
/// pro-rata divisions never drift through floating point.
pub fn mul_div_floor(a: u64, b: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, SettleError::MathOverflow);
    let wide = (a as u128)
        .checked_mul(b as u128)
        .ok_or(SettleError::MathOverflow)?
        / denominator as u128;
    u64::try_from(wide).map_err(|_| error!(SettleError::MathOverflow))
}

/// Converts an unsigned amount into the signed ledger representation.
pub fn to_signed(amount: u64) -> Result<i64> {
    i64::try_from(amount).map_err(|_| error!(SettleError::MathOverflow))
}

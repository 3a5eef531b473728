pub mod math;
pub mod settlement;

pub use math::*;
pub use settlement::*;

#[cfg(test)]
pub mod testing {
    use crate::errors::SettleError;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    /// Extracts the numeric error code from an anchor error for assertions.
    pub fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => u32::MAX,
        }
    }

    pub fn code_of(variant: SettleError) -> u32 {
        ERROR_CODE_OFFSET + variant as u32
    }
}

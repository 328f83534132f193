use anchor_lang::error::Error;
use anchor_lang::prelude::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Deposit too small to mint any LP tokens")]
    ZeroLiquidity,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Pool reserve is empty")]
    InsufficientLiquidity,
    #[msg("LP amount exceeds outstanding supply")]
    InsufficientLpSupply,
    #[msg("Balance too low to split")]
    InsufficientBalance,
    #[msg("Balance is not empty")]
    NonZeroBalance,
    #[msg("Invalid pool config")]
    InvalidConfig,
    #[msg("Pool snapshot violates pool invariants")]
    InvalidSnapshot
}

/// Numeric code carried by an error raised from this crate, if any.
pub fn error_code_number(error: &Error) -> Option<u32> {
    match error {
        Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
        Error::ProgramError(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::{err, Result};

    fn fails() -> Result<()> {
        err!(ErrorCode::ZeroLiquidity)
    }

    #[test]
    fn test_error_code_number_round_trip() {
        let error = fails().unwrap_err();
        assert_eq!(
            error_code_number(&error),
            Some(u32::from(ErrorCode::ZeroLiquidity))
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        assert_ne!(
            u32::from(ErrorCode::InvalidAmount),
            u32::from(ErrorCode::ZeroLiquidity)
        );
        assert_ne!(
            u32::from(ErrorCode::DivisionByZero),
            u32::from(ErrorCode::MathOverflow)
        );
    }
}

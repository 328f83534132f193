use anchor_lang::prelude::*;

use crate::{mul_div_ceil, state::SwapQuote, to_u64, AmmConfig, ErrorCode, MAX_PERCENTAGE};

/// Swap operations for the pool
///
/// This module provides the constant-product pricing curve. The fee is
/// taken from the input before it reaches the curve and stays in the pool.

/// Calculate the output amount for a given input amount
///
/// # Arguments
/// * `amount_in` - The amount of input tokens
/// * `reserve_in` - The reserve of input tokens in the pool
/// * `reserve_out` - The reserve of output tokens in the pool
/// * `amm_config` - Supplies the trade fee rate
///
/// # Returns
/// `floor(effective_in * reserve_out / (reserve_in * fee_den + effective_in))`
/// where `effective_in = amount_in * fee_num` and `fee_num / fee_den` is the
/// reduced share of the input left after the trade fee (997/1000 by default).
pub fn get_amount_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    amm_config: &AmmConfig,
) -> Result<u64> {
    require!(amount_in > 0, ErrorCode::InvalidAmount);
    require!(
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::InsufficientLiquidity
    );
    amm_config.validate()?;

    let (fee_numerator, fee_denominator) = amm_config
        .fee_fraction()
        .ok_or(ErrorCode::InvalidConfig)?;

    let effective_in = u128::from(amount_in)
        .checked_mul(u128::from(fee_numerator))
        .ok_or(ErrorCode::MathOverflow)?;

    // (x + dx) * (y - dy) = x * y, with dx scaled by the fee fraction
    let numerator = effective_in
        .checked_mul(u128::from(reserve_out))
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = u128::from(reserve_in)
        .checked_mul(u128::from(fee_denominator))
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(effective_in)
        .ok_or(ErrorCode::MathOverflow)?;

    let amount_out = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::DivisionByZero)?;

    // strictly below reserve_out, so it always narrows
    let amount_out = to_u64(amount_out).ok_or(ErrorCode::MathOverflow)?;
    Ok(amount_out)
}

/// Price a swap without touching any state.
pub fn quote(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    amm_config: &AmmConfig,
) -> Result<SwapQuote> {
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out, amm_config)?;
    let trade_fee = mul_div_ceil(amount_in, amm_config.trade_fee_rate, MAX_PERCENTAGE)
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(SwapQuote {
        amount_in,
        amount_out,
        trade_fee,
    })
}

use anchor_lang::prelude::*;

use crate::{mul_div_floor, ErrorCode};

/// Liquidity operations for the pool
///
/// This module provides the mint and withdrawal formulas for LP tokens.

/// Calculate the amount of LP tokens to mint for a deposit
///
/// # Arguments
/// * `reserve_x` - Current reserve of token X in the pool
/// * `reserve_y` - Current reserve of token Y in the pool
/// * `deposit_x` - Amount of token X being deposited
/// * `deposit_y` - Amount of token Y being deposited
///
/// # Returns
/// `deposit_x` when either reserve is empty (bootstrap). Otherwise the smaller
/// of `deposit_x * reserve_y / deposit_y` and `deposit_y * reserve_x / deposit_x`,
/// both floored. The mint does not depend on the LP supply, and the first mint
/// ignores `deposit_y` entirely.
pub fn compute_mint(reserve_x: u64, reserve_y: u64, deposit_x: u64, deposit_y: u64) -> Result<u64> {
    if reserve_x == 0 || reserve_y == 0 {
        return Ok(deposit_x);
    }

    require!(deposit_x > 0 && deposit_y > 0, ErrorCode::DivisionByZero);

    let x_ratio = mul_div_floor(deposit_x, reserve_y, deposit_y).ok_or(ErrorCode::MathOverflow)?;
    let y_ratio = mul_div_floor(deposit_y, reserve_x, deposit_x).ok_or(ErrorCode::MathOverflow)?;

    // Return the minimum to protect existing holders from an imbalanced deposit
    Ok(x_ratio.min(y_ratio))
}

/// Calculate the amount of tokens to return for a withdrawal
///
/// # Arguments
/// * `reserve_x` - Current reserve of token X in the pool
/// * `reserve_y` - Current reserve of token Y in the pool
/// * `lp_supply` - Current total supply of LP tokens
/// * `lp_amount` - Amount of LP tokens being burned
///
/// # Returns
/// A tuple (withdrawn_x, withdrawn_y), each floored, so a holder never
/// receives more than `reserve * lp_amount / lp_supply`.
pub fn compute_withdraw(
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    lp_amount: u64,
) -> Result<(u64, u64)> {
    require!(lp_amount > 0, ErrorCode::InvalidAmount);
    require!(lp_supply > 0, ErrorCode::DivisionByZero);
    require!(lp_amount <= lp_supply, ErrorCode::InsufficientLpSupply);

    // lp_amount <= lp_supply keeps both results within the reserves
    let withdrawn_x = mul_div_floor(reserve_x, lp_amount, lp_supply).ok_or(ErrorCode::MathOverflow)?;
    let withdrawn_y = mul_div_floor(reserve_y, lp_amount, lp_supply).ok_or(ErrorCode::MathOverflow)?;

    Ok((withdrawn_x, withdrawn_y))
}

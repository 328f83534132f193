use anchor_lang::prelude::{require, Result};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::{asset::PoolId, reduce_fraction, ErrorCode, DEFAULT_TRADE_FEE_RATE, MAX_PERCENTAGE};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmConfig {
    pub trade_fee_rate: u64, // 10^6 = 100%
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            trade_fee_rate: DEFAULT_TRADE_FEE_RATE,
        }
    }
}

impl AmmConfig {
    pub fn new(trade_fee_rate: u64) -> Result<Self> {
        let config = Self { trade_fee_rate };
        config.validate()?;
        Ok(config)
    }

    /// A fee of 100% or more would leave no effective input.
    pub fn validate(&self) -> Result<()> {
        require!(self.trade_fee_rate < MAX_PERCENTAGE, ErrorCode::InvalidConfig);
        Ok(())
    }

    /// Share of the input that reaches the curve, as a reduced fraction.
    ///
    /// The default rate yields exactly `997 / 1000`.
    pub fn fee_fraction(&self) -> Option<(u64, u64)> {
        let retained = MAX_PERCENTAGE.checked_sub(self.trade_fee_rate)?;
        reduce_fraction(retained, MAX_PERCENTAGE)
    }
}

/// Which asset the caller sells.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    XToY,
    YToX,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::XToY => Direction::YToX,
            Direction::YToX => Direction::XToY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount of source token offered
    pub amount_in: u64,
    /// Amount of destination token paid out
    pub amount_out: u64,
    /// Portion of `amount_in` kept by the pool as fee, rounded up
    pub trade_fee: u64,
}

/// Plain record of a pool's state, for hosts that persist pools.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub id: PoolId,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
    pub config: AmmConfig,
}

impl PoolSnapshot {
    /// Reserves are both non-zero while LP tokens are outstanding, and all
    /// three are zero once the pool has been fully drained.
    pub fn is_consistent(&self) -> bool {
        let live = self.reserve_x > 0 && self.reserve_y > 0 && self.lp_supply > 0;
        let drained = self.reserve_x == 0 && self.reserve_y == 0 && self.lp_supply == 0;
        (live || drained) && self.config.validate().is_ok()
    }
}

use std::fmt;

use anchor_lang::prelude::*;

use crate::{
    asset::{Balance, IdAllocator, Lp, LpToken, PoolId, Supply},
    liquidity::{compute_mint, compute_withdraw},
    state::{AmmConfig, Direction, PoolSnapshot, SwapQuote},
    swap::{get_amount_out, quote},
    ErrorCode,
};

/// A constant-product pool over assets `X` and `Y`.
///
/// Every operation validates and computes all amounts before it mutates the
/// pool, so an `Err` leaves reserves and supply exactly as they were. Input
/// balances are consumed either way; the host is expected to roll back the
/// enclosing transaction on error.
pub struct Pool<X, Y> {
    id: PoolId,
    reserve_x: Balance<X>,
    reserve_y: Balance<Y>,
    lp_supply: Supply<Lp<X, Y>>,
    config: AmmConfig,
}

impl<X, Y> Pool<X, Y> {
    /// Create a pool with the default 0.3% trade fee.
    pub fn create(
        ids: &mut impl IdAllocator,
        deposit_x: Balance<X>,
        deposit_y: Balance<Y>,
    ) -> Result<(Self, LpToken<X, Y>)> {
        Self::create_with_config(ids, AmmConfig::default(), deposit_x, deposit_y)
    }

    /// Create a pool from an initial two-sided deposit.
    ///
    /// The initial LP supply equals the X deposit alone; the Y deposit does
    /// not affect it.
    pub fn create_with_config(
        ids: &mut impl IdAllocator,
        config: AmmConfig,
        deposit_x: Balance<X>,
        deposit_y: Balance<Y>,
    ) -> Result<(Self, LpToken<X, Y>)> {
        config.validate()?;
        require!(
            deposit_x.value() > 0 && deposit_y.value() > 0,
            ErrorCode::InvalidAmount
        );

        let initial_supply = compute_mint(0, 0, deposit_x.value(), deposit_y.value())?;
        let mut lp_supply = Supply::new();
        let lp = lp_supply.increase_supply(initial_supply)?;

        let pool = Self {
            id: ids.next_id(),
            reserve_x: deposit_x,
            reserve_y: deposit_y,
            lp_supply,
            config,
        };

        msg!(
            "create pool={} reserve_x={} reserve_y={} lp_supply={}",
            pool.id,
            pool.reserve_x(),
            pool.reserve_y(),
            pool.lp_supply()
        );

        Ok((pool, lp))
    }

    /// Deposit both assets and mint LP tokens.
    ///
    /// The full deposits join the reserves even when their ratio differs from
    /// the pool's; the surplus side is not refunded.
    pub fn add_liquidity(
        &mut self,
        deposit_x: Balance<X>,
        deposit_y: Balance<Y>,
    ) -> Result<LpToken<X, Y>> {
        let (amount_x, amount_y) = (deposit_x.value(), deposit_y.value());
        require!(amount_x > 0 && amount_y > 0, ErrorCode::InvalidAmount);

        let (reserve_x, reserve_y) = self.reserves();
        let mint_amount = compute_mint(reserve_x, reserve_y, amount_x, amount_y)?;
        require!(mint_amount > 0, ErrorCode::ZeroLiquidity);

        reserve_x.checked_add(amount_x).ok_or(ErrorCode::MathOverflow)?;
        reserve_y.checked_add(amount_y).ok_or(ErrorCode::MathOverflow)?;
        self.lp_supply()
            .checked_add(mint_amount)
            .ok_or(ErrorCode::MathOverflow)?;

        self.reserve_x.join(deposit_x)?;
        self.reserve_y.join(deposit_y)?;
        let lp = self.lp_supply.increase_supply(mint_amount)?;

        msg!(
            "add_liquidity pool={} deposit_x={} deposit_y={} minted={} reserve_x={} reserve_y={} lp_supply={}",
            self.id,
            amount_x,
            amount_y,
            mint_amount,
            self.reserve_x(),
            self.reserve_y(),
            self.lp_supply()
        );

        Ok(lp)
    }

    /// Sell `input` X for Y.
    pub fn swap_x_for_y(&mut self, input: Balance<X>) -> Result<Balance<Y>> {
        let output = swap_balances(&mut self.reserve_x, &mut self.reserve_y, input, &self.config)?;
        self.log_swap(Direction::XToY, output.value());
        Ok(output)
    }

    /// Sell `input` Y for X.
    pub fn swap_y_for_x(&mut self, input: Balance<Y>) -> Result<Balance<X>> {
        let output = swap_balances(&mut self.reserve_y, &mut self.reserve_x, input, &self.config)?;
        self.log_swap(Direction::YToX, output.value());
        Ok(output)
    }

    /// Price a swap against the current reserves without executing it.
    pub fn quote(&self, amount_in: u64, direction: Direction) -> Result<SwapQuote> {
        let (reserve_in, reserve_out) = self.directed_reserves(direction);
        quote(amount_in, reserve_in, reserve_out, &self.config)
    }

    /// Burn LP tokens for a proportional share of both reserves.
    pub fn remove_liquidity(&mut self, lp: LpToken<X, Y>) -> Result<(Balance<X>, Balance<Y>)> {
        let lp_amount = lp.value();
        let (withdrawn_x, withdrawn_y) =
            compute_withdraw(self.reserve_x(), self.reserve_y(), self.lp_supply(), lp_amount)?;

        self.lp_supply.decrease_supply(lp)?;
        let output_x = self.reserve_x.split(withdrawn_x)?;
        let output_y = self.reserve_y.split(withdrawn_y)?;

        msg!(
            "remove_liquidity pool={} burned={} withdrawn_x={} withdrawn_y={} reserve_x={} reserve_y={} lp_supply={}",
            self.id,
            lp_amount,
            withdrawn_x,
            withdrawn_y,
            self.reserve_x(),
            self.reserve_y(),
            self.lp_supply()
        );

        Ok((output_x, output_y))
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn reserve_x(&self) -> u64 {
        self.reserve_x.value()
    }

    pub fn reserve_y(&self) -> u64 {
        self.reserve_y.value()
    }

    /// Current price ratio, as `(reserve_x, reserve_y)`.
    pub fn reserves(&self) -> (u64, u64) {
        (self.reserve_x(), self.reserve_y())
    }

    pub fn lp_supply(&self) -> u64 {
        self.lp_supply.value()
    }

    pub fn config(&self) -> &AmmConfig {
        &self.config
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            id: self.id,
            reserve_x: self.reserve_x(),
            reserve_y: self.reserve_y(),
            lp_supply: self.lp_supply(),
            config: self.config,
        }
    }

    /// Rebuild a pool persisted by the host.
    pub fn from_snapshot(snapshot: PoolSnapshot) -> Result<Self> {
        require!(snapshot.is_consistent(), ErrorCode::InvalidSnapshot);

        Ok(Self {
            id: snapshot.id,
            reserve_x: Balance::new(snapshot.reserve_x),
            reserve_y: Balance::new(snapshot.reserve_y),
            lp_supply: Supply::with_value(snapshot.lp_supply),
            config: snapshot.config,
        })
    }

    fn directed_reserves(&self, direction: Direction) -> (u64, u64) {
        match direction {
            Direction::XToY => (self.reserve_x(), self.reserve_y()),
            Direction::YToX => (self.reserve_y(), self.reserve_x()),
        }
    }

    fn log_swap(&self, direction: Direction, amount_out: u64) {
        msg!(
            "swap pool={} direction={:?} amount_out={} reserve_x={} reserve_y={}",
            self.id,
            direction,
            amount_out,
            self.reserve_x(),
            self.reserve_y()
        );
    }
}

fn swap_balances<I, O>(
    reserve_in: &mut Balance<I>,
    reserve_out: &mut Balance<O>,
    input: Balance<I>,
    config: &AmmConfig,
) -> Result<Balance<O>> {
    let amount_in = input.value();
    let amount_out = get_amount_out(amount_in, reserve_in.value(), reserve_out.value(), config)?;
    reserve_in
        .value()
        .checked_add(amount_in)
        .ok_or(ErrorCode::MathOverflow)?;

    // the whole input, fee included, stays in the pool
    reserve_in.join(input)?;
    reserve_out.split(amount_out)
}

impl<X, Y> fmt::Debug for Pool<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("id", &self.id)
            .field("reserve_x", &self.reserve_x())
            .field("reserve_y", &self.reserve_y())
            .field("lp_supply", &self.lp_supply())
            .field("config", &self.config)
            .finish()
    }
}

//! Custody handles consumed by the pool.
//!
//! A [`Balance`] is a typed, fungible quantity of one asset. Handles of
//! different asset types cannot be mixed up, so a pool over `X` and `Y`
//! never credits the wrong reserve. [`Supply`] is the only source of
//! LP-token balances, which keeps outstanding LP tokens equal to the supply.

use std::fmt;
use std::marker::PhantomData;

use anchor_lang::prelude::*;
use borsh::{BorshDeserialize, BorshSerialize};

use crate::ErrorCode;

#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct PoolId([u8; 32]);

impl PoolId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<Pubkey> for PoolId {
    fn from(key: Pubkey) -> Self {
        Self(key.to_bytes())
    }
}

impl From<PoolId> for Pubkey {
    fn from(id: PoolId) -> Self {
        Pubkey::new_from_array(id.0)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Pubkey::from(*self), f)
    }
}

/// Identity allocation is owned by the host.
pub trait IdAllocator {
    fn next_id(&mut self) -> PoolId;
}

/// Allocates ids from a counter folded into a fixed 24-byte namespace.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    namespace: [u8; 24],
    next: u64,
}

impl SequentialIds {
    pub fn new(namespace: [u8; 24]) -> Self {
        Self { namespace, next: 0 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new([0; 24])
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&mut self) -> PoolId {
        let mut bytes = [0u8; 32];
        bytes[..24].copy_from_slice(&self.namespace);
        bytes[24..].copy_from_slice(&self.next.to_be_bytes());
        // wrapping after 2^64 pools is not a concern for a single host
        self.next = self.next.wrapping_add(1);
        PoolId(bytes)
    }
}

/// Marker for the LP token of a pool over `X` and `Y`.
pub struct Lp<X, Y>(PhantomData<(X, Y)>);

pub type LpToken<X, Y> = Balance<Lp<X, Y>>;

#[must_use = "dropping a balance destroys the asset it holds"]
pub struct Balance<T> {
    value: u64,
    _asset: PhantomData<T>,
}

impl<T> Balance<T> {
    /// Wrap `value` units handed over by the host's custody layer.
    pub fn new(value: u64) -> Self {
        Self {
            value,
            _asset: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Merge `other` into `self`, returning the new value.
    pub fn join(&mut self, other: Balance<T>) -> Result<u64> {
        self.value = self
            .value
            .checked_add(other.value)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.value)
    }

    pub fn split(&mut self, amount: u64) -> Result<Balance<T>> {
        require!(self.value >= amount, ErrorCode::InsufficientBalance);
        self.value -= amount;
        Ok(Balance::new(amount))
    }

    pub fn withdraw_all(&mut self) -> Balance<T> {
        let value = self.value;
        self.value = 0;
        Balance::new(value)
    }

    pub fn destroy_zero(self) -> Result<()> {
        require!(self.value == 0, ErrorCode::NonZeroBalance);
        Ok(())
    }
}

impl<T> fmt::Debug for Balance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Balance").field("value", &self.value).finish()
    }
}

impl<T> PartialEq for Balance<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Balance<T> {}

/// Outstanding quantity of a mintable token.
pub struct Supply<T> {
    value: u64,
    _token: PhantomData<T>,
}

impl<T> Supply<T> {
    pub fn new() -> Self {
        Self {
            value: 0,
            _token: PhantomData,
        }
    }

    /// Only used when restoring a persisted pool.
    pub(crate) fn with_value(value: u64) -> Self {
        Self {
            value,
            _token: PhantomData,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increase_supply(&mut self, amount: u64) -> Result<Balance<T>> {
        self.value = self
            .value
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(Balance::new(amount))
    }

    pub fn decrease_supply(&mut self, balance: Balance<T>) -> Result<u64> {
        self.value = self
            .value
            .checked_sub(balance.value)
            .ok_or(ErrorCode::InsufficientLpSupply)?;
        Ok(self.value)
    }
}

impl<T> Default for Supply<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Supply<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supply").field("value", &self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Usdc;

    #[test]
    fn test_balance_join_and_split() {
        let mut balance = Balance::<Usdc>::new(100);
        assert_eq!(balance.join(Balance::new(50)).unwrap(), 150);

        let part = balance.split(40).unwrap();
        assert_eq!(part.value(), 40);
        assert_eq!(balance.value(), 110);
    }

    #[test]
    fn test_balance_split_too_much() {
        let mut balance = Balance::<Usdc>::new(10);
        assert!(balance.split(11).is_err());
        assert_eq!(balance.value(), 10);
    }

    #[test]
    fn test_balance_join_overflow() {
        let mut balance = Balance::<Usdc>::new(u64::MAX);
        assert!(balance.join(Balance::new(1)).is_err());
        assert_eq!(balance.value(), u64::MAX);
    }

    #[test]
    fn test_destroy_zero() {
        assert!(Balance::<Usdc>::zero().destroy_zero().is_ok());
        assert!(Balance::<Usdc>::new(1).destroy_zero().is_err());
    }

    #[test]
    fn test_withdraw_all() {
        let mut balance = Balance::<Usdc>::new(7);
        assert_eq!(balance.withdraw_all().value(), 7);
        assert_eq!(balance.value(), 0);
    }

    #[test]
    fn test_supply_mint_and_burn() {
        let mut supply = Supply::<Usdc>::new();
        let minted = supply.increase_supply(500).unwrap();
        assert_eq!(supply.value(), 500);
        assert_eq!(supply.decrease_supply(minted).unwrap(), 0);
        assert!(supply.decrease_supply(Balance::new(1)).is_err());
    }

    #[test]
    fn test_sequential_ids_are_unique() {
        let mut ids = SequentialIds::new([7; 24]);
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(&first.to_bytes()[..24], &[7; 24]);
        assert_eq!(&second.to_bytes()[24..], &1u64.to_be_bytes());
    }

    #[test]
    fn test_pool_id_pubkey_conversion() {
        let key = Pubkey::new_from_array([9; 32]);
        let id = PoolId::from(key);
        assert_eq!(Pubkey::from(id), key);
        assert_eq!(id.to_string(), key.to_string());
    }
}

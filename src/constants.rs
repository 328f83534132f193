/// Denominator of every rate in the crate: 10^6 = 100%.
pub const MAX_PERCENTAGE: u64 = 1_000_000;

/// 0.3% trade fee, retained by the pool.
pub const DEFAULT_TRADE_FEE_RATE: u64 = 3_000;

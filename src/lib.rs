/// DEX Pool Library
///
/// This library provides the state and math core of a constant-product
/// liquidity pool over two assets: pool creation, liquidity deposits,
/// swaps and proportional withdrawals.

pub mod asset;
pub mod constants;
pub mod errors;
pub mod liquidity;
pub mod pool;
pub mod state;
pub mod swap;
pub mod utils;

// Re-export functions for convenience
pub use asset::{Balance, IdAllocator, Lp, LpToken, PoolId, SequentialIds, Supply};
pub use constants::{DEFAULT_TRADE_FEE_RATE, MAX_PERCENTAGE};
pub use errors::{error_code_number, ErrorCode};
pub use liquidity::{compute_mint, compute_withdraw};
pub use pool::Pool;
pub use state::{AmmConfig, Direction, PoolSnapshot, SwapQuote};
pub use swap::{get_amount_out, quote};
pub use utils::*;

use anchor_lang::prelude::Result;
use dex_pool::{Balance, Direction, Pool, SequentialIds};

struct TokenX;
struct TokenY;

fn main() -> Result<()> {
    // Example usage of the pool operations

    // Example 1: Create a pool
    let mut ids = SequentialIds::default();
    let (mut pool, lp) =
        Pool::<TokenX, TokenY>::create(&mut ids, Balance::new(1000), Balance::new(2000))?;
    println!(
        "Create: pool {} reserves {:?}, {} LP tokens minted",
        pool.id(),
        pool.reserves(),
        lp.value()
    );

    // Example 2: Quote and execute a swap
    let quote = pool.quote(100, Direction::XToY)?;
    let received = pool.swap_x_for_y(Balance::new(100))?;
    println!(
        "Swap: {} X in -> {} Y out (fee {}), reserves {:?}",
        quote.amount_in,
        received.value(),
        quote.trade_fee,
        pool.reserves()
    );

    // Example 3: Deposit liquidity
    let mut minted = pool.add_liquidity(Balance::new(550), Balance::new(910))?;
    println!(
        "Deposit: {} LP tokens minted, supply {}, reserves {:?}",
        minted.value(),
        pool.lp_supply(),
        pool.reserves()
    );

    // Example 4: Withdraw liquidity
    let burn = minted.split(minted.value() / 2)?;
    let burned = burn.value();
    let (x, y) = pool.remove_liquidity(burn)?;
    println!(
        "Withdraw: {} LP tokens -> {} X and {} Y, supply {}",
        burned,
        x.value(),
        y.value(),
        pool.lp_supply()
    );

    // Example 5: Rejected deposit
    if let Err(error) = Pool::<TokenX, TokenY>::create(&mut ids, Balance::new(0), Balance::new(5)) {
        println!("Create with empty X deposit rejected: {}", error);
    }

    Ok(())
}

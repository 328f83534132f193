use dex_pool::{error_code_number, Balance, Direction, ErrorCode, Pool, SequentialIds};

struct Sol;
struct Usdc;

#[test]
fn test_pool_lifecycle() {
    let mut ids = SequentialIds::new([3; 24]);

    let (mut pool, mut lp) =
        Pool::<Sol, Usdc>::create(&mut ids, Balance::new(1000), Balance::new(2000)).unwrap();
    assert_eq!(pool.reserves(), (1000, 2000));
    assert_eq!(pool.lp_supply(), 1000);

    let minted = pool
        .add_liquidity(Balance::new(500), Balance::new(1000))
        .unwrap();
    assert_eq!(minted.value(), 1000);
    assert_eq!(pool.lp_supply(), 2000);
    assert_eq!(pool.reserves(), (1500, 3000));
    lp.join(minted).unwrap();

    let (x, y) = pool.remove_liquidity(lp.split(500).unwrap()).unwrap();
    assert_eq!((x.value(), y.value()), (375, 750));
    assert_eq!(pool.lp_supply(), 1500);
    assert_eq!(pool.reserves(), (1125, 2250));

    let quote = pool.quote(100, Direction::XToY).unwrap();
    let out = pool.swap_x_for_y(Balance::new(100)).unwrap();
    assert_eq!(out.value(), quote.amount_out);
    assert_eq!(pool.reserves(), (1225, 2250 - quote.amount_out));

    // every outstanding LP token redeems, and nothing is left behind
    let (x, y) = pool.remove_liquidity(lp).unwrap();
    assert_eq!((x.value(), y.value()), (1225, 2250 - quote.amount_out));
    assert_eq!(pool.lp_supply(), 0);
    assert_eq!(pool.reserves(), (0, 0));
}

#[test]
fn test_swap_scenario() {
    let mut ids = SequentialIds::default();
    let (mut pool, _lp) =
        Pool::<Sol, Usdc>::create(&mut ids, Balance::new(1000), Balance::new(2000)).unwrap();

    let out = pool.swap_x_for_y(Balance::new(100)).unwrap();
    assert_eq!(out.value(), 181);
    assert_eq!(pool.reserves(), (1100, 1819));
}

#[test]
fn test_create_rejects_empty_side() {
    let mut ids = SequentialIds::default();
    let error = Pool::<Sol, Usdc>::create(&mut ids, Balance::new(0), Balance::new(5)).unwrap_err();
    assert_eq!(
        error_code_number(&error),
        Some(u32::from(ErrorCode::InvalidAmount))
    );
}

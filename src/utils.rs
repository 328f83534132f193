/// Arithmetic primitives shared by the pricing and liquidity engines.
///
/// Every product of two pool-scale quantities is taken in `u128` and checked.
/// Helpers return `None` on overflow or division by zero so that callers
/// decide which error the failure maps to.

pub fn floor_div(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    amount.checked_mul(numerator)?.checked_div(denominator)
}

pub fn ceil_div(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    amount
        .checked_mul(numerator)?
        .checked_add(denominator)?
        .checked_sub(1)?
        .checked_div(denominator)
}

/// `floor(a * b / c)` for `u64` operands, narrowed back to `u64`.
pub fn mul_div_floor(a: u64, b: u64, c: u64) -> Option<u64> {
    to_u64(floor_div(u128::from(a), u128::from(b), u128::from(c))?)
}

/// `ceil(a * b / c)` for `u64` operands, narrowed back to `u64`.
pub fn mul_div_ceil(a: u64, b: u64, c: u64) -> Option<u64> {
    to_u64(ceil_div(u128::from(a), u128::from(b), u128::from(c))?)
}

pub fn to_u64(value: u128) -> Option<u64> {
    u64::try_from(value).ok()
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce `numerator / denominator` to lowest terms.
///
/// Returns `None` for a zero denominator.
pub fn reduce_fraction(numerator: u64, denominator: u64) -> Option<(u64, u64)> {
    if denominator == 0 {
        return None;
    }
    let divisor = gcd(numerator, denominator);
    Some((numerator / divisor, denominator / divisor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(10, 3, 4), Some(7));
        assert_eq!(floor_div(10, 3, 0), None);
        assert_eq!(floor_div(u128::MAX, 2, 1), None);
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(10, 3, 4), Some(8));
        assert_eq!(ceil_div(12, 1, 4), Some(3));
        assert_eq!(ceil_div(10, 3, 0), None);
    }

    #[test]
    fn test_mul_div_uses_wide_intermediate() {
        // u64::MAX * u64::MAX would wrap in 64 bits
        assert_eq!(mul_div_floor(u64::MAX, u64::MAX, u64::MAX), Some(u64::MAX));
        assert_eq!(mul_div_ceil(u64::MAX, 3, 2), None);
        assert_eq!(mul_div_floor(u64::MAX, 3, 2), None);
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        assert_eq!(mul_div_floor(1, 1, 0), None);
        assert_eq!(mul_div_ceil(1, 1, 0), None);
    }

    #[test]
    fn test_reduce_fraction() {
        assert_eq!(reduce_fraction(997_000, 1_000_000), Some((997, 1000)));
        assert_eq!(reduce_fraction(1_000_000, 1_000_000), Some((1, 1)));
        assert_eq!(reduce_fraction(0, 1_000_000), Some((0, 1)));
        assert_eq!(reduce_fraction(5, 0), None);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }
}

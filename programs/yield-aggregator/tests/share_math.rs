use yield_aggregator::components::{convert_to_assets, convert_to_shares, mul_div, Rounding};
use yield_aggregator::utils::AggregatorError;

// --- mul_div ---

#[test]
fn mul_div_floor_and_ceil() {
    assert_eq!(mul_div(10, 1, 3, Rounding::Floor).unwrap(), 3);
    assert_eq!(mul_div(10, 1, 3, Rounding::Ceil).unwrap(), 4);
    assert_eq!(mul_div(9, 1, 3, Rounding::Ceil).unwrap(), 3);
}

#[test]
fn mul_div_uses_wide_intermediate() {
    assert_eq!(mul_div(u64::MAX, u64::MAX, u64::MAX, Rounding::Floor).unwrap(), u64::MAX);
}

#[test]
fn mul_div_zero_denominator_fails() {
    let err = mul_div(1, 1, 0, Rounding::Floor).unwrap_err();
    assert_eq!(u32::from(err), u32::from(AggregatorError::OverflowInDiv));
}

#[test]
fn mul_div_result_too_large_fails() {
    let err = mul_div(u64::MAX, 2, 1, Rounding::Floor).unwrap_err();
    assert_eq!(u32::from(err), u32::from(AggregatorError::OverflowInCast));
}

// --- virtual offset ---

#[test]
fn empty_pool_mints_at_offset_ratio() {
    // 1_000 * (0 + 10^4) / (0 + 1)
    assert_eq!(convert_to_shares(1_000, 0, 0, 4, Rounding::Floor).unwrap(), 10_000_000);
}

#[test]
fn conversions_round_in_pool_favor() {
    // 1_000 assets, 10_000_000 shares: 1 share is worth 1001 / 10_010_000 assets
    let shares_floor = convert_to_shares(1, 1_000, 10_000_000, 4, Rounding::Floor).unwrap();
    let shares_ceil = convert_to_shares(1, 1_000, 10_000_000, 4, Rounding::Ceil).unwrap();
    assert_eq!(shares_floor, 10_000);
    assert_eq!(shares_ceil, 10_000);

    assert_eq!(convert_to_assets(9_999, 1_000, 10_000_000, 4, Rounding::Floor).unwrap(), 0);
    assert_eq!(convert_to_assets(9_999, 1_000, 10_000_000, 4, Rounding::Ceil).unwrap(), 1);
}

#[test]
fn donation_to_empty_pool_barely_moves_price() {
    // 1_000_000 donated before any deposit; first depositor of 1_000 still gets
    // 1_000 * 10^4 / 1_000_001 shares rather than zero
    let shares = convert_to_shares(1_000, 1_000_000, 0, 4, Rounding::Floor).unwrap();
    assert_eq!(shares, 9);
}

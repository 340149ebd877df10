use crate::{
    components::{mul_div_wide, Rounding},
    utils::AggregatorError,
};

/// Converts assets to shares against a virtual offset of `10^decimals_offset` shares and
/// one asset: `assets * (supply + 10^offset) / (total_assets + 1)`.
pub fn convert_to_shares(
    assets: u64,
    total_assets: u64,
    total_supply: u64,
    decimals_offset: u8,
    rounding: Rounding,
) -> Result<u64, AggregatorError> {
    mul_div_wide(
        assets as u128,
        total_supply as u128 + virtual_shares(decimals_offset),
        total_assets as u128 + 1,
        rounding,
    )
}

/// Inverse of [`convert_to_shares`]: `shares * (total_assets + 1) / (supply + 10^offset)`.
pub fn convert_to_assets(
    shares: u64,
    total_assets: u64,
    total_supply: u64,
    decimals_offset: u8,
    rounding: Rounding,
) -> Result<u64, AggregatorError> {
    mul_div_wide(
        shares as u128,
        total_assets as u128 + 1,
        total_supply as u128 + virtual_shares(decimals_offset),
        rounding,
    )
}

fn virtual_shares(decimals_offset: u8) -> u128 {
    10u128.pow(decimals_offset as u32)
}

use crate::utils::AggregatorError;

/// Rounding direction for integer division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// Computes `value * numerator / denominator` with a 128-bit intermediate.
///
/// # Arguments
/// * `value` - The amount being scaled
/// * `numerator` - Scale factor numerator
/// * `denominator` - Scale factor denominator, must be non-zero
/// * `rounding` - Direction applied to the remainder
///
/// # Returns
/// * `Result<u64, AggregatorError>` - The scaled amount, or an overflow error when the
///   result does not fit into `u64` or the denominator is zero
pub fn mul_div(
    value: u64,
    numerator: u64,
    denominator: u64,
    rounding: Rounding,
) -> Result<u64, AggregatorError> {
    mul_div_wide(value as u128, numerator as u128, denominator as u128, rounding)
}

/// Same as [`mul_div`] for operands that may already exceed `u64` (virtual offsets).
pub fn mul_div_wide(
    value: u128,
    numerator: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u64, AggregatorError> {
    if denominator == 0 {
        return Err(AggregatorError::OverflowInDiv);
    }

    let product = value
        .checked_mul(numerator)
        .ok_or(AggregatorError::OverflowInMul)?;

    let mut quotient = product / denominator;
    if rounding == Rounding::Ceil && product % denominator != 0 {
        quotient += 1;
    }

    u64::try_from(quotient).map_err(|_| AggregatorError::OverflowInCast)
}

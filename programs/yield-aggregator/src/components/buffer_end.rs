use crate::utils::AggregatorError;

/// Weighted average of the current release end and the end of a fresh window.
///
/// The remaining buffered shares keep weighting `current_end`; the newly buffered
/// shares weight `fresh_end`. Any remainder rounds up, so the returned timestamp never
/// lands before the exact weighted average.
///
/// # Arguments
/// * `remaining_shares` - Buffered shares left after the release step
/// * `current_end` - Release end already scheduled for them
/// * `added_shares` - Shares entering the buffer
/// * `fresh_end` - `now + buffering_duration`
pub fn weighted_buffer_end(
    remaining_shares: u64,
    current_end: i64,
    added_shares: u64,
    fresh_end: i64,
) -> Result<i64, AggregatorError> {
    let total_weight = remaining_shares as i128 + added_shares as i128;
    if total_weight == 0 {
        return Ok(current_end);
    }

    let weighted = (remaining_shares as i128)
        .checked_mul(current_end as i128)
        .and_then(|lhs| {
            (added_shares as i128)
                .checked_mul(fresh_end as i128)
                .and_then(|rhs| lhs.checked_add(rhs))
        })
        .ok_or(AggregatorError::OverflowInMul)?;

    // div_euclid floors for a positive divisor; bump on any remainder
    let mut end = weighted.div_euclid(total_weight);
    if weighted.rem_euclid(total_weight) != 0 {
        end += 1;
    }

    i64::try_from(end).map_err(|_| AggregatorError::OverflowInCast)
}

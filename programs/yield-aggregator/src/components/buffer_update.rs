use crate::{
    components::{mul_div, released_shares, weighted_buffer_end, Rounding},
    states::BufferState,
    utils::{AggregatorError, BPS_SCALE},
};

/// Outcome of a holdings-state update on the reward buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferUpdate {
    /// Buffer after the update; written back as-is by the caller.
    pub buffer: BufferState,
    /// Shares minted to the pool's own buffered balance (net of release burns).
    pub shares_to_mint: u64,
    /// Shares burned from the pool's own buffered balance (net of gain mints).
    pub shares_to_burn: u64,
    /// Shares minted to the protocol fee receiver.
    pub fee_shares: u64,
    /// Buffered shares released by the elapsed time alone.
    pub released_shares: u64,
}

impl BufferUpdate {
    fn unchanged(buffer: &BufferState) -> Self {
        BufferUpdate {
            buffer: buffer.clone(),
            shares_to_mint: 0,
            shares_to_burn: 0,
            fee_shares: 0,
            released_shares: 0,
        }
    }

    /// Raw supply after applying the mint/burn instructions.
    pub fn supply_after(&self, raw_supply: u64) -> Result<u64, AggregatorError> {
        raw_supply
            .checked_add(self.shares_to_mint)
            .and_then(|v| v.checked_add(self.fee_shares))
            .ok_or(AggregatorError::OverflowInAdd)?
            .checked_sub(self.shares_to_burn)
            .ok_or(AggregatorError::OverflowInSub)
    }
}

/// Converts the value reported by the positions into share mint/burn instructions.
///
/// Gains are minted as buffered shares released over `buffering_duration`; losses burn
/// buffered shares up to the size of the buffer, the rest lowers the price per share.
/// With `cached_assets == 0` nothing happens: the first deposit establishes the baseline.
///
/// # Arguments
/// * `buffer` - Current buffer state
/// * `reported_assets` - Idle balance plus the value of every registered vault position
/// * `raw_supply` - Raw share supply, buffered shares included
/// * `now` - Current unix timestamp
///
/// # Returns
/// * `Result<BufferUpdate, AggregatorError>` - New buffer plus the share instructions
pub fn compute_buffer_update(
    buffer: &BufferState,
    reported_assets: u64,
    raw_supply: u64,
    now: i64,
) -> Result<BufferUpdate, AggregatorError> {
    if buffer.cached_assets == 0 {
        return Ok(BufferUpdate::unchanged(buffer));
    }
    if now < buffer.last_update {
        return Err(AggregatorError::ClockWentBackwards);
    }

    let mut next = buffer.clone();

    // Release: released = buffered * elapsed / (buffer_end - last_update)
    let released = released_shares(buffer, now);
    next.buffered_shares = next
        .buffered_shares
        .checked_sub(released)
        .ok_or(AggregatorError::OverflowInSub)?;
    next.buffer_end = next.buffer_end.max(now);

    // Released shares are gone economically: price against what remains
    let supply = raw_supply
        .checked_sub(released)
        .ok_or(AggregatorError::OverflowInSub)?;

    // Gain:  minted = gain * supply / cached_assets, fee = ceil(minted * fee_bps / 10_000)
    // Loss:  burned = min(ceil(loss * supply / cached_assets), buffered)
    let GainLoss { gross_mint, fee_shares, loss_burn } =
        gain_loss(&mut next, reported_assets, supply, now)?;

    // Release burn and gain mint cancel out before anything is applied
    let mut shares_to_mint = gross_mint - fee_shares;
    let mut shares_to_burn = released
        .checked_add(loss_burn)
        .ok_or(AggregatorError::OverflowInAdd)?;
    let overlap = shares_to_mint.min(shares_to_burn);
    shares_to_mint -= overlap;
    shares_to_burn -= overlap;

    next.cached_assets = reported_assets;
    next.last_update = now;

    Ok(BufferUpdate {
        buffer: next,
        shares_to_mint,
        shares_to_burn,
        fee_shares,
        released_shares: released,
    })
}

struct GainLoss {
    gross_mint: u64,
    fee_shares: u64,
    loss_burn: u64,
}

fn gain_loss(
    next: &mut BufferState,
    reported_assets: u64,
    supply: u64,
    now: i64,
) -> Result<GainLoss, AggregatorError> {
    let cached = next.cached_assets;
    if cached == 0 {
        return Err(AggregatorError::UninitializedBuffer);
    }

    if reported_assets >= cached {
        let gain = reported_assets - cached;
        let gross_mint = mul_div(gain, supply, cached, Rounding::Floor)?;
        if gross_mint == 0 {
            return Ok(GainLoss { gross_mint: 0, fee_shares: 0, loss_burn: 0 });
        }

        let fee_shares = mul_div(gross_mint, next.protocol_fee_bps, BPS_SCALE, Rounding::Ceil)?
            .min(gross_mint);
        let locked = gross_mint - fee_shares;

        if locked > 0 {
            let fresh_end = now
                .checked_add(next.buffering_duration)
                .ok_or(AggregatorError::OverflowInAdd)?;
            next.buffer_end =
                weighted_buffer_end(next.buffered_shares, next.buffer_end, locked, fresh_end)?;
            next.buffered_shares = next
                .buffered_shares
                .checked_add(locked)
                .ok_or(AggregatorError::OverflowInAdd)?;
        }

        Ok(GainLoss { gross_mint, fee_shares, loss_burn: 0 })
    } else {
        let loss = cached - reported_assets;
        let loss_in_shares = mul_div(loss, supply, cached, Rounding::Ceil)?;

        // The buffer absorbs at most its own size; the rest hits every holder
        let loss_burn = loss_in_shares.min(next.buffered_shares);
        next.buffered_shares -= loss_burn;

        Ok(GainLoss { gross_mint: 0, fee_shares: 0, loss_burn })
    }
}

use crate::states::BufferState;

/// Number of buffered shares whose release window has elapsed at `now`.
///
/// Release is linear between `last_update` and `buffer_end`:
/// * an empty window (`buffer_end == last_update`) or no elapsed time releases nothing
/// * reaching or passing `buffer_end` releases the whole buffer
/// * otherwise `buffered * elapsed / duration`, floored
pub fn released_shares(buffer: &BufferState, now: i64) -> u64 {
    let duration = buffer.buffer_end.saturating_sub(buffer.last_update);
    let elapsed = now.saturating_sub(buffer.last_update);

    if duration <= 0 || elapsed <= 0 || buffer.buffered_shares == 0 {
        return 0;
    }

    if elapsed >= duration {
        return buffer.buffered_shares;
    }

    // elapsed < duration, so the quotient stays below buffered_shares
    ((buffer.buffered_shares as u128 * elapsed as u128) / duration as u128) as u64
}

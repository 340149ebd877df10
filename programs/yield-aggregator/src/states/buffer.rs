use anchor_lang::prelude::*;

/// Reward buffer: cached valuation, release schedule and fee configuration.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferState {
    /// Last known total value in base-asset units. Zero means "awaiting first deposit".
    pub cached_assets: u64,
    /// Shares minted for unreleased gains, held by the pool itself.
    pub buffered_shares: u64,
    pub last_update: i64,
    /// End of the linear release window; never before `last_update`.
    pub buffer_end: i64,
    /// Length of the window a fresh gain is released over.
    pub buffering_duration: i64,

    pub protocol_fee_bps: u64,
    pub protocol_fee_receiver: Pubkey,
}

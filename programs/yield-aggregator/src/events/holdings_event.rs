use anchor_lang::prelude::*;

#[event]
pub struct HoldingsStateUpdatedEvent {
    pub old_total_assets: u64,
    pub new_total_assets: u64,
    pub shares_minted: u64,
    pub shares_burned: u64,
    pub fee_shares: u64,
    pub buffered_shares: u64,
    pub buffer_end: i64
}

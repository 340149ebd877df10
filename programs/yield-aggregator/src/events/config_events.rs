use anchor_lang::prelude::*;

#[event]
pub struct ProtocolFeeEvent {
    pub protocol_fee_bps: u64,
    pub protocol_fee_receiver: Pubkey
}

#[event]
pub struct PauseEvent {
    pub paused: bool
}

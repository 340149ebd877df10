use anchor_lang::prelude::*;

#[event]
pub struct WithdrawEvent {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub assets: u64,
    pub shares: u64
}

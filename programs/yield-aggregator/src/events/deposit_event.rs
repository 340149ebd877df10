use anchor_lang::prelude::*;

#[event]
pub struct DepositEvent {
    pub sender: Pubkey,
    pub owner: Pubkey,
    pub assets: u64,
    pub shares: u64
}

use anchor_lang::prelude::*;

#[event]
pub struct VaultAddedEvent {
    pub vault: Pubkey
}

#[event]
pub struct VaultRemovedEvent {
    pub vault: Pubkey,
    pub forced: bool,
    pub assets_recovered: u64
}

use anchor_lang::prelude::*;
use crate::states::{BufferState, ShareLedger, VaultEntry};

#[account]
#[derive(Debug)]
pub struct PoolState {
    /// The pool's own address; holds buffered shares and vault positions.
    pub key: Pubkey,
    pub asset_mint: Pubkey,
    pub decimals_offset: u8,

    /// Base asset held directly by the pool, outside any vault.
    pub idle_assets: u64,

    pub buffer: BufferState,
    /// Ordered, at most `MAX_VAULTS` entries, no duplicates.
    pub registry: Vec<VaultEntry>,
    pub shares: ShareLedger,

    pub paused: bool,
    /// Reentrancy flag, held for the duration of a state-changing entry point.
    pub entered: bool,
}

impl PoolState {
    pub fn entry_index(&self, vault: &Pubkey) -> Option<usize> {
        self.registry.iter().position(|entry| entry.vault == *vault)
    }

    pub fn entry(&self, vault: &Pubkey) -> Option<&VaultEntry> {
        self.registry.iter().find(|entry| entry.vault == *vault)
    }

    pub fn registered_vaults(&self) -> Vec<Pubkey> {
        self.registry.iter().map(|entry| entry.vault).collect()
    }
}

use anchor_lang::prelude::*;

/// Registered vault and the share of total value governance lets it hold.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultEntry {
    pub vault: Pubkey,
    /// 0..=10_000; only enforced by `push_funds`
    pub allocation_limit_bps: u64,
}

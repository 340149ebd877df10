use anchor_lang::prelude::*;

/// Organic deposit routed into a vault after a user deposit.
#[event]
pub struct VaultDepositEvent {
    pub vault: Pubkey,
    pub assets: u64
}

/// Governance push (`pushed = true`) or pull between idle balance and a vault.
#[event]
pub struct RebalanceEvent {
    pub vault: Pubkey,
    pub assets: u64,
    pub pushed: bool
}

#[event]
pub struct AllocationLimitEvent {
    pub vault: Pubkey,
    pub allocation_limit_bps: u64
}

#[event]
pub struct SequentialFallbackEvent {
    pub assets_required: u64,
    pub idle_assets: u64
}

#[event]
pub struct VaultWithdrawalFailedEvent {
    pub vault: Pubkey,
    pub assets: u64
}

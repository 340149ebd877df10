use anchor_lang::prelude::*;

/// Privileged capabilities gated by the governance collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// add, remove, force-remove and best-effort exit of vaults
    ManageVaults,
    SetAllocationLimit,
    SetProtocolFee,
    PauseUserInteractions,
    /// push / pull rebalancing
    Rebalance,
}

/// Authorization predicate injected into the pool. Delays and timelocks live outside.
pub trait Authorizer {
    fn is_authorized(&self, caller: &Pubkey, capability: Capability) -> bool;
}

/// A single governance principal holding every capability.
impl Authorizer for Pubkey {
    fn is_authorized(&self, caller: &Pubkey, _capability: Capability) -> bool {
        self == caller
    }
}

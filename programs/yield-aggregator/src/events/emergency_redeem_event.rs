use anchor_lang::prelude::*;

/// Slice of one vault's shares handed out by an emergency redemption.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultShareSlice {
    pub vault: Pubkey,
    pub shares: u64,
    pub assets_value: u64,
}

#[event]
pub struct EmergencyRedeemEvent {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub shares: u64,
    pub idle_assets: u64,
    pub vault_shares: Vec<VaultShareSlice>
}

use anchor_lang::prelude::*;

/// Capability surface every registered external vault must expose.
///
/// Vaults are untrusted. Every call is fallible and the pool decides per call site
/// whether a failure aborts the operation or is tolerated. The `max_*` queries are
/// supposed to be non-failing; a failure there is read as zero capacity.
pub trait ExternalVault {
    /// Address of the vault; also the mint of its shares.
    fn key(&self) -> Pubkey;

    /// Base asset accepted by the vault.
    fn asset(&self) -> Result<Pubkey>;

    fn balance_of(&self, owner: &Pubkey) -> Result<u64>;

    fn convert_to_assets(&self, shares: u64) -> Result<u64>;

    fn convert_to_shares(&self, assets: u64) -> Result<u64>;

    fn max_deposit(&self, receiver: &Pubkey) -> Result<u64>;

    fn max_withdraw(&self, owner: &Pubkey) -> Result<u64>;

    fn max_redeem(&self, owner: &Pubkey) -> Result<u64>;

    /// Deposits `assets`, returning the shares minted to `receiver`.
    fn deposit(&mut self, assets: u64, receiver: &Pubkey) -> Result<u64>;

    /// Withdraws exactly `assets` to `receiver`, returning the shares burned from `owner`.
    fn withdraw(&mut self, assets: u64, receiver: &Pubkey, owner: &Pubkey) -> Result<u64>;

    /// Redeems `shares` of `owner`, returning the assets paid to `receiver`.
    fn redeem(&mut self, shares: u64, receiver: &Pubkey, owner: &Pubkey) -> Result<u64>;

    /// Moves vault shares between holders.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, shares: u64) -> Result<()>;
}

use anchor_lang::prelude::*;
use crate::{
    components::{convert_to_assets, convert_to_shares, released_shares, Rounding},
    interfaces::ExternalVault,
    pool::Pool,
};

/// Read-only share-pool surface. Nothing here mutates the pool; every figure is taken
/// from a simulated holdings update at `now`, so a preview equals the real operation
/// executed at the same instant.
impl<V: ExternalVault + Clone> Pool<V> {
    /// Raw supply minus the buffered shares already releasable at `now`.
    pub fn total_supply(&self, now: i64) -> u64 {
        self.state.shares.raw_supply
            .saturating_sub(released_shares(&self.state.buffer, now))
    }

    /// Share balance; the pool's own balance is reduced by its releasable shares.
    pub fn balance_of(&self, owner: &Pubkey, now: i64) -> u64 {
        let balance = self.state.shares.balance(owner);
        if *owner == self.state.key {
            balance.saturating_sub(released_shares(&self.state.buffer, now))
        } else {
            balance
        }
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.state.shares.allowance(owner, spender)
    }

    pub fn total_assets(&self, now: i64) -> Result<u64> {
        Ok(self.preview_holdings(now)?.0)
    }

    pub fn convert_to_shares(&self, assets: u64, now: i64) -> Result<u64> {
        self.shares_for(assets, now, Rounding::Floor)
    }

    pub fn convert_to_assets(&self, shares: u64, now: i64) -> Result<u64> {
        self.assets_for(shares, now, Rounding::Floor)
    }

    pub fn preview_deposit(&self, assets: u64, now: i64) -> Result<u64> {
        self.shares_for(assets, now, Rounding::Floor)
    }

    pub fn preview_mint(&self, shares: u64, now: i64) -> Result<u64> {
        self.assets_for(shares, now, Rounding::Ceil)
    }

    pub fn preview_withdraw(&self, assets: u64, now: i64) -> Result<u64> {
        self.shares_for(assets, now, Rounding::Ceil)
    }

    pub fn preview_redeem(&self, shares: u64, now: i64) -> Result<u64> {
        self.assets_for(shares, now, Rounding::Floor)
    }

    pub fn max_deposit(&self, _receiver: &Pubkey, now: i64) -> Result<u64> {
        if self.state.paused {
            return Ok(0);
        }
        let total_assets = self.total_assets(now)?.max(self.state.idle_assets);
        Ok(u64::MAX - total_assets)
    }

    pub fn max_mint(&self, receiver: &Pubkey, now: i64) -> Result<u64> {
        let max_assets = self.max_deposit(receiver, now)?;
        // Share conversion of the full asset headroom overflows u64 in most states
        Ok(self.preview_deposit(max_assets, now).unwrap_or(u64::MAX))
    }

    pub fn max_withdraw(&self, owner: &Pubkey, now: i64) -> Result<u64> {
        if self.state.paused {
            return Ok(0);
        }
        let owned = self.preview_redeem(self.balance_of(owner, now), now)?;
        Ok(owned.min(self.available_liquidity()))
    }

    pub fn max_redeem(&self, owner: &Pubkey, now: i64) -> Result<u64> {
        if self.state.paused {
            return Ok(0);
        }
        let balance = self.balance_of(owner, now);
        let liquid_shares = self
            .convert_to_shares(self.available_liquidity(), now)
            .unwrap_or(u64::MAX);
        Ok(balance.min(liquid_shares))
    }

    /// Idle balance plus what every registered vault currently lets the pool withdraw.
    /// A failing `max_withdraw` counts as zero.
    pub fn available_liquidity(&self) -> u64 {
        self.state.registry.iter().fold(self.state.idle_assets, |total, entry| {
            let capacity = self
                .vault(&entry.vault)
                .and_then(|vault| vault.max_withdraw(&self.state.key))
                .unwrap_or(0);
            total.saturating_add(capacity)
        })
    }

    fn shares_for(&self, assets: u64, now: i64, rounding: Rounding) -> Result<u64> {
        let (total_assets, total_supply) = self.preview_holdings(now)?;
        Ok(convert_to_shares(assets, total_assets, total_supply, self.state.decimals_offset, rounding)?)
    }

    fn assets_for(&self, shares: u64, now: i64, rounding: Rounding) -> Result<u64> {
        let (total_assets, total_supply) = self.preview_holdings(now)?;
        Ok(convert_to_assets(shares, total_assets, total_supply, self.state.decimals_offset, rounding)?)
    }
}

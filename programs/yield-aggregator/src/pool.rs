use std::{collections::BTreeMap, sync::Arc};

use anchor_lang::prelude::*;
use crate::{
    components::{compute_buffer_update, BufferUpdate},
    events::HoldingsStateUpdatedEvent,
    interfaces::{Authorizer, ExternalVault},
    states::PoolState,
    utils::AggregatorError,
};

/// A pool instance: its state account, the external vaults it can reach and the
/// governance authorizer.
///
/// `vaults` is the environment (every vault the pool may talk to, keyed by address);
/// `state.registry` decides which of them participate in allocation.
#[derive(Clone)]
pub struct Pool<V> {
    pub state: PoolState,
    pub vaults: BTreeMap<Pubkey, V>,
    pub authority: Arc<dyn Authorizer>,
}

impl<V: ExternalVault + Clone> Pool<V> {
    /// Makes an external vault reachable. Registration is a separate governance step.
    pub fn attach_vault(&mut self, vault: V) {
        self.vaults.insert(vault.key(), vault);
    }

    pub fn vault(&self, key: &Pubkey) -> Result<&V> {
        self.vaults.get(key).ok_or_else(|| error!(AggregatorError::UnknownVault))
    }

    pub fn vault_mut(&mut self, key: &Pubkey) -> Result<&mut V> {
        self.vaults.get_mut(key).ok_or_else(|| error!(AggregatorError::UnknownVault))
    }

    /// Base-asset value of the pool's position in `key`.
    pub fn value_of(&self, key: &Pubkey) -> Result<u64> {
        let vault = self.vault(key)?;
        let shares = vault.balance_of(&self.state.key)?;
        if shares == 0 {
            return Ok(0);
        }
        vault.convert_to_assets(shares)
    }

    /// Idle balance plus the value of every registered position.
    pub fn live_total_assets(&self) -> Result<u64> {
        self.state.registry.iter().try_fold(self.state.idle_assets, |total, entry| {
            let value = self.value_of(&entry.vault)?;
            total
                .checked_add(value)
                .ok_or_else(|| error!(AggregatorError::OverflowInAdd))
        })
    }

    /// Runs `op` as one guarded, all-or-nothing step.
    ///
    /// Fails with `ReentrantCall` while another entry point holds the flag. On error the
    /// pool (state and reachable vaults) is restored to the state before the call.
    pub(crate) fn atomic<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        require!(!self.state.entered, AggregatorError::ReentrantCall);

        let checkpoint = self.clone();
        self.state.entered = true;

        match op(self) {
            Ok(out) => {
                self.state.entered = false;
                Ok(out)
            }
            Err(err) => {
                *self = checkpoint;
                Err(err)
            }
        }
    }

    /// Nested all-or-nothing step inside an entry point; the guard stays held.
    pub(crate) fn try_atomic<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let checkpoint = self.clone();

        match op(self) {
            Ok(out) => Ok(out),
            Err(err) => {
                *self = checkpoint;
                Err(err)
            }
        }
    }

    /// Reward buffer update against the live valuation; applies the share instructions.
    pub(crate) fn sync_holdings(&mut self, now: i64) -> Result<BufferUpdate> {
        let old_total_assets = self.state.buffer.cached_assets;
        if old_total_assets == 0 {
            return Ok(compute_buffer_update(&self.state.buffer, 0, self.state.shares.raw_supply, now)?);
        }

        let reported = self.live_total_assets()?;
        let update = compute_buffer_update(
            &self.state.buffer,
            reported,
            self.state.shares.raw_supply,
            now,
        )?;

        let pool_key = self.state.key;
        let fee_receiver = update.buffer.protocol_fee_receiver;
        self.state.shares.burn(&pool_key, update.shares_to_burn)?;
        self.state.shares.mint(&pool_key, update.shares_to_mint)?;
        self.state.shares.mint(&fee_receiver, update.fee_shares)?;
        self.state.buffer = update.buffer.clone();

        emit!(HoldingsStateUpdatedEvent {
            old_total_assets,
            new_total_assets: reported,
            shares_minted: update.shares_to_mint,
            shares_burned: update.shares_to_burn,
            fee_shares: update.fee_shares,
            buffered_shares: self.state.buffer.buffered_shares,
            buffer_end: self.state.buffer.buffer_end
        });

        Ok(update)
    }

    /// Total assets and raw supply the next holdings update would produce at `now`.
    pub fn preview_holdings(&self, now: i64) -> Result<(u64, u64)> {
        let raw_supply = self.state.shares.raw_supply;
        if self.state.buffer.cached_assets == 0 {
            return Ok((0, raw_supply));
        }

        let update = compute_buffer_update(
            &self.state.buffer,
            self.live_total_assets()?,
            raw_supply,
            now,
        )?;
        Ok((update.buffer.cached_assets, update.supply_after(raw_supply)?))
    }

    /// Moves idle assets into a vault, returning the vault shares received.
    pub(crate) fn deposit_into_vault(&mut self, key: &Pubkey, assets: u64) -> Result<u64> {
        require_gte!(self.state.idle_assets, assets, AggregatorError::InsufficientIdle);

        let pool_key = self.state.key;
        self.state.idle_assets -= assets;
        self.vault_mut(key)?.deposit(assets, &pool_key)
    }

    /// Withdraws exactly `assets` from a vault into the idle balance.
    pub(crate) fn withdraw_from_vault(&mut self, key: &Pubkey, assets: u64) -> Result<u64> {
        let pool_key = self.state.key;
        let shares = self.vault_mut(key)?.withdraw(assets, &pool_key, &pool_key)?;
        self.credit_idle(assets)?;
        Ok(shares)
    }

    /// Redeems vault shares into the idle balance, returning the assets received.
    pub(crate) fn redeem_from_vault(&mut self, key: &Pubkey, shares: u64) -> Result<u64> {
        let pool_key = self.state.key;
        let assets = self.vault_mut(key)?.redeem(shares, &pool_key, &pool_key)?;
        self.credit_idle(assets)?;
        Ok(assets)
    }

    pub(crate) fn credit_idle(&mut self, assets: u64) -> Result<()> {
        self.state.idle_assets = self.state.idle_assets
            .checked_add(assets)
            .ok_or(AggregatorError::OverflowInAdd)?;
        Ok(())
    }
}

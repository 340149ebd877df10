use anchor_lang::prelude::*;
use crate::{
    components::{mul_div, Rounding},
    events::{EmergencyRedeemEvent, VaultShareSlice},
    interfaces::ExternalVault,
    pool::Pool,
    utils::AggregatorError,
};

/// What an emergency redemption handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyRedemption {
    /// Base asset paid out of the idle balance.
    pub idle_assets: u64,
    /// Raw vault shares transferred, one slice per registered vault with a non-zero cut.
    pub vault_shares: Vec<VaultShareSlice>,
}

/// Burn `shares` of `owner` for a pro-rata slice of the idle balance and of the pool's
/// shares in every registered vault.
///
/// Works while user interactions are paused and never calls a vault's `withdraw` or
/// `redeem`, so a stuck vault cannot block it. Vault shares are handed over as-is.
pub fn emergency_redeem<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    shares: u64,
    receiver: &Pubkey,
    owner: &Pubkey,
    now: i64,
) -> Result<EmergencyRedemption> {
    pool.atomic(|pool| {
        require!(shares > 0, AggregatorError::ZeroShares);

        pool.sync_holdings(now)?;

        let balance = pool.state.shares.balance(owner);
        if shares > balance {
            return Err(error!(AggregatorError::ExceedsMaxRedeem).with_values((shares, balance)));
        }
        if signer != owner {
            pool.state.shares.spend_allowance(owner, signer, shares)?;
        }

        // Nothing is releasable right after the update, so raw supply is the reported one
        let total_supply = pool.state.shares.raw_supply;
        let pool_key = pool.state.key;

        let idle_out = mul_div(pool.state.idle_assets, shares, total_supply, Rounding::Floor)?;

        let mut slices = Vec::new();
        for vault_key in pool.state.registered_vaults() {
            let vault = pool.vault(&vault_key)?;
            let held = vault.balance_of(&pool_key)?;
            let slice = mul_div(held, shares, total_supply, Rounding::Floor)?;
            if slice == 0 {
                continue;
            }
            slices.push(VaultShareSlice {
                vault: vault_key,
                shares: slice,
                assets_value: vault.convert_to_assets(slice)?,
            });
        }

        let value_removed = slices.iter().try_fold(idle_out, |total, slice| {
            total.checked_add(slice.assets_value).ok_or(AggregatorError::OverflowInAdd)
        })?;

        // Burn before anything leaves the pool
        pool.state.shares.burn(owner, shares)?;
        pool.state.buffer.cached_assets = pool.state.buffer.cached_assets
            .checked_sub(value_removed)
            .ok_or(AggregatorError::OverflowInSub)?;
        pool.state.idle_assets -= idle_out;

        for slice in &slices {
            pool.vault_mut(&slice.vault)?.transfer(&pool_key, receiver, slice.shares)?;
        }

        msg!(
            "EmergencyRedeem {{owner: {}, shares: {}, idle_assets: {}, vaults: {}}}",
            owner,
            shares,
            idle_out,
            slices.len()
        );
        emit!(EmergencyRedeemEvent {
            sender: *signer,
            receiver: *receiver,
            owner: *owner,
            shares,
            idle_assets: idle_out,
            vault_shares: slices.clone()
        });

        Ok(EmergencyRedemption {
            idle_assets: idle_out,
            vault_shares: slices,
        })
    })
}

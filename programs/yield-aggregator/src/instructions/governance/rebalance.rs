use anchor_lang::prelude::*;
use crate::{
    components::{check_authority, mul_div, Rounding},
    events::RebalanceEvent,
    interfaces::{Capability, ExternalVault},
    pool::Pool,
    utils::{AggregatorError, BPS_SCALE},
};

/// Move idle assets into a registered vault.
///
/// After the push the vault may hold at most `total_assets * limit_bps / 10_000`;
/// otherwise the whole push is rejected.
pub fn push_funds<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    assets: u64,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::Rebalance)?;
        require!(assets > 0, AggregatorError::ZeroAmount);
        let limit_bps = pool.state
            .entry(vault)
            .ok_or(AggregatorError::VaultNotRegistered)?
            .allocation_limit_bps;

        pool.sync_holdings(now)?;
        pool.deposit_into_vault(vault, assets)?;

        let allocated = pool.value_of(vault)?;
        let ceiling = mul_div(pool.state.buffer.cached_assets, limit_bps, BPS_SCALE, Rounding::Floor)?;
        if allocated > ceiling {
            return Err(error!(AggregatorError::AllocationLimitExceeded).with_values((allocated, ceiling)));
        }

        emit!(RebalanceEvent {
            vault: *vault,
            assets,
            pushed: true
        });

        Ok(())
    })
}

/// Withdraw `assets` from a registered vault back to idle. Never limit-checked.
pub fn pull_funds<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    assets: u64,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::Rebalance)?;
        require!(assets > 0, AggregatorError::ZeroAmount);
        require!(pool.state.entry(vault).is_some(), AggregatorError::VaultNotRegistered);

        pool.sync_holdings(now)?;
        pool.withdraw_from_vault(vault, assets)?;

        emit!(RebalanceEvent {
            vault: *vault,
            assets,
            pushed: false
        });

        Ok(())
    })
}

/// Redeem `shares` of a registered vault back to idle. Never limit-checked.
///
/// # Returns
/// * `Result<u64>` - assets received
pub fn pull_funds_by_shares<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    shares: u64,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::Rebalance)?;
        require!(shares > 0, AggregatorError::ZeroShares);
        require!(pool.state.entry(vault).is_some(), AggregatorError::VaultNotRegistered);

        pool.sync_holdings(now)?;
        let assets = pool.redeem_from_vault(vault, shares)?;

        emit!(RebalanceEvent {
            vault: *vault,
            assets,
            pushed: false
        });

        Ok(assets)
    })
}

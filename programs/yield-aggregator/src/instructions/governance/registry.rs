use anchor_lang::prelude::*;
use crate::{
    components::check_authority,
    events::{RebalanceEvent, VaultAddedEvent, VaultRemovedEvent},
    interfaces::{Capability, ExternalVault},
    pool::Pool,
    states::VaultEntry,
    utils::{AggregatorError, MAX_VAULTS},
};

/// Register a reachable vault. It starts with a zero allocation limit, and a holdings
/// update afterwards picks up whatever the pool already holds in it.
pub fn add_vault<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::ManageVaults)?;

        require_keys_neq!(*vault, pool.state.key, AggregatorError::SelfReference);
        require!(pool.state.entry(vault).is_none(), AggregatorError::VaultAlreadyRegistered);
        require!(pool.state.registry.len() < MAX_VAULTS, AggregatorError::RegistryFull);

        let asset = pool.vault(vault)?.asset()?;
        require_keys_eq!(asset, pool.state.asset_mint, AggregatorError::AssetMismatch);

        pool.state.registry.push(VaultEntry {
            vault: *vault,
            allocation_limit_bps: 0,
        });

        pool.sync_holdings(now)?;

        msg!("AddVault {{vault: {}, registered: {}}}", vault, pool.state.registry.len());
        emit!(VaultAddedEvent { vault: *vault });

        Ok(())
    })
}

/// Redeem the whole position back to idle, then drop the vault from the registry.
/// Fails if the vault refuses the redemption.
///
/// # Returns
/// * `Result<u64>` - assets recovered into the idle balance
pub fn remove_vault<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::ManageVaults)?;
        let index = pool.state.entry_index(vault).ok_or(AggregatorError::VaultNotRegistered)?;

        pool.sync_holdings(now)?;

        let held = pool.vault(vault)?.balance_of(&pool.state.key)?;
        let recovered = if held > 0 {
            pool.redeem_from_vault(vault, held)?
        } else {
            0
        };

        pool.state.registry.remove(index);

        // Settles any rounding between the vault's valuation and its payout
        pool.sync_holdings(now)?;

        msg!("RemoveVault {{vault: {}, assets_recovered: {}}}", vault, recovered);
        emit!(VaultRemovedEvent {
            vault: *vault,
            forced: false,
            assets_recovered: recovered
        });

        Ok(recovered)
    })
}

/// Drop the vault from the registry unconditionally. Whatever is still held there is
/// written off through the holdings update that follows.
pub fn force_remove_vault<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::ManageVaults)?;
        let index = pool.state.entry_index(vault).ok_or(AggregatorError::VaultNotRegistered)?;

        pool.state.registry.remove(index);
        pool.sync_holdings(now)?;

        msg!("ForceRemoveVault {{vault: {}}}", vault);
        emit!(VaultRemovedEvent {
            vault: *vault,
            forced: true,
            assets_recovered: 0
        });

        Ok(())
    })
}

/// Redeem as much of the position as the vault currently allows, swallowing failures.
/// Usually run ahead of `force_remove_vault`.
///
/// # Returns
/// * `Result<u64>` - assets recovered, zero when the vault refused
pub fn try_exit_vault<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
) -> Result<u64> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::ManageVaults)?;
        require!(pool.state.entry(vault).is_some(), AggregatorError::VaultNotRegistered);

        let pool_key = pool.state.key;
        let exit = pool.try_atomic(|pool| {
            let target = pool.vault(vault)?;
            let redeemable = target
                .max_redeem(&pool_key)
                .unwrap_or(0)
                .min(target.balance_of(&pool_key)?);
            if redeemable == 0 {
                return Ok(0);
            }
            pool.redeem_from_vault(vault, redeemable)
        });

        let recovered = match exit {
            Ok(assets) => assets,
            Err(err) => {
                msg!("TryExitVault {{vault: {}, error: {}}}", vault, err);
                0
            }
        };

        if recovered > 0 {
            emit!(RebalanceEvent {
                vault: *vault,
                assets: recovered,
                pushed: false
            });
        }

        Ok(recovered)
    })
}

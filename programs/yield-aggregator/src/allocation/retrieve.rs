use anchor_lang::prelude::*;
use crate::{
    components::{mul_div, Rounding},
    events::{SequentialFallbackEvent, VaultWithdrawalFailedEvent},
    interfaces::ExternalVault,
    pool::Pool,
    utils::AggregatorError,
};

/// Pre-withdrawal hook: makes sure `assets_required` sits in the idle balance.
///
/// First tries a proportional pull across every registered vault as one all-or-nothing
/// step. Any vault failure, or ending short, rolls that attempt back and runs the
/// sequential fallback: registry order, `min(need, max_withdraw)` per vault, individual
/// failures recorded and skipped. Only a final shortfall is an error.
pub fn ensure_liquidity<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    assets_required: u64,
) -> Result<()> {
    if pool.state.idle_assets >= assets_required {
        return Ok(());
    }

    if pool.try_atomic(|pool| proportional_pull(pool, assets_required)).is_ok() {
        return Ok(());
    }

    msg!(
        "SequentialFallback {{assets_required: {}, idle_assets: {}}}",
        assets_required,
        pool.state.idle_assets
    );
    emit!(SequentialFallbackEvent {
        assets_required,
        idle_assets: pool.state.idle_assets
    });

    sequential_pull(pool, assets_required)
}

/// Withdraws `ceil(required * value_i / total_assets)` from every vault.
fn proportional_pull<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    assets_required: u64,
) -> Result<()> {
    let total_assets = pool.state.buffer.cached_assets;

    for vault_key in pool.state.registered_vaults() {
        let value = pool.value_of(&vault_key)?;
        if value == 0 {
            continue;
        }

        let pull = mul_div(assets_required, value, total_assets, Rounding::Ceil)?;
        if pull > 0 {
            pool.withdraw_from_vault(&vault_key, pull)?;
        }
    }

    require_gte!(pool.state.idle_assets, assets_required, AggregatorError::InsufficientLiquidity);
    Ok(())
}

fn sequential_pull<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    assets_required: u64,
) -> Result<()> {
    let pool_key = pool.state.key;

    for vault_key in pool.state.registered_vaults() {
        let idle = pool.state.idle_assets;
        if idle >= assets_required {
            break;
        }

        let capacity = pool.vault(&vault_key)?.max_withdraw(&pool_key).unwrap_or(0);
        let amount = (assets_required - idle).min(capacity);
        if amount == 0 {
            continue;
        }

        if let Err(err) = pool.try_atomic(|pool| pool.withdraw_from_vault(&vault_key, amount)) {
            msg!("VaultWithdrawalFailed {{vault: {}, assets: {}, error: {}}}", vault_key, amount, err);
            emit!(VaultWithdrawalFailedEvent {
                vault: vault_key,
                assets: amount
            });
        }
    }

    let idle = pool.state.idle_assets;
    if idle < assets_required {
        msg!("InsufficientLiquidity {{shortfall: {}}}", assets_required - idle);
        return Err(error!(AggregatorError::InsufficientLiquidity).with_values((assets_required, idle)));
    }

    Ok(())
}

use anchor_lang::prelude::*;
use crate::{
    components::{mul_div, Rounding},
    events::VaultDepositEvent,
    interfaces::ExternalVault,
    pool::Pool,
};

/// Post-deposit hook: spreads a fresh deposit over the registered vaults in proportion
/// to their current weight in the pool.
///
/// `target_i = assets * value_i / total_assets_before`, capped by the vault's own
/// `max_deposit` (a failing query counts as zero). Whatever is not placed stays idle.
/// Allocation limits are not consulted on this path.
pub fn distribute_deposit<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    assets: u64,
    total_assets_before: u64,
) -> Result<()> {
    if assets == 0 || total_assets_before == 0 {
        return Ok(());
    }

    let pool_key = pool.state.key;

    for vault_key in pool.state.registered_vaults() {
        let value = pool.value_of(&vault_key)?;
        let target = mul_div(assets, value, total_assets_before, Rounding::Floor)?;
        if target == 0 {
            continue;
        }

        let capacity = pool.vault(&vault_key)?.max_deposit(&pool_key).unwrap_or(0);
        let amount = target.min(capacity);
        if amount == 0 {
            continue;
        }

        pool.deposit_into_vault(&vault_key, amount)?;

        emit!(VaultDepositEvent {
            vault: vault_key,
            assets: amount
        });
    }

    Ok(())
}

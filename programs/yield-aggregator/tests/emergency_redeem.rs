mod common;

use common::*;
use yield_aggregator::{
    approve, deposit, emergency_redeem, events::VaultShareSlice, pause_user_interactions,
    push_funds, utils::AggregatorError,
};

#[test]
fn paused_pool_pays_out_idle_and_vault_shares() {
    let mut pool = new_pool(0);
    let vault = register_vault(&mut pool, 1, 5_000, T0);
    deposit(&mut pool, &alice(), 1_000, &alice(), T0).unwrap();
    push_funds(&mut pool, &governance(), &vault, 400, T0).unwrap();
    pause_user_interactions(&mut pool, &governance()).unwrap();

    let redemption =
        emergency_redeem(&mut pool, &alice(), 500 * SHARES_PER_ASSET, &carol(), &alice(), T0 + DAY).unwrap();

    assert_eq!(redemption.idle_assets, 300);
    assert_eq!(
        redemption.vault_shares,
        vec![VaultShareSlice {
            vault,
            shares: 200,
            assets_value: 200,
        }]
    );

    assert_eq!(pool.state.idle_assets, 300);
    assert_eq!(pool.state.buffer.cached_assets, 500);
    assert_eq!(pool.balance_of(&alice(), T0 + DAY), 500 * SHARES_PER_ASSET);

    let target = mock(&pool, &vault);
    assert_eq!(target.shares(&carol()), 200);
    assert_eq!(target.shares(&pool_key()), 200);
    assert_eq!(target.withdraw_calls, 0);
    assert_eq!(target.redeem_calls, 0);

    assert_conserved(&pool);
    assert_eq!(pool.convert_to_assets(500 * SHARES_PER_ASSET, T0 + DAY).unwrap(), 500);
}

#[test]
fn stuck_vault_does_not_block_exit() {
    let mut pool = new_pool(0);
    let vault = register_vault(&mut pool, 1, 10_000, T0);
    deposit(&mut pool, &alice(), 1_000, &alice(), T0).unwrap();
    push_funds(&mut pool, &governance(), &vault, 1_000, T0).unwrap();
    {
        let target = mock_mut(&mut pool, &vault);
        target.fail_withdrawals = true;
        target.fail_max_queries = true;
    }

    let redemption =
        emergency_redeem(&mut pool, &alice(), 1_000 * SHARES_PER_ASSET, &alice(), &alice(), T0).unwrap();

    assert_eq!(redemption.idle_assets, 0);
    assert_eq!(redemption.vault_shares[0].shares, 1_000);
    assert_eq!(pool.total_supply(T0), 0);
    assert_eq!(mock(&pool, &vault).shares(&alice()), 1_000);
}

#[test]
fn emergency_redeem_is_bounded_by_balance_and_allowance() {
    let mut pool = new_pool(0);
    deposit(&mut pool, &alice(), 1_000, &alice(), T0).unwrap();

    let result = emergency_redeem(&mut pool, &alice(), 2_000 * SHARES_PER_ASSET, &alice(), &alice(), T0);
    assert_eq!(error_values(result), ("20000000".to_string(), "10000000".to_string()));

    assert_error(
        emergency_redeem(&mut pool, &bob(), SHARES_PER_ASSET, &bob(), &alice(), T0),
        AggregatorError::InsufficientAllowance,
    );
    assert_error(
        emergency_redeem(&mut pool, &alice(), 0, &alice(), &alice(), T0),
        AggregatorError::ZeroShares,
    );

    approve(&mut pool, &alice(), &bob(), SHARES_PER_ASSET).unwrap();
    let redemption = emergency_redeem(&mut pool, &bob(), SHARES_PER_ASSET, &bob(), &alice(), T0).unwrap();
    assert_eq!(redemption.idle_assets, 1);
    assert_eq!(pool.allowance(&alice(), &bob()), 0);
}

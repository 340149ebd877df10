use std::sync::Arc;

use anchor_lang::prelude::*;
use yield_aggregator::{
    add_vault, initialize_pool, set_allocation_limit, PoolConfig,
    Pool,
};

use super::mock_vault::MockVault;

pub const T0: i64 = 1_700_000_000;
pub const DAY: i64 = 86_400;

/// Shares minted for the first 1 asset unit with the default offset of 4.
pub const SHARES_PER_ASSET: u64 = 10_000;

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn pool_key() -> Pubkey { key(1) }
pub fn asset_mint() -> Pubkey { key(2) }
pub fn governance() -> Pubkey { key(3) }
pub fn fee_receiver() -> Pubkey { key(4) }
pub fn alice() -> Pubkey { key(10) }
pub fn bob() -> Pubkey { key(11) }
pub fn carol() -> Pubkey { key(12) }

pub fn vault_key(n: u8) -> Pubkey {
    key(100 + n)
}

pub fn new_pool(protocol_fee_bps: u64) -> Pool<MockVault> {
    let mut config = PoolConfig::new(pool_key(), asset_mint(), fee_receiver());
    config.protocol_fee_bps = protocol_fee_bps;
    initialize_pool(config, Arc::new(governance())).unwrap()
}

/// Attaches a fresh mock vault, registers it and sets its allocation limit.
pub fn register_vault(pool: &mut Pool<MockVault>, n: u8, allocation_limit_bps: u64, now: i64) -> Pubkey {
    let vault = vault_key(n);
    pool.attach_vault(MockVault::new(vault, asset_mint()));
    add_vault(pool, &governance(), &vault, now).unwrap();
    set_allocation_limit(pool, &governance(), &vault, allocation_limit_bps).unwrap();
    vault
}

pub fn mock(pool: &Pool<MockVault>, vault: &Pubkey) -> MockVault {
    pool.vaults.get(vault).unwrap().clone()
}

pub fn mock_mut<'a>(pool: &'a mut Pool<MockVault>, vault: &Pubkey) -> &'a mut MockVault {
    pool.vaults.get_mut(vault).unwrap()
}

/// `cached_assets` must equal idle balance plus every registered position right after
/// a holdings update.
pub fn assert_conserved(pool: &Pool<MockVault>) {
    let live = pool.live_total_assets().unwrap();
    assert_eq!(pool.state.buffer.cached_assets, live);
}

use std::{collections::BTreeMap, sync::Arc};

use anchor_lang::prelude::*;
use crate::{
    interfaces::{Authorizer, ExternalVault},
    pool::Pool,
    states::{BufferState, PoolState, ShareLedger},
    utils::*,
};

/// Parameters fixed or defaulted at pool creation.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub key: Pubkey,
    pub asset_mint: Pubkey,
    pub protocol_fee_bps: u64,
    pub protocol_fee_receiver: Pubkey,
    pub buffering_duration: i64,
    pub decimals_offset: u8,
}

impl PoolConfig {
    /// Zero fee, 20-day buffering window, decimals offset 4.
    pub fn new(key: Pubkey, asset_mint: Pubkey, protocol_fee_receiver: Pubkey) -> Self {
        PoolConfig {
            key,
            asset_mint,
            protocol_fee_bps: 0,
            protocol_fee_receiver,
            buffering_duration: DEFAULT_BUFFERING_DURATION,
            decimals_offset: DEFAULT_DECIMALS_OFFSET,
        }
    }
}

/// Creates an empty pool. `cached_assets` starts at zero, the "awaiting first deposit"
/// sentinel that keeps the reward buffer idle until capital arrives.
pub fn initialize_pool<V: ExternalVault + Clone>(
    config: PoolConfig,
    authority: Arc<dyn Authorizer>,
) -> Result<Pool<V>> {
    require!(config.protocol_fee_bps <= MAX_PROTOCOL_FEE_BPS, AggregatorError::FeeExceeds);
    require!(
        config.buffering_duration > 0 && config.buffering_duration <= MAX_BUFFERING_DURATION,
        AggregatorError::InvalidBufferingDuration
    );
    require!(config.decimals_offset <= MAX_DECIMALS_OFFSET, AggregatorError::InvalidDecimalsOffset);
    require_keys_neq!(config.protocol_fee_receiver, config.key, AggregatorError::InvalidFeeReceiver);

    msg!(
        "InitializePool {{pool: {}, asset: {}, protocol_fee_bps: {}, buffering_duration: {}}}",
        config.key,
        config.asset_mint,
        config.protocol_fee_bps,
        config.buffering_duration
    );

    Ok(Pool {
        state: PoolState {
            key: config.key,
            asset_mint: config.asset_mint,
            decimals_offset: config.decimals_offset,
            idle_assets: 0,
            buffer: BufferState {
                cached_assets: 0,
                buffered_shares: 0,
                last_update: 0,
                buffer_end: 0,
                buffering_duration: config.buffering_duration,
                protocol_fee_bps: config.protocol_fee_bps,
                protocol_fee_receiver: config.protocol_fee_receiver,
            },
            registry: Vec::new(),
            shares: ShareLedger::default(),
            paused: false,
            entered: false,
        },
        vaults: BTreeMap::new(),
        authority,
    })
}

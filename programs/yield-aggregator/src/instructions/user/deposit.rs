use anchor_lang::prelude::*;
use crate::{
    allocation::distribute_deposit,
    components::{convert_to_assets, convert_to_shares, Rounding},
    events::DepositEvent,
    interfaces::ExternalVault,
    pool::Pool,
    utils::AggregatorError,
};

/// Deposit `assets` and mint the corresponding shares to `receiver`.
///
/// Shares are floored, so rounding always favors the pool.
///
/// # Returns
/// * `Result<u64>` - shares minted
pub fn deposit<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    assets: u64,
    receiver: &Pubkey,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        require!(!pool.state.paused, AggregatorError::UserInteractionsPaused);
        require!(assets > 0, AggregatorError::ZeroAmount);

        let max_assets = pool.max_deposit(receiver, now)?;
        if assets > max_assets {
            return Err(error!(AggregatorError::ExceedsMaxDeposit).with_values((assets, max_assets)));
        }

        pool.sync_holdings(now)?;

        let shares = convert_to_shares(
            assets,
            pool.state.buffer.cached_assets,
            pool.state.shares.raw_supply,
            pool.state.decimals_offset,
            Rounding::Floor,
        )?;
        require!(shares > 0, AggregatorError::ZeroShares);

        execute_deposit(pool, signer, receiver, assets, shares, now)?;
        Ok(shares)
    })
}

/// Mint exactly `shares` to `receiver`, pulling in the required assets (rounded up).
///
/// # Returns
/// * `Result<u64>` - assets deposited
pub fn mint<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    shares: u64,
    receiver: &Pubkey,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        require!(!pool.state.paused, AggregatorError::UserInteractionsPaused);
        require!(shares > 0, AggregatorError::ZeroShares);

        let max_shares = pool.max_mint(receiver, now)?;
        if shares > max_shares {
            return Err(error!(AggregatorError::ExceedsMaxMint).with_values((shares, max_shares)));
        }

        pool.sync_holdings(now)?;

        let assets = convert_to_assets(
            shares,
            pool.state.buffer.cached_assets,
            pool.state.shares.raw_supply,
            pool.state.decimals_offset,
            Rounding::Ceil,
        )?;
        require!(assets > 0, AggregatorError::ZeroAmount);

        execute_deposit(pool, signer, receiver, assets, shares, now)?;
        Ok(assets)
    })
}

fn execute_deposit<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    receiver: &Pubkey,
    assets: u64,
    shares: u64,
    now: i64,
) -> Result<()> {
    let total_assets_before = pool.state.buffer.cached_assets;

    // Assets in before shares out
    pool.credit_idle(assets)?;
    pool.state.shares.mint(receiver, shares)?;

    distribute_deposit(pool, assets, total_assets_before)?;

    let buffer = &mut pool.state.buffer;
    if total_assets_before == 0 {
        // First capital: the release schedule starts from here
        buffer.last_update = now;
        buffer.buffer_end = buffer.buffer_end.max(now);
    }
    buffer.cached_assets = total_assets_before
        .checked_add(assets)
        .ok_or(AggregatorError::OverflowInAdd)?;

    emit!(DepositEvent {
        sender: *signer,
        owner: *receiver,
        assets,
        shares
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::{
    allocation::ensure_liquidity,
    components::{convert_to_assets, convert_to_shares, Rounding},
    events::WithdrawEvent,
    interfaces::ExternalVault,
    pool::Pool,
    utils::AggregatorError,
};

/// Withdraw exactly `assets` to `receiver`, burning `owner`'s shares (rounded up).
///
/// # Returns
/// * `Result<u64>` - shares burned
pub fn withdraw<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    assets: u64,
    receiver: &Pubkey,
    owner: &Pubkey,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        require!(!pool.state.paused, AggregatorError::UserInteractionsPaused);
        require!(assets > 0, AggregatorError::ZeroAmount);

        let max_assets = pool.max_withdraw(owner, now)?;
        if assets > max_assets {
            return Err(error!(AggregatorError::ExceedsMaxWithdraw).with_values((assets, max_assets)));
        }

        pool.sync_holdings(now)?;

        let shares = convert_to_shares(
            assets,
            pool.state.buffer.cached_assets,
            pool.state.shares.raw_supply,
            pool.state.decimals_offset,
            Rounding::Ceil,
        )?;

        execute_withdraw(pool, signer, receiver, owner, assets, shares)?;
        Ok(shares)
    })
}

/// Redeem `shares` of `owner`, paying the corresponding assets (rounded down).
///
/// # Returns
/// * `Result<u64>` - assets paid to `receiver`
pub fn redeem<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    shares: u64,
    receiver: &Pubkey,
    owner: &Pubkey,
    now: i64,
) -> Result<u64> {
    pool.atomic(|pool| {
        require!(!pool.state.paused, AggregatorError::UserInteractionsPaused);
        require!(shares > 0, AggregatorError::ZeroShares);

        let max_shares = pool.max_redeem(owner, now)?;
        if shares > max_shares {
            return Err(error!(AggregatorError::ExceedsMaxRedeem).with_values((shares, max_shares)));
        }

        pool.sync_holdings(now)?;

        let assets = convert_to_assets(
            shares,
            pool.state.buffer.cached_assets,
            pool.state.shares.raw_supply,
            pool.state.decimals_offset,
            Rounding::Floor,
        )?;
        require!(assets > 0, AggregatorError::ZeroAmount);

        execute_withdraw(pool, signer, receiver, owner, assets, shares)?;
        Ok(assets)
    })
}

fn execute_withdraw<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    receiver: &Pubkey,
    owner: &Pubkey,
    assets: u64,
    shares: u64,
) -> Result<()> {
    if signer != owner {
        pool.state.shares.spend_allowance(owner, signer, shares)?;
    }

    // Assets must be idle before any share is burned
    ensure_liquidity(pool, assets)?;

    pool.state.shares.burn(owner, shares)?;
    pool.state.buffer.cached_assets = pool.state.buffer.cached_assets
        .checked_sub(assets)
        .ok_or(AggregatorError::OverflowInSub)?;
    pool.state.idle_assets = pool.state.idle_assets
        .checked_sub(assets)
        .ok_or(AggregatorError::OverflowInSub)?;

    emit!(WithdrawEvent {
        sender: *signer,
        receiver: *receiver,
        owner: *owner,
        assets,
        shares
    });

    Ok(())
}

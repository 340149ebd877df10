use anchor_lang::prelude::*;
use crate::{
    events::{ApprovalEvent, TransferEvent},
    interfaces::ExternalVault,
    pool::Pool,
    utils::AggregatorError,
};

/// Move `shares` from the signer to `to`.
pub fn transfer<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    to: &Pubkey,
    shares: u64,
) -> Result<()> {
    pool.atomic(|pool| move_shares(pool, signer, to, shares))
}

/// Let `spender` move up to `shares` of the signer's balance. `u64::MAX` is unlimited.
pub fn approve<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    spender: &Pubkey,
    shares: u64,
) -> Result<()> {
    pool.atomic(|pool| {
        require_keys_neq!(*signer, pool.state.key, AggregatorError::SelfReference);
        pool.state.shares.approve(signer, spender, shares);

        emit!(ApprovalEvent {
            owner: *signer,
            spender: *spender,
            shares
        });
        Ok(())
    })
}

/// Move `shares` from `from` to `to` against the signer's allowance.
pub fn transfer_from<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    shares: u64,
) -> Result<()> {
    pool.atomic(|pool| {
        pool.state.shares.spend_allowance(from, signer, shares)?;
        move_shares(pool, from, to, shares)
    })
}

fn move_shares<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    from: &Pubkey,
    to: &Pubkey,
    shares: u64,
) -> Result<()> {
    // The pool's own balance is exactly its buffer
    require_keys_neq!(*from, pool.state.key, AggregatorError::SelfReference);
    require_keys_neq!(*to, pool.state.key, AggregatorError::SelfReference);

    pool.state.shares.transfer(from, to, shares)?;

    emit!(TransferEvent {
        from: *from,
        to: *to,
        shares
    });
    Ok(())
}

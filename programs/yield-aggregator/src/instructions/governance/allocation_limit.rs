use anchor_lang::prelude::*;
use crate::{
    components::check_authority,
    events::AllocationLimitEvent,
    interfaces::{Capability, ExternalVault},
    pool::Pool,
    utils::{AggregatorError, BPS_SCALE},
};

pub fn set_allocation_limit<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    vault: &Pubkey,
    allocation_limit_bps: u64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::SetAllocationLimit)?;
        require!(allocation_limit_bps <= BPS_SCALE, AggregatorError::InvalidAllocationLimit);

        let index = pool.state.entry_index(vault).ok_or(AggregatorError::VaultNotRegistered)?;
        pool.state.registry[index].allocation_limit_bps = allocation_limit_bps;

        msg!("SetAllocationLimit {{vault: {}, allocation_limit_bps: {}}}", vault, allocation_limit_bps);
        emit!(AllocationLimitEvent {
            vault: *vault,
            allocation_limit_bps
        });

        Ok(())
    })
}

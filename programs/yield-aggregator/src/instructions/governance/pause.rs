use anchor_lang::prelude::*;
use crate::{
    components::check_authority,
    events::PauseEvent,
    interfaces::{Capability, ExternalVault},
    pool::Pool,
};

/// Block deposit, mint, withdraw and redeem. Emergency redemption stays open.
pub fn pause_user_interactions<V: ExternalVault + Clone>(pool: &mut Pool<V>, signer: &Pubkey) -> Result<()> {
    set_paused(pool, signer, true)
}

pub fn unpause_user_interactions<V: ExternalVault + Clone>(pool: &mut Pool<V>, signer: &Pubkey) -> Result<()> {
    set_paused(pool, signer, false)
}

fn set_paused<V: ExternalVault + Clone>(pool: &mut Pool<V>, signer: &Pubkey, paused: bool) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::PauseUserInteractions)?;
        pool.state.paused = paused;

        msg!("SetPaused {{paused: {}}}", paused);
        emit!(PauseEvent { paused });

        Ok(())
    })
}

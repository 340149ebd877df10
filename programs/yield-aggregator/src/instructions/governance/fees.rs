use anchor_lang::prelude::*;
use crate::{
    components::check_authority,
    events::ProtocolFeeEvent,
    interfaces::{Capability, ExternalVault},
    pool::Pool,
    utils::{AggregatorError, MAX_PROTOCOL_FEE_BPS},
};

/// Change the protocol fee. Gains accrued so far are settled at the previous rate.
pub fn set_protocol_fee<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    protocol_fee_bps: u64,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::SetProtocolFee)?;
        require!(protocol_fee_bps <= MAX_PROTOCOL_FEE_BPS, AggregatorError::FeeExceeds);

        pool.sync_holdings(now)?;
        pool.state.buffer.protocol_fee_bps = protocol_fee_bps;

        log_fee(pool);
        Ok(())
    })
}

/// Change who receives fee shares. Gains accrued so far go to the previous receiver.
pub fn set_protocol_fee_receiver<V: ExternalVault + Clone>(
    pool: &mut Pool<V>,
    signer: &Pubkey,
    protocol_fee_receiver: &Pubkey,
    now: i64,
) -> Result<()> {
    pool.atomic(|pool| {
        check_authority(pool.authority.as_ref(), signer, Capability::SetProtocolFee)?;
        require_keys_neq!(*protocol_fee_receiver, pool.state.key, AggregatorError::InvalidFeeReceiver);

        pool.sync_holdings(now)?;
        pool.state.buffer.protocol_fee_receiver = *protocol_fee_receiver;

        log_fee(pool);
        Ok(())
    })
}

fn log_fee<V>(pool: &Pool<V>) {
    let buffer = &pool.state.buffer;
    msg!(
        "SetProtocolFee {{protocol_fee_bps: {}, receiver: {}}}",
        buffer.protocol_fee_bps,
        buffer.protocol_fee_receiver
    );
    emit!(ProtocolFeeEvent {
        protocol_fee_bps: buffer.protocol_fee_bps,
        protocol_fee_receiver: buffer.protocol_fee_receiver
    });
}

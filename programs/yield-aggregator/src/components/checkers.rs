use anchor_lang::prelude::*;
use crate::{interfaces::{Authorizer, Capability}, utils::AggregatorError};

/// Checks that `signer` holds `capability` under the injected authorizer.
/// Returns `Unauthorized` error if not.
pub fn check_authority(authority: &dyn Authorizer, signer: &Pubkey, capability: Capability) -> Result<()> {
    if !authority.is_authorized(signer, capability) {
        msg!("Unauthorized {{signer: {}, capability: {:?}}}", signer, capability);
        return Err(AggregatorError::Unauthorized.into());
    }

    Ok(())
}

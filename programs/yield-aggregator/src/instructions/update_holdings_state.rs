use anchor_lang::prelude::*;
use crate::{interfaces::ExternalVault, pool::Pool};

/// Permissionless trigger for the reward buffer update. Calling it twice at the same
/// instant with unchanged valuations mints and burns nothing the second time.
pub fn update_holdings_state<V: ExternalVault + Clone>(pool: &mut Pool<V>, now: i64) -> Result<()> {
    pool.atomic(|pool| {
        pool.sync_holdings(now)?;
        Ok(())
    })
}

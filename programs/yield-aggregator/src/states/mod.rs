pub use buffer::*;
pub use share_ledger::*;
pub use vault_entry::*;
pub use pool_state::*;

pub mod buffer;
pub mod share_ledger;
pub mod vault_entry;
pub mod pool_state;

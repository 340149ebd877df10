pub use holdings_event::*;
pub use deposit_event::*;
pub use withdraw_event::*;
pub use allocation_events::*;
pub use registry_events::*;
pub use config_events::*;
pub use emergency_redeem_event::*;
pub use ledger_events::*;

pub mod holdings_event;
pub mod deposit_event;
pub mod withdraw_event;
pub mod allocation_events;
pub mod registry_events;
pub mod config_events;
pub mod emergency_redeem_event;
pub mod ledger_events;

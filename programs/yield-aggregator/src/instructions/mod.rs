pub use initialize_pool::*;
pub use update_holdings_state::*;
pub use user::*;
pub use governance::*;
pub use emergency_redeem::*;

pub mod initialize_pool;
pub mod update_holdings_state;
pub mod user;
pub mod governance;
pub mod emergency_redeem;

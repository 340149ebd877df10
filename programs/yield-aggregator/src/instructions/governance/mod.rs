pub use registry::*;
pub use allocation_limit::*;
pub use rebalance::*;
pub use fees::*;
pub use pause::*;

pub mod registry;
pub mod allocation_limit;
pub mod rebalance;
pub mod fees;
pub mod pause;

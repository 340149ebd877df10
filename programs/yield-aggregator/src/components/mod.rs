pub use mul_div::*;
pub use released_shares::*;
pub use buffer_end::*;
pub use buffer_update::*;
pub use share_math::*;
pub use checkers::*;

pub mod mul_div;
pub mod released_shares;
pub mod buffer_end;
pub mod buffer_update;
pub mod share_math;
pub mod checkers;

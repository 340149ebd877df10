pub use deposit::*;
pub use withdraw::*;
pub use transfer::*;

pub mod deposit;
pub mod withdraw;
pub mod transfer;

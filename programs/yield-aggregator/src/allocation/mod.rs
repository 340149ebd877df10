pub use distribute::*;
pub use retrieve::*;

pub mod distribute;
pub mod retrieve;

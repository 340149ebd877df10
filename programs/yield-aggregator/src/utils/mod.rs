pub use errors::*;
pub use constants::*;

pub mod errors;
pub mod constants;

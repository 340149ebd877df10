#![allow(dead_code)]

pub mod errors;
pub mod mock_vault;
pub mod setup;

pub use errors::*;
pub use mock_vault::*;
pub use setup::*;

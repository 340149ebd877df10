pub use external_vault::*;
pub use authorizer::*;

pub mod external_vault;
pub mod authorizer;

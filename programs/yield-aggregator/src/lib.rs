#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod states;
pub mod interfaces;
pub mod components;
pub mod instructions;
pub mod events;
pub mod utils;
pub mod pool;
pub mod views;
pub(crate) mod allocation;

pub use instructions::*;
pub use pool::Pool;


declare_id!("mpD5bQWGdRaSjZdSLRfLWoR5S7g5bL8LUXRS2Pmsxj3");

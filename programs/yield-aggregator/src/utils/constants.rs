/// Basis points scale (100%).
pub const BPS_SCALE: u64 = 10_000;

/// Protocol fee ceiling: 50% of the gain.
pub const MAX_PROTOCOL_FEE_BPS: u64 = 5_000;

/// Maximum number of registered vaults.
pub const MAX_VAULTS: usize = 8;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Window over which a reported gain is released to holders.
pub const DEFAULT_BUFFERING_DURATION: i64 = 20 * SECONDS_PER_DAY;
pub const MAX_BUFFERING_DURATION: i64 = 365 * SECONDS_PER_DAY;

/// Virtual shares/assets offset (10^offset) deterring empty-pool price manipulation.
pub const DEFAULT_DECIMALS_OFFSET: u8 = 4;
pub const MAX_DECIMALS_OFFSET: u8 = 9;

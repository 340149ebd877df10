use anchor_lang::error_code;


#[error_code]
pub enum AggregatorError {
    #[msg("Caller is not authorized for this capability")]
    Unauthorized,

    #[msg("Reentrant call")]
    ReentrantCall,

    #[msg("User interactions are paused")]
    UserInteractionsPaused,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Operation would mint or burn zero shares")]
    ZeroShares,

    #[msg("Vault is not on the registry")]
    VaultNotRegistered,

    #[msg("Vault is already registered")]
    VaultAlreadyRegistered,

    #[msg("Vault is not reachable by the pool")]
    UnknownVault,

    #[msg("Vault asset differs from the pool base asset")]
    AssetMismatch,

    #[msg("Vault registry is full")]
    RegistryFull,

    #[msg("Pool cannot register itself")]
    SelfReference,

    #[msg("The fee exceeds the allowed maximum")]
    FeeExceeds,

    #[msg("Invalid protocol fee receiver")]
    InvalidFeeReceiver,

    #[msg("Buffering duration out of range")]
    InvalidBufferingDuration,

    #[msg("Decimals offset out of range")]
    InvalidDecimalsOffset,

    #[msg("Allocation limit exceeds 100%")]
    InvalidAllocationLimit,

    #[msg("Deposit exceeds maximum")]
    ExceedsMaxDeposit,

    #[msg("Mint exceeds maximum")]
    ExceedsMaxMint,

    #[msg("Withdrawal exceeds maximum")]
    ExceedsMaxWithdraw,

    #[msg("Redemption exceeds maximum")]
    ExceedsMaxRedeem,

    #[msg("Insufficient share balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Insufficient idle assets")]
    InsufficientIdle,

    #[msg("Vault allocation would exceed its limit")]
    AllocationLimitExceeded,

    #[msg("Insufficient assets retrievable from idle balance and vaults")]
    InsufficientLiquidity,

    #[msg("Buffer update on an uninitialized buffer")]
    UninitializedBuffer,

    #[msg("Timestamp precedes the last holdings update")]
    ClockWentBackwards,

    #[msg("Overflow in mul")]
    OverflowInMul,

    #[msg("Overflow in div")]
    OverflowInDiv,

    #[msg("Overflow in sub")]
    OverflowInSub,

    #[msg("Overflow in add")]
    OverflowInAdd,

    #[msg("Overflow in cast")]
    OverflowInCast,
}

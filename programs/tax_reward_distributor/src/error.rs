use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    // Access control errors
    #[msg("Only admin can perform this action")]
    OnlyAdmin,
    #[msg("Only admin or keeper can process tax")]
    OnlyKeeper,
    #[msg("Only the ledger authority can report balance changes")]
    OnlyLedger,

    // Configuration errors
    #[msg("Destination slot is already wired")]
    AlreadyWired,
    #[msg("Address must not be the zero address")]
    ZeroAddress,
    #[msg("Split ratios are out of bounds")]
    InvalidSplit,
    #[msg("Tax processing is disabled")]
    ProcessingDisabled,
    #[msg("Policy parameters are out of bounds")]
    InvalidPolicy,
    #[msg("Policy is frozen after launch")]
    PolicyFrozen,
    #[msg("Destination slot has not been wired")]
    DestinationNotWired,
    #[msg("Account does not match the wired destination")]
    DestinationMismatch,
    #[msg("Exclusion list is full")]
    ExclusionListFull,
    #[msg("Program-owned vault owner must be excluded from rewards")]
    VaultOwnerNotExcluded,

    // Eligibility gate errors
    #[msg("Address is excluded from rewards")]
    ExcludedFromRewards,
    #[msg("Balance is below the minimum required to claim")]
    BalanceBelowMin,
    #[msg("Minimum hold time has not been met")]
    HoldTimeNotMet,
    #[msg("Claim cooldown is still active")]
    ClaimCooldownActive,
    #[msg("Nothing to claim")]
    NothingToClaim,

    // Call validity errors
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Deadline has expired")]
    DeadlineExpired,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("No eligible supply to distribute over")]
    ZeroEligibleSupply,
    #[msg("Reported old balance does not match the mirrored balance")]
    StaleBalance,

    // External dependency errors
    #[msg("Swap output below minimum")]
    SlippageExceeded,
    #[msg("Swap venue did not consume exactly the swap share")]
    SwapInputMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the configured mint")]
    TokenMintMismatch,
}

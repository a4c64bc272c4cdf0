use anchor_lang::prelude::*;

/// Event emitted when a reward pool is created
#[event]
pub struct PoolInitialized {
    /// The reward pool account public key
    pub reward_pool: Pubkey,
    /// Admin of the pool
    pub admin: Pubkey,
    /// Authority allowed to report balance changes
    pub ledger_authority: Pubkey,
    /// Taxed token mint
    pub token_mint: Pubkey,
    /// Vault holding unclaimed rewards
    pub reward_vault: Pubkey,
    pub min_hold_time_sec: i64,
    pub claim_cooldown_sec: i64,
    pub min_balance: u64,
}

/// Event emitted when pre-launch policy parameters change
#[event]
pub struct PolicyUpdated {
    pub reward_pool: Pubkey,
    pub min_hold_time_sec: i64,
    pub claim_cooldown_sec: i64,
    pub min_balance: u64,
}

/// Event emitted when the policy is frozen
#[event]
pub struct PoolLaunched {
    pub reward_pool: Pubkey,
    pub launched_at: i64,
}

/// Event emitted for every mirrored balance transition
#[event]
pub struct BalanceChanged {
    pub reward_pool: Pubkey,
    pub holder: Pubkey,
    pub old_balance: u64,
    pub new_balance: u64,
    /// Hold clock after the transition (0 = not holding)
    pub last_non_zero_at: i64,
    /// Eligible supply after the transition
    pub eligible_supply: u64,
}

/// Event emitted when an address enters or leaves the exclusion list
#[event]
pub struct ExclusionChanged {
    pub reward_pool: Pubkey,
    pub address: Pubkey,
    pub excluded: bool,
    /// Eligible supply after the change
    pub eligible_supply: u64,
}

/// Event emitted when rewards are pushed into the accumulator
#[event]
pub struct DistributionNotified {
    pub reward_pool: Pubkey,
    pub amount: u64,
    /// Accumulator after the distribution, scaled by ACC_PRECISION
    pub acc_reward_per_unit: u128,
    pub eligible_supply: u64,
    pub total_distributed: u64,
}

/// Event emitted when a holder claims
#[event]
pub struct RewardsClaimed {
    pub reward_pool: Pubkey,
    pub holder: Pubkey,
    /// Amount paid out in this claim
    pub amount: u64,
    /// Total claimed from the pool by all holders
    pub total_claimed: u64,
    pub claimed_at: i64,
}

/// Event emitted when a tax processor is created
#[event]
pub struct ProcessorInitialized {
    pub tax_processor: Pubkey,
    pub admin: Pubkey,
    pub keeper: Pubkey,
    pub token_mint: Pubkey,
    pub settlement_mint: Pubkey,
    pub reward_bps: u16,
    pub burn_bps: u16,
    pub marketing_bps: u16,
    pub vesting_bps: u16,
}

/// Event emitted once per destination slot when it gets wired
#[event]
pub struct DestinationWired {
    pub tax_processor: Pubkey,
    /// Slot name: reward, swap_venue, burn_sink, marketing or vesting
    pub slot: String,
    pub destination: Pubkey,
}

/// Event emitted when the processing kill-switch flips
#[event]
pub struct ProcessingToggled {
    pub tax_processor: Pubkey,
    pub enabled: bool,
}

/// Event emitted after a successful tax pass
#[event]
pub struct TaxProcessed {
    pub tax_processor: Pubkey,
    /// Amount taken from the tax vault
    pub amount: u64,
    pub reward_share: u64,
    pub burn_share: u64,
    pub swap_share: u64,
    /// Settlement currency received from the swap venue
    pub settlement_out: u64,
    pub marketing_share: u64,
    pub vesting_share: u64,
    pub processed_at: i64,
}

use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Fixed-point scaling, ratio denominators, policy bounds and PDA seeds used
 * by the reward accountant and the tax processor.
 */

// ===== FIXED-POINT CONSTANTS =====

/// Scale of the global reward accumulator
/// - `acc_reward_per_unit` is stored multiplied by this factor
/// - 1e18 keeps per-unit precision for supplies up to u64::MAX
#[constant]
pub const ACC_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Denominator for every basis-point ratio (100% = 10_000)
#[constant]
pub const BPS_DENOMINATOR: u64 = 10_000;

// ===== POLICY BOUNDS =====

/// Longest hold time an operator may configure (365 days)
#[constant]
pub const MAX_HOLD_TIME_SEC: i64 = 365 * 24 * 60 * 60;

/// Longest claim cooldown an operator may configure (30 days)
#[constant]
pub const MAX_CLAIM_COOLDOWN_SEC: i64 = 30 * 24 * 60 * 60;

/// Capacity of the enumerable exclusion list stored on the pool
/// - Pools, treasuries and program vaults; not meant for holders
pub const MAX_EXCLUDED_ADDRESSES: usize = 64;

// ===== SWAP ROUTER =====

/// Anchor sighash namespace of the router's swap instruction
/// - Discriminator = sha256("global:swap")[..8]
pub const ROUTER_SWAP_IX_NAME: &str = "global:swap";

// ===== PDA SEED CONSTANTS =====

/// Seed for the reward pool PDA
/// - Used in: ["reward_pool", token_mint]
/// - One pool per taxed token
pub const REWARD_POOL_SEED: &str = "reward_pool";

/// Seed for the reward vault PDA
/// - Used in: ["reward_vault", reward_pool]
/// - Holds distributed-but-unclaimed rewards, authority is the pool
pub const REWARD_VAULT_SEED: &str = "reward_vault";

/// Seed for holder record PDAs
/// - Used in: ["holder", reward_pool, holder]
/// - Mirrors the holder's balance and carries the accrual checkpoint
pub const HOLDER_SEED: &str = "holder";

/// Seed for the tax processor PDA
/// - Used in: ["tax_processor", token_mint]
pub const TAX_PROCESSOR_SEED: &str = "tax_processor";

/// Seed for the tax vault PDA
/// - Used in: ["tax_vault", tax_processor]
/// - Receives transfer tax from the ledger, authority is the processor
pub const TAX_VAULT_SEED: &str = "tax_vault";

/// Seed for the settlement vault PDA
/// - Used in: ["settlement_vault", tax_processor]
/// - Receives swap proceeds before they are split to marketing and vesting
pub const SETTLEMENT_VAULT_SEED: &str = "settlement_vault";

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a reward pool
 *
 * This instruction initializes the reward accountant for one taxed token:
 * - Creates the reward pool PDA holding the accumulator and supply mirror
 * - Creates the reward vault PDA that will hold unclaimed rewards
 * - Records the ledger authority allowed to report balance transitions
 * - Excludes the pool PDA itself, the owner of the reward vault
 *
 * Access Control: The signer becomes the pool admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The reward pool account (PDA)
    /// - Derived from: ["reward_pool", token_mint]
    #[account(
        init,
        payer = admin,
        space = RewardPool::LEN,
        seeds = [REWARD_POOL_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Reward vault (PDA) holding distributed-but-unclaimed rewards
    /// - Controlled by the reward pool PDA as token authority
    /// - Derived from: ["reward_vault", reward_pool]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = reward_pool,
        token::token_program = token_program,
        seeds = [REWARD_VAULT_SEED.as_bytes(), reward_pool.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// Holder record of the pool PDA, owner of the reward vault
    /// - Derived from: ["holder", reward_pool, reward_pool]
    /// - Excluded at creation; the pool can never sign a claim
    #[account(
        init,
        payer = admin,
        space = HolderRecord::LEN,
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), reward_pool.key().as_ref()],
        bump
    )]
    pub pool_record: Account<'info, HolderRecord>,

    /// The taxed token mint
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Admin of the pool, pays for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a reward pool with its initial policy
 *
 * @param ctx - The account context containing all required accounts
 * @param min_hold_time_sec - Continuous holding time required before a claim
 * @param claim_cooldown_sec - Minimum time between two successful claims
 * @param min_balance - Minimum mirrored balance required to claim
 * @param ledger_authority - Signer that reports balance transitions
 */
pub fn handle_initialize_pool(
    ctx: Context<InitializePool>,
    min_hold_time_sec: i64,
    claim_cooldown_sec: i64,
    min_balance: u64,
    ledger_authority: Pubkey,
) -> Result<()> {
    RewardPool::validate_policy(min_hold_time_sec, claim_cooldown_sec)?;
    require_keys_neq!(ledger_authority, Pubkey::default(), DistributorError::ZeroAddress);

    let reward_pool = &mut ctx.accounts.reward_pool;

    reward_pool.bump = ctx.bumps.reward_pool;
    reward_pool.vault_bump = ctx.bumps.reward_vault;
    reward_pool.admin = ctx.accounts.admin.key();
    reward_pool.ledger_authority = ledger_authority;
    reward_pool.token_mint = ctx.accounts.token_mint.key();
    reward_pool.reward_vault = ctx.accounts.reward_vault.key();
    reward_pool.min_hold_time_sec = min_hold_time_sec;
    reward_pool.claim_cooldown_sec = claim_cooldown_sec;
    reward_pool.min_balance = min_balance;
    // Note: accumulator, totals and supply mirror start empty

    let pool_key = reward_pool.key();
    let pool_record = &mut ctx.accounts.pool_record;
    pool_record.bump = ctx.bumps.pool_record;
    pool_record.reward_pool = pool_key;
    pool_record.holder = pool_key;
    reward_pool.set_excluded(pool_record, true)?;

    msg!(
        "Reward pool created: hold={}s cooldown={}s min_balance={}",
        min_hold_time_sec,
        claim_cooldown_sec,
        min_balance
    );

    emit_cpi!(PoolInitialized {
        reward_pool: reward_pool.key(),
        admin: reward_pool.admin,
        ledger_authority,
        token_mint: reward_pool.token_mint,
        reward_vault: reward_pool.reward_vault,
        min_hold_time_sec,
        claim_cooldown_sec,
        min_balance,
    });

    emit_cpi!(ExclusionChanged {
        reward_pool: pool_key,
        address: pool_key,
        excluded: true,
        eligible_supply: reward_pool.eligible_supply,
    });

    Ok(())
}

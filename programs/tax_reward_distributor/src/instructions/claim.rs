use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming rewards
 *
 * This instruction lets a holder withdraw their pending share of
 * distributed tax from the reward vault, once every eligibility gate passes.
 *
 * Access Control: The holder whose record is being claimed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// Pool holding the accumulator
    /// - Will be modified to update total_claimed
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The claimant's record
    /// - Derived from: ["holder", reward_pool, holder]
    #[account(
        mut,
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), holder.key().as_ref()],
        bump = holder_record.bump
    )]
    pub holder_record: Account<'info, HolderRecord>,

    /// Reward vault paying the claim
    #[account(
        mut,
        address = reward_pool.reward_vault
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// Holder's token account receiving the rewards
    #[account(
        mut,
        token::mint = reward_pool.token_mint,
        token::authority = holder,
        token::token_program = token_program,
    )]
    pub holder_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The taxed token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == reward_pool.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The holder claiming
    pub holder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims the caller's pending rewards
 *
 * Validation Process (first failure wins):
 * 1. ExcludedFromRewards
 * 2. BalanceBelowMin
 * 3. HoldTimeNotMet
 * 4. ClaimCooldownActive
 * 5. NothingToClaim
 *
 * The mirrored balance is not changed here: the ledger reports the
 * vault -> holder transfer like any other.
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_pool = &mut ctx.accounts.reward_pool;
    let holder_record = &mut ctx.accounts.holder_record;

    // ===== EFFECTS PHASE (State Updates) =====

    let amount = reward_pool.claim(holder_record, now)?;

    require!(
        ctx.accounts.reward_vault.amount >= amount,
        DistributorError::InsufficientBalance
    );

    let token_mint_key = reward_pool.token_mint;
    let pool_bump = reward_pool.bump;
    let pool_key = reward_pool.key();
    let total_claimed = reward_pool.total_claimed;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        REWARD_POOL_SEED.as_bytes(),
        token_mint_key.as_ref(),
        &[pool_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.reward_pool.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.holder_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    msg!("Claimed {} for {}", amount, ctx.accounts.holder.key());

    emit_cpi!(RewardsClaimed {
        reward_pool: pool_key,
        holder: ctx.accounts.holder.key(),
        amount,
        total_claimed,
        claimed_at: now,
    });

    Ok(())
}

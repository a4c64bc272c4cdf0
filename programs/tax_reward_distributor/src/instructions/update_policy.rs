use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for pre-launch policy maintenance
 *
 * Used by both update_policy and launch_pool.
 *
 * Access Control: Only the pool admin
 *
 * Business Logic:
 * - Policy can be modified any number of times before launch
 * - launch_pool freezes the policy permanently
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdatePolicy<'info> {
    /// The reward pool to update
    #[account(mut)]
    pub reward_pool: Account<'info, RewardPool>,

    /// Must match the admin stored in the pool
    #[account(constraint = admin.key() == reward_pool.admin @ DistributorError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

/**
 * Replaces the hold time, cooldown and minimum balance
 *
 * Fails with PolicyFrozen once the pool has launched.
 */
pub fn handle_update_policy(
    ctx: Context<UpdatePolicy>,
    min_hold_time_sec: i64,
    claim_cooldown_sec: i64,
    min_balance: u64,
) -> Result<()> {
    let reward_pool = &mut ctx.accounts.reward_pool;
    reward_pool.set_policy(min_hold_time_sec, claim_cooldown_sec, min_balance)?;

    emit_cpi!(PolicyUpdated {
        reward_pool: reward_pool.key(),
        min_hold_time_sec,
        claim_cooldown_sec,
        min_balance,
    });

    Ok(())
}

/**
 * Freezes the policy parameters
 *
 * One-way; calling it again fails with PolicyFrozen.
 */
pub fn handle_launch_pool(ctx: Context<UpdatePolicy>) -> Result<()> {
    let reward_pool = &mut ctx.accounts.reward_pool;
    require!(!reward_pool.launched, DistributorError::PolicyFrozen);

    reward_pool.launched = true;
    let launched_at = Clock::get()?.unix_timestamp;

    emit_cpi!(PoolLaunched {
        reward_pool: reward_pool.key(),
        launched_at,
    });

    Ok(())
}

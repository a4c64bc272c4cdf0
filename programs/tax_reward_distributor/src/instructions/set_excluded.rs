use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for exclusion-list maintenance
 *
 * Excluded addresses (pools, treasuries, program vaults) do not count
 * towards eligible supply, do not accrue, and cannot claim.
 *
 * Access Control: Only the pool admin
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct SetExcluded<'info> {
    /// Pool whose exclusion list and eligible supply change
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Record of the address being (un)excluded
    /// - Created here if the ledger never reported the address
    #[account(
        init_if_needed,
        payer = admin,
        space = HolderRecord::LEN,
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), address.as_ref()],
        bump
    )]
    pub holder_record: Account<'info, HolderRecord>,

    /// Must match the admin stored in the pool
    #[account(
        mut,
        constraint = admin.key() == reward_pool.admin @ DistributorError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Adds `address` to, or removes it from, the exclusion list
 *
 * Idempotent: repeating a call with the same flag changes nothing and
 * emits nothing.
 */
pub fn handle_set_excluded(ctx: Context<SetExcluded>, address: Pubkey, excluded: bool) -> Result<()> {
    let reward_pool = &mut ctx.accounts.reward_pool;
    let holder_record = &mut ctx.accounts.holder_record;

    if holder_record.reward_pool == Pubkey::default() {
        holder_record.bump = ctx.bumps.holder_record;
        holder_record.reward_pool = reward_pool.key();
        holder_record.holder = address;
    }

    if !reward_pool.set_excluded(holder_record, excluded)? {
        msg!("Exclusion of {} already {}", address, excluded);
        return Ok(());
    }

    emit_cpi!(ExclusionChanged {
        reward_pool: reward_pool.key(),
        address,
        excluded,
        eligible_supply: reward_pool.eligible_supply,
    });

    Ok(())
}

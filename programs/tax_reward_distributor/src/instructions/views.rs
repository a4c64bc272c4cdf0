use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;

/// Read-only access to a pool
#[derive(Accounts)]
pub struct PoolView<'info> {
    pub reward_pool: Account<'info, RewardPool>,
}

/// Read-only access to one holder of a pool
#[derive(Accounts)]
pub struct HolderView<'info> {
    pub reward_pool: Account<'info, RewardPool>,

    #[account(
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), holder_record.holder.as_ref()],
        bump = holder_record.bump
    )]
    pub holder_record: Account<'info, HolderRecord>,
}

/// Pending rewards of the holder, returned through return data
pub fn handle_get_pending(ctx: Context<HolderView>) -> Result<u64> {
    ctx.accounts.reward_pool.pending(&ctx.accounts.holder_record)
}

pub fn handle_get_eligible_supply(ctx: Context<PoolView>) -> Result<u64> {
    Ok(ctx.accounts.reward_pool.eligible_supply)
}

/// Excluded addresses in insertion order
pub fn handle_get_excluded_addresses(ctx: Context<PoolView>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.reward_pool.excluded.clone())
}

use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for the ledger balance hook
 *
 * The token ledger reports every balance transition of every address it
 * moves tokens for, synchronously and in the same transaction as the
 * transfer. The holder record is created on the first report.
 *
 * Access Control: Only the ledger authority stored in the pool
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct NotifyBalanceChange<'info> {
    /// Pool whose accumulator and supply mirror are updated
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Record of the holder whose balance moved
    /// - Derived from: ["holder", reward_pool, holder]
    #[account(
        init_if_needed,
        payer = ledger_authority,
        space = HolderRecord::LEN,
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), holder.as_ref()],
        bump
    )]
    pub holder_record: Account<'info, HolderRecord>,

    /// Ledger authority, pays for new holder records
    #[account(
        mut,
        constraint = ledger_authority.key() == reward_pool.ledger_authority @ DistributorError::OnlyLedger
    )]
    pub ledger_authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Applies one balance transition to the holder's record
 *
 * @param holder - Wallet whose balance moved
 * @param old_balance - Balance before the transfer; must equal the mirror
 * @param new_balance - Balance after the transfer
 */
pub fn handle_notify_balance_change(
    ctx: Context<NotifyBalanceChange>,
    holder: Pubkey,
    old_balance: u64,
    new_balance: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_pool = &mut ctx.accounts.reward_pool;
    let holder_record = &mut ctx.accounts.holder_record;

    // Fresh record from init_if_needed
    if holder_record.reward_pool == Pubkey::default() {
        holder_record.bump = ctx.bumps.holder_record;
        holder_record.reward_pool = reward_pool.key();
        holder_record.holder = holder;
    }

    reward_pool.on_balance_change(holder_record, old_balance, new_balance, now)?;

    #[cfg(feature = "verbose")]
    msg!(
        "Balance {} -> {} for {}, eligible supply {}",
        old_balance,
        new_balance,
        holder,
        reward_pool.eligible_supply
    );

    emit_cpi!(BalanceChanged {
        reward_pool: reward_pool.key(),
        holder,
        old_balance,
        new_balance,
        last_non_zero_at: holder_record.last_non_zero_at,
        eligible_supply: reward_pool.eligible_supply,
    });

    Ok(())
}

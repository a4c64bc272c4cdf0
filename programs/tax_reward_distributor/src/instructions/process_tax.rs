use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{execute_router_swap, transfer_token};
use crate::event::*;

/**
 * Account context for processing collected tax
 *
 * Routes part of the tax vault to every wired destination in one
 * transaction. Route accounts for the swap venue are passed as remaining
 * accounts.
 *
 * Access Control: Processor admin or keeper
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ProcessTax<'info> {
    /// The tax processor
    #[account(
        mut,
        seeds = [TAX_PROCESSOR_SEED.as_bytes(), tax_processor.token_mint.as_ref()],
        bump = tax_processor.bump
    )]
    pub tax_processor: Account<'info, TaxProcessor>,

    /// Reward pool wired into the reward slot
    #[account(
        mut,
        constraint = reward_pool.token_mint == tax_processor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Holder record of the processor PDA, owner of the tax and settlement vaults
    /// - Must be excluded so collected tax never accrues rewards
    #[account(
        seeds = [HOLDER_SEED.as_bytes(), reward_pool.key().as_ref(), tax_processor.key().as_ref()],
        bump = processor_record.bump
    )]
    pub processor_record: Account<'info, HolderRecord>,

    /// Tax vault funding the pass
    #[account(mut, address = tax_processor.tax_vault)]
    pub tax_vault: InterfaceAccount<'info, TokenAccount>,

    /// Reward vault receiving the reward share
    #[account(mut, address = reward_pool.reward_vault)]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token account wired into the burn sink slot
    #[account(mut, token::mint = token_mint)]
    pub burn_sink: InterfaceAccount<'info, TokenAccount>,

    /// Settlement vault receiving swap proceeds
    #[account(mut, address = tax_processor.settlement_vault)]
    pub settlement_vault: InterfaceAccount<'info, TokenAccount>,

    /// Settlement account wired into the marketing slot
    #[account(mut, token::mint = settlement_mint)]
    pub marketing: InterfaceAccount<'info, TokenAccount>,

    /// Settlement account wired into the vesting slot
    #[account(mut, token::mint = settlement_mint)]
    pub vesting: InterfaceAccount<'info, TokenAccount>,

    /// The taxed token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == tax_processor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The settlement currency mint
    #[account(
        token::token_program = settlement_token_program,
        constraint = settlement_mint.key() == tax_processor.settlement_mint @ DistributorError::TokenMintMismatch
    )]
    pub settlement_mint: InterfaceAccount<'info, Mint>,

    /// Router program wired into the swap venue slot
    /// CHECK: key is checked against the wired swap venue in the handler
    #[account(executable)]
    pub swap_venue: AccountInfo<'info>,

    /// Admin or keeper
    #[account(
        constraint = operator.key() == tax_processor.admin
            || operator.key() == tax_processor.keeper @ DistributorError::OnlyKeeper
    )]
    pub operator: Signer<'info>,

    /// Token program of the taxed token
    pub token_program: Interface<'info, TokenInterface>,

    /// Token program of the settlement currency
    pub settlement_token_program: Interface<'info, TokenInterface>,
}

/**
 * Splits `amount` of collected tax and routes every share
 *
 * @param amount - Tokens to take from the tax vault
 * @param min_settlement_out - Minimum settlement currency the swap must return
 * @param deadline - Unix timestamp after which the pass is rejected
 *
 * Requires the processor PDA to be excluded from rewards and every
 * supplied destination to match its wired slot.
 *
 * Ordering: every share is computed first, the external swap runs next,
 * and the token transfers follow only once the swap has succeeded. Any
 * failure reverts the whole transaction, so the pass is never partial.
 */
pub fn handle_process_tax<'info>(
    ctx: Context<'_, '_, 'info, 'info, ProcessTax<'info>>,
    amount: u64,
    min_settlement_out: u64,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let tax_processor = &ctx.accounts.tax_processor;

    // ===== VALIDATION PHASE =====

    let available = ctx.accounts.tax_vault.amount;
    tax_processor.validate_process(amount, available, now, deadline)?;

    ctx.accounts
        .reward_pool
        .require_excluded(&ctx.accounts.processor_record)?;

    tax_processor.destinations.require_matches(&Destinations {
        reward: WireSlot::Set(ctx.accounts.reward_pool.key()),
        swap_venue: WireSlot::Set(ctx.accounts.swap_venue.key()),
        burn_sink: WireSlot::Set(ctx.accounts.burn_sink.key()),
        marketing: WireSlot::Set(ctx.accounts.marketing.key()),
        vesting: WireSlot::Set(ctx.accounts.vesting.key()),
    })?;

    let split = tax_processor.split(amount)?;

    let token_mint_key = tax_processor.token_mint;
    let processor_bump = tax_processor.bump;
    let seeds = &[
        TAX_PROCESSOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        &[processor_bump],
    ];
    let signer = &[&seeds[..]];

    // ===== SWAP LEG (external call) =====

    let mut balances = SwapBalances {
        tax_before: available,
        tax_after: available,
        settlement_before: ctx.accounts.settlement_vault.amount,
        settlement_after: ctx.accounts.settlement_vault.amount,
    };

    if split.swap_share > 0 {
        execute_router_swap(
            &ctx.accounts.swap_venue,
            &ctx.accounts.tax_processor.to_account_info(),
            &ctx.accounts.tax_vault.to_account_info(),
            &ctx.accounts.settlement_vault.to_account_info(),
            ctx.remaining_accounts,
            split.swap_share,
            min_settlement_out,
            deadline,
            signer,
        )?;

        ctx.accounts.tax_vault.reload()?;
        ctx.accounts.settlement_vault.reload()?;
        balances.tax_after = ctx.accounts.tax_vault.amount;
        balances.settlement_after = ctx.accounts.settlement_vault.amount;
    }

    let (settlement_out, settlement_split) = ctx
        .accounts
        .tax_processor
        .settle_swap(&split, &balances, min_settlement_out)?;

    // ===== TOKEN LEGS =====

    transfer_token(
        ctx.accounts.tax_processor.to_account_info(),
        ctx.accounts.tax_vault.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        split.reward_share,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;
    let reward_pool = &mut ctx.accounts.reward_pool;
    reward_pool.notify_distribution(split.reward_share)?;
    if split.reward_share > 0 {
        emit_cpi!(DistributionNotified {
            reward_pool: reward_pool.key(),
            amount: split.reward_share,
            acc_reward_per_unit: reward_pool.acc_reward_per_unit,
            eligible_supply: reward_pool.eligible_supply,
            total_distributed: reward_pool.total_distributed,
        });
    }

    transfer_token(
        ctx.accounts.tax_processor.to_account_info(),
        ctx.accounts.tax_vault.to_account_info(),
        ctx.accounts.burn_sink.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        split.burn_share,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    // ===== SETTLEMENT LEGS =====

    transfer_token(
        ctx.accounts.tax_processor.to_account_info(),
        ctx.accounts.settlement_vault.to_account_info(),
        ctx.accounts.marketing.to_account_info(),
        ctx.accounts.settlement_mint.to_account_info(),
        ctx.accounts.settlement_token_program.to_account_info(),
        settlement_split.marketing_share,
        ctx.accounts.settlement_mint.decimals,
        Some(signer),
    )?;

    transfer_token(
        ctx.accounts.tax_processor.to_account_info(),
        ctx.accounts.settlement_vault.to_account_info(),
        ctx.accounts.vesting.to_account_info(),
        ctx.accounts.settlement_mint.to_account_info(),
        ctx.accounts.settlement_token_program.to_account_info(),
        settlement_split.vesting_share,
        ctx.accounts.settlement_mint.decimals,
        Some(signer),
    )?;

    // ===== BOOKKEEPING =====

    let tax_processor = &mut ctx.accounts.tax_processor;
    tax_processor.record_processed(amount, &split, settlement_out, now)?;

    msg!(
        "Processed {}: reward={} burn={} swap={} -> settlement={} (marketing={} vesting={})",
        amount,
        split.reward_share,
        split.burn_share,
        split.swap_share,
        settlement_out,
        settlement_split.marketing_share,
        settlement_split.vesting_share
    );

    emit_cpi!(TaxProcessed {
        tax_processor: tax_processor.key(),
        amount,
        reward_share: split.reward_share,
        burn_share: split.burn_share,
        swap_share: split.swap_share,
        settlement_out,
        marketing_share: settlement_split.marketing_share,
        vesting_share: settlement_split.vesting_share,
        processed_at: now,
    });

    Ok(())
}

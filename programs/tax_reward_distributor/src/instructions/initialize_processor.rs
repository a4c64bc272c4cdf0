use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a tax processor
 *
 * This instruction sets up the tax-routing side of a taxed token:
 * - Creates the tax processor PDA with its split ratios
 * - Creates the tax vault PDA the ledger routes transfer tax into
 * - Creates the settlement vault PDA receiving swap proceeds
 *
 * All five destination slots start unset and processing starts disabled.
 *
 * Access Control: The signer becomes the processor admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeProcessor<'info> {
    /// The tax processor account (PDA)
    /// - Derived from: ["tax_processor", token_mint]
    #[account(
        init,
        payer = admin,
        space = TaxProcessor::LEN,
        seeds = [TAX_PROCESSOR_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub tax_processor: Account<'info, TaxProcessor>,

    /// Tax vault (PDA) in the taxed token
    /// - Derived from: ["tax_vault", tax_processor]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = tax_processor,
        token::token_program = token_program,
        seeds = [TAX_VAULT_SEED.as_bytes(), tax_processor.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub tax_vault: InterfaceAccount<'info, TokenAccount>,

    /// Settlement vault (PDA) in the settlement currency
    /// - Derived from: ["settlement_vault", tax_processor]
    #[account(
        init,
        token::mint = settlement_mint,
        token::authority = tax_processor,
        token::token_program = settlement_token_program,
        seeds = [SETTLEMENT_VAULT_SEED.as_bytes(), tax_processor.key().as_ref()],
        bump,
        payer = admin,
    )]
    pub settlement_vault: InterfaceAccount<'info, TokenAccount>,

    /// The taxed token mint
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The settlement currency mint (e.g. wrapped SOL)
    #[account(
        token::token_program = settlement_token_program,
    )]
    pub settlement_mint: InterfaceAccount<'info, Mint>,

    /// Admin of the processor, pays for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program of the taxed token
    pub token_program: Interface<'info, TokenInterface>,

    /// Token program of the settlement currency
    pub settlement_token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a tax processor
 *
 * @param reward_bps - Share of each processed amount for the reward pool
 * @param burn_bps - Share of each processed amount for the burn sink
 * @param marketing_bps - Weight of marketing in the swap proceeds
 * @param vesting_bps - Weight of vesting in the swap proceeds
 * @param keeper - Account allowed to call process_tax besides the admin
 */
pub fn handle_initialize_processor(
    ctx: Context<InitializeProcessor>,
    reward_bps: u16,
    burn_bps: u16,
    marketing_bps: u16,
    vesting_bps: u16,
    keeper: Pubkey,
) -> Result<()> {
    TaxProcessor::validate_split(reward_bps, burn_bps, marketing_bps, vesting_bps)?;
    require_keys_neq!(keeper, Pubkey::default(), DistributorError::ZeroAddress);

    let tax_processor = &mut ctx.accounts.tax_processor;

    tax_processor.bump = ctx.bumps.tax_processor;
    tax_processor.admin = ctx.accounts.admin.key();
    tax_processor.keeper = keeper;
    tax_processor.token_mint = ctx.accounts.token_mint.key();
    tax_processor.settlement_mint = ctx.accounts.settlement_mint.key();
    tax_processor.tax_vault = ctx.accounts.tax_vault.key();
    tax_processor.settlement_vault = ctx.accounts.settlement_vault.key();
    tax_processor.destinations = Destinations::default();
    tax_processor.reward_bps = reward_bps;
    tax_processor.burn_bps = burn_bps;
    tax_processor.marketing_bps = marketing_bps;
    tax_processor.vesting_bps = vesting_bps;
    tax_processor.processing_enabled = false;

    msg!(
        "Tax processor created: reward={}bps burn={}bps swap={}bps, marketing:vesting={}:{}",
        reward_bps,
        burn_bps,
        BPS_DENOMINATOR - reward_bps as u64 - burn_bps as u64,
        marketing_bps,
        vesting_bps
    );

    emit_cpi!(ProcessorInitialized {
        tax_processor: tax_processor.key(),
        admin: tax_processor.admin,
        keeper,
        token_mint: tax_processor.token_mint,
        settlement_mint: tax_processor.settlement_mint,
        reward_bps,
        burn_bps,
        marketing_bps,
        vesting_bps,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for tax processor administration
 *
 * Used by wire_destinations_once and set_processing_enabled.
 *
 * Access Control: Only the processor admin
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ProcessorAdmin<'info> {
    /// The tax processor to configure
    #[account(mut)]
    pub tax_processor: Account<'info, TaxProcessor>,

    /// Must match the admin stored in the processor
    #[account(constraint = admin.key() == tax_processor.admin @ DistributorError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

/**
 * Wires destination slots, each at most once
 *
 * - None leaves a slot as it is
 * - Some(key) sets an unset slot; the key already held is a no-op
 * - Some(other key) on a filled slot fails AlreadyWired
 * - Once all five slots are filled every call fails AlreadyWired
 */
pub fn handle_wire_destinations_once(
    ctx: Context<ProcessorAdmin>,
    reward: Option<Pubkey>,
    swap_venue: Option<Pubkey>,
    burn_sink: Option<Pubkey>,
    marketing: Option<Pubkey>,
    vesting: Option<Pubkey>,
) -> Result<()> {
    let tax_processor = &mut ctx.accounts.tax_processor;
    let wired = tax_processor.wire_destinations(reward, swap_venue, burn_sink, marketing, vesting)?;
    let tax_processor_key = tax_processor.key();

    for (slot, destination) in wired {
        msg!("Wired {} -> {}", slot, destination);
        emit_cpi!(DestinationWired {
            tax_processor: tax_processor_key,
            slot: slot.to_string(),
            destination,
        });
    }

    Ok(())
}

/**
 * Kill-switch for process_tax
 *
 * While disabled, process_tax fails with ProcessingDisabled.
 */
pub fn handle_set_processing_enabled(ctx: Context<ProcessorAdmin>, enabled: bool) -> Result<()> {
    let tax_processor = &mut ctx.accounts.tax_processor;
    tax_processor.processing_enabled = enabled;

    emit_cpi!(ProcessingToggled {
        tax_processor: tax_processor.key(),
        enabled,
    });

    Ok(())
}

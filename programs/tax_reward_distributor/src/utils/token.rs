use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    // Zero-share legs are skipped rather than sent as empty transfers
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

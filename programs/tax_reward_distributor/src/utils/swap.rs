use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;
use crate::constants::ROUTER_SWAP_IX_NAME;

/// First 8 bytes of sha256("global:swap")
pub fn router_swap_discriminator() -> [u8; 8] {
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(ROUTER_SWAP_IX_NAME.as_bytes()).to_bytes()[..8]);
    discriminator
}

/// Instruction data for the router's swap: discriminator, amount_in,
/// minimum_amount_out, deadline (all little endian)
pub fn router_swap_data(amount_in: u64, minimum_amount_out: u64, deadline: i64) -> Vec<u8> {
    let mut data = Vec::with_capacity(32);
    data.extend_from_slice(&router_swap_discriminator());
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());
    data
}

/// Swaps `amount_in` of the taxed token for settlement currency through the
/// wired router program
///
/// Account order handed to the router:
/// 0. authority (signer, PDA via `signer_seeds`)
/// 1. source token account
/// 2. destination token account (recipient of the proceeds)
/// 3.. route accounts, passed through with their own signer/writable flags
///
/// The router enforces `minimum_amount_out` and `deadline`; any failure
/// aborts the calling instruction.
#[inline(never)]
pub fn execute_router_swap<'info>(
    router_program: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    source: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    route: &[AccountInfo<'info>],
    amount_in: u64,
    minimum_amount_out: u64,
    deadline: i64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let mut accounts = Vec::with_capacity(3 + route.len());
    accounts.push(AccountMeta::new_readonly(authority.key(), true));
    accounts.push(AccountMeta::new(source.key(), false));
    accounts.push(AccountMeta::new(destination.key(), false));
    for account in route {
        accounts.push(if account.is_writable {
            AccountMeta::new(account.key(), account.is_signer)
        } else {
            AccountMeta::new_readonly(account.key(), account.is_signer)
        });
    }

    let instruction = Instruction {
        program_id: router_program.key(),
        accounts,
        data: router_swap_data(amount_in, minimum_amount_out, deadline),
    };

    let mut account_infos = Vec::with_capacity(4 + route.len());
    account_infos.push(authority.clone());
    account_infos.push(source.clone());
    account_infos.push(destination.clone());
    account_infos.extend(route.iter().cloned());
    account_infos.push(router_program.clone());

    invoke_signed(&instruction, &account_infos, signer_seeds)?;
    Ok(())
}

use anchor_lang::prelude::*;

declare_id!("663tyBTpjxCXmLAbjPBsBWgFKvEJuk74tQhCzZm51n3X");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Tax Reward Distributor Program
 *
 * Holder reward accounting and transfer-tax routing for a taxed token.
 * Holders who keep a balance above a threshold for a minimum time earn a
 * share of the tax proportional to their balance; the rest of the tax is
 * burned or swapped into a settlement currency for the treasuries.
 *
 * Key Features:
 * - O(1) reward-per-unit accumulator with per-holder checkpoints
 * - Balance mirror fed by the token ledger on every transfer
 * - Enumerable exclusion list keeping eligible supply exact
 * - Gated claims (exclusion, minimum balance, hold time, cooldown)
 * - Wire-once destination slots for the tax processor
 * - All-or-nothing tax passes around an external swap
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Reward Pool PDA: accumulator, supply mirror, policy, exclusion list
 * - Reward Vault PDA: holds distributed-but-unclaimed rewards
 * - Holder Record PDAs: mirrored balance, hold clock, checkpoint
 * - Tax Processor PDA: split ratios, destination slots, kill-switch
 * - Tax Vault / Settlement Vault PDAs: collected tax and swap proceeds
 *
 * Workflow:
 * 1. Admin creates the pool and processor, excludes the processor PDA,
 *    liquidity pools and treasuries
 * 2. Admin wires destinations, launches the pool and enables processing
 * 3. Ledger reports every balance transition; tax lands in the tax vault
 * 4. Keeper processes collected tax; the reward share feeds the accumulator
 * 5. Holders claim once eligible
 */
#[program]
pub mod tax_reward_distributor {
    use super::*;

    /**
     * Creates the reward pool and its reward vault
     *
     * Access Control: Signer becomes admin
     */
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        min_hold_time_sec: i64,
        claim_cooldown_sec: i64,
        min_balance: u64,
        ledger_authority: Pubkey,
    ) -> Result<()> {
        handle_initialize_pool(ctx, min_hold_time_sec, claim_cooldown_sec, min_balance, ledger_authority)
    }

    /**
     * Updates policy parameters before launch
     *
     * Access Control: Admin only
     */
    pub fn update_policy(
        ctx: Context<UpdatePolicy>,
        min_hold_time_sec: i64,
        claim_cooldown_sec: i64,
        min_balance: u64,
    ) -> Result<()> {
        handle_update_policy(ctx, min_hold_time_sec, claim_cooldown_sec, min_balance)
    }

    /**
     * Freezes the policy parameters
     *
     * Access Control: Admin only
     */
    pub fn launch_pool(ctx: Context<UpdatePolicy>) -> Result<()> {
        handle_launch_pool(ctx)
    }

    /**
     * Ledger hook: reports one balance transition
     *
     * Must be invoked in the same transaction as the transfer, with the
     * balance before and after it.
     *
     * Access Control: Ledger authority only
     */
    pub fn notify_balance_change(
        ctx: Context<NotifyBalanceChange>,
        holder: Pubkey,
        old_balance: u64,
        new_balance: u64,
    ) -> Result<()> {
        handle_notify_balance_change(ctx, holder, old_balance, new_balance)
    }

    /**
     * Adds or removes an address from the exclusion list
     *
     * Access Control: Admin only
     */
    pub fn set_excluded(ctx: Context<SetExcluded>, address: Pubkey, excluded: bool) -> Result<()> {
        handle_set_excluded(ctx, address, excluded)
    }

    /**
     * Claims the caller's pending rewards
     *
     * Access Control: The holder
     */
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        handle_claim(ctx)
    }

    /// Pending rewards of a holder (return data)
    pub fn get_pending(ctx: Context<HolderView>) -> Result<u64> {
        handle_get_pending(ctx)
    }

    /// Current eligible supply (return data)
    pub fn get_eligible_supply(ctx: Context<PoolView>) -> Result<u64> {
        handle_get_eligible_supply(ctx)
    }

    /// Excluded addresses in insertion order (return data)
    pub fn get_excluded_addresses(ctx: Context<PoolView>) -> Result<Vec<Pubkey>> {
        handle_get_excluded_addresses(ctx)
    }

    /**
     * Creates the tax processor with its tax and settlement vaults
     *
     * Access Control: Signer becomes admin
     */
    pub fn initialize_processor(
        ctx: Context<InitializeProcessor>,
        reward_bps: u16,
        burn_bps: u16,
        marketing_bps: u16,
        vesting_bps: u16,
        keeper: Pubkey,
    ) -> Result<()> {
        handle_initialize_processor(ctx, reward_bps, burn_bps, marketing_bps, vesting_bps, keeper)
    }

    /**
     * Wires destination slots; each slot can be set exactly once
     *
     * Access Control: Admin only
     */
    pub fn wire_destinations_once(
        ctx: Context<ProcessorAdmin>,
        reward: Option<Pubkey>,
        swap_venue: Option<Pubkey>,
        burn_sink: Option<Pubkey>,
        marketing: Option<Pubkey>,
        vesting: Option<Pubkey>,
    ) -> Result<()> {
        handle_wire_destinations_once(ctx, reward, swap_venue, burn_sink, marketing, vesting)
    }

    /**
     * Enables or disables tax processing
     *
     * Access Control: Admin only
     */
    pub fn set_processing_enabled(ctx: Context<ProcessorAdmin>, enabled: bool) -> Result<()> {
        handle_set_processing_enabled(ctx, enabled)
    }

    /**
     * Splits and routes collected tax
     *
     * Swap route accounts are passed as remaining accounts.
     *
     * Access Control: Admin or keeper
     */
    pub fn process_tax<'info>(
        ctx: Context<'_, '_, 'info, 'info, ProcessTax<'info>>,
        amount: u64,
        min_settlement_out: u64,
        deadline: i64,
    ) -> Result<()> {
        handle_process_tax(ctx, amount, min_settlement_out, deadline)
    }
}

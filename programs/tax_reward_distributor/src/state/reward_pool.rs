use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::HolderRecord;
use crate::utils::{apply_delta, mul_div_floor};

/**
 * Reward pool state account
 *
 * Accumulator-based entitlement engine for one taxed token. Every
 * distribution bumps a single global accumulator; each holder keeps a
 * checkpoint (`reward_debt`) into it on their `HolderRecord`, so
 * distributing and reading entitlement are both O(1) regardless of how
 * many holders exist.
 *
 * Derivation: ["reward_pool", token_mint]
 *
 * Lifecycle:
 * 1. Created during initialize_pool with its reward vault
 * 2. Policy tuned with update_policy, then frozen by launch
 * 3. Supply mirror updated on every notify_balance_change
 * 4. Accumulator bumped by the tax processor on every tax pass
 * 5. total_claimed grows with each successful claim
 *
 * Invariants:
 * - eligible_supply == total_supply - sum of balances in `excluded`
 * - acc_reward_per_unit never decreases
 * - total_claimed + sum(pending) == total_distributed, up to one unit of
 *   rounding per holder checkpoint and per distribution
 */
#[account]
#[derive(Default, Debug)]
pub struct RewardPool {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the reward vault PDA
    pub vault_bump: u8,

    /// Privileged operator
    /// - Tunes policy before launch and maintains the exclusion list
    pub admin: Pubkey,

    /// Authority that reports balance transitions from the token ledger
    pub ledger_authority: Pubkey,

    /// Taxed token mint
    pub token_mint: Pubkey,

    /// Token account holding distributed-but-unclaimed rewards
    /// - Derived from: ["reward_vault", reward_pool]
    pub reward_vault: Pubkey,

    /// Minimum continuous holding time before a claim (seconds)
    pub min_hold_time_sec: i64,

    /// Minimum time between two successful claims (seconds)
    pub claim_cooldown_sec: i64,

    /// Minimum mirrored balance required to claim
    pub min_balance: u64,

    /// Policy parameters are immutable once set
    pub launched: bool,

    /// Rewards per eligible unit, scaled by ACC_PRECISION
    pub acc_reward_per_unit: u128,

    /// Sum of every notified distribution
    pub total_distributed: u64,

    /// Sum of every successful claim
    pub total_claimed: u64,

    /// Mirrored total supply (sum of every reported balance)
    pub total_supply: u64,

    /// Mirrored supply entitled to rewards
    pub eligible_supply: u64,

    /// Excluded addresses in insertion order, without duplicates
    /// - Membership checks go through HolderRecord::excluded
    pub excluded: Vec<Pubkey>,
}

impl RewardPool {
    /// Space required for this account
    /// - Includes 8-byte discriminator and the full exclusion list capacity
    pub const LEN: usize = 8
        + 1 + 1
        + 32 * 4
        + 8 + 8 + 8
        + 1
        + 16
        + 8 * 4
        + 4 + 32 * MAX_EXCLUDED_ADDRESSES;

    /// Checks policy parameters against the program bounds
    pub fn validate_policy(min_hold_time_sec: i64, claim_cooldown_sec: i64) -> Result<()> {
        require!(
            (0..=MAX_HOLD_TIME_SEC).contains(&min_hold_time_sec),
            DistributorError::InvalidPolicy
        );
        require!(
            (0..=MAX_CLAIM_COOLDOWN_SEC).contains(&claim_cooldown_sec),
            DistributorError::InvalidPolicy
        );
        Ok(())
    }

    /// Replaces the policy parameters; only allowed before launch
    pub fn set_policy(
        &mut self,
        min_hold_time_sec: i64,
        claim_cooldown_sec: i64,
        min_balance: u64,
    ) -> Result<()> {
        require!(!self.launched, DistributorError::PolicyFrozen);
        Self::validate_policy(min_hold_time_sec, claim_cooldown_sec)?;

        self.min_hold_time_sec = min_hold_time_sec;
        self.claim_cooldown_sec = claim_cooldown_sec;
        self.min_balance = min_balance;
        Ok(())
    }

    /// `balance * acc_reward_per_unit / ACC_PRECISION`
    pub fn accumulated(&self, balance: u64) -> Result<u128> {
        mul_div_floor(balance, self.acc_reward_per_unit, ACC_PRECISION as u64)
    }

    /// Checkpoint value for `record` at the current accumulator
    /// - Excluded records are never priced; un-excluding re-prices them
    fn priced_debt(&self, record: &HolderRecord) -> Result<u128> {
        if record.excluded {
            return Ok(0);
        }
        self.accumulated(record.balance)
    }

    /// Rewards earned by `record` since its last checkpoint
    /// - Excluded holders earn nothing while excluded
    fn earned_since_checkpoint(&self, record: &HolderRecord) -> Result<u128> {
        if record.excluded {
            return Ok(0);
        }
        Ok(self.accumulated(record.balance)?.saturating_sub(record.reward_debt))
    }

    /// Moves everything earned under the current balance into accrued_rewards
    /// and re-prices the checkpoint at the current accumulator
    fn checkpoint(&self, record: &mut HolderRecord) -> Result<()> {
        let earned = u64::try_from(self.earned_since_checkpoint(record)?)
            .map_err(|_| DistributorError::ArithmeticOverflow)?;
        record.accrued_rewards = record
            .accrued_rewards
            .checked_add(earned)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        record.reward_debt = self.priced_debt(record)?;
        Ok(())
    }

    /// Read-only entitlement of a holder
    /// - accrued_rewards + balance * acc / ACC_PRECISION - reward_debt, clamped at 0
    pub fn pending(&self, record: &HolderRecord) -> Result<u64> {
        let earned = self.earned_since_checkpoint(record)?;
        let total = (record.accrued_rewards as u128)
            .checked_add(earned)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        u64::try_from(total).map_err(|_| DistributorError::ArithmeticOverflow.into())
    }

    /// Spreads `amount` over the current eligible supply
    /// - Zero amount is a no-op so callers may notify unconditionally
    /// - Fails instead of dropping funds when nobody is eligible
    pub fn notify_distribution(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        require!(self.eligible_supply > 0, DistributorError::ZeroEligibleSupply);

        let increment = (amount as u128)
            .checked_mul(ACC_PRECISION)
            .ok_or(DistributorError::ArithmeticOverflow)?
            / self.eligible_supply as u128;

        self.acc_reward_per_unit = self
            .acc_reward_per_unit
            .checked_add(increment)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Ledger hook: applies a balance transition for one holder
    ///
    /// Accrual is checkpointed under `old_balance` before the new balance is
    /// mirrored, so no reward is ever priced against a stale balance. The
    /// supply mirror moves by the same delta.
    pub fn on_balance_change(
        &mut self,
        record: &mut HolderRecord,
        old_balance: u64,
        new_balance: u64,
        now: i64,
    ) -> Result<()> {
        require!(old_balance == record.balance, DistributorError::StaleBalance);

        self.checkpoint(record)?;
        record.balance = new_balance;
        record.reward_debt = self.priced_debt(record)?;

        if new_balance == 0 {
            record.last_non_zero_at = 0;
        } else if old_balance == 0 {
            record.last_non_zero_at = now;
        }

        self.total_supply = apply_delta(self.total_supply, old_balance, new_balance)?;
        if !record.excluded {
            self.eligible_supply = apply_delta(self.eligible_supply, old_balance, new_balance)?;
        }
        Ok(())
    }

    /// Adds or removes `record.holder` from the exclusion list
    ///
    /// Returns false when the address is already in the requested state, so
    /// repeated identical calls never touch eligible_supply twice.
    pub fn set_excluded(&mut self, record: &mut HolderRecord, excluded: bool) -> Result<bool> {
        if record.excluded == excluded {
            return Ok(false);
        }

        if excluded {
            require!(
                self.excluded.len() < MAX_EXCLUDED_ADDRESSES,
                DistributorError::ExclusionListFull
            );
            self.checkpoint(record)?;
            record.excluded = true;
            record.reward_debt = 0;
            self.excluded.push(record.holder);
            self.eligible_supply = self
                .eligible_supply
                .checked_sub(record.balance)
                .ok_or(DistributorError::ArithmeticOverflow)?;
        } else {
            // Nothing was earned while excluded; restart the checkpoint here
            record.excluded = false;
            record.reward_debt = self.accumulated(record.balance)?;
            if let Some(index) = self.excluded.iter().position(|a| a == &record.holder) {
                self.excluded.remove(index);
            }
            self.eligible_supply = self
                .eligible_supply
                .checked_add(record.balance)
                .ok_or(DistributorError::ArithmeticOverflow)?;
        }
        Ok(true)
    }

    /// Fails unless `record` is on the exclusion list
    /// - Used for program-owned vault owners, which can never sign a claim
    pub fn require_excluded(&self, record: &HolderRecord) -> Result<()> {
        require!(record.excluded, DistributorError::VaultOwnerNotExcluded);
        Ok(())
    }

    /// Evaluates the claim gates in order and settles the holder's entitlement
    ///
    /// Returns the amount to pay out. Gate order:
    /// excluded, minimum balance, hold time, cooldown, nothing to claim.
    pub fn claim(&mut self, record: &mut HolderRecord, now: i64) -> Result<u64> {
        let pending = self.pending(record)?;

        require!(!record.excluded, DistributorError::ExcludedFromRewards);
        require!(record.balance >= self.min_balance, DistributorError::BalanceBelowMin);
        require!(
            record.hold_time_met(now, self.min_hold_time_sec),
            DistributorError::HoldTimeNotMet
        );
        require!(
            !record.cooldown_active(now, self.claim_cooldown_sec),
            DistributorError::ClaimCooldownActive
        );
        require!(pending > 0, DistributorError::NothingToClaim);

        record.reward_debt = self.accumulated(record.balance)?;
        record.accrued_rewards = 0;
        record.last_claim_at = now;
        self.total_claimed = self
            .total_claimed
            .checked_add(pending)
            .ok_or(DistributorError::ArithmeticOverflow)?;

        Ok(pending)
    }
}

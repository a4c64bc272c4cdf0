pub mod test_exclusion;
pub mod test_processor;

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use crate::error::DistributorError;
use crate::state::*;

/// Asserts that `result` failed with `expected`
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: DistributorError) {
    let err = result.expect_err("expected an error");
    assert_eq!(err, expected.into());
}

/// In-memory stand-in for the token ledger
///
/// Keeps one HolderRecord per address and reports every balance
/// transition to the pool the way the ledger authority does on-chain.
pub struct LedgerHarness {
    pub pool: RewardPool,
    pub records: BTreeMap<Pubkey, HolderRecord>,
    /// Reward vault owner; excluded at construction
    pub vault: Pubkey,
    /// Holder checkpoints performed so far (bounds rounding drift)
    pub checkpoints: u64,
    pub distributions: u64,
}

impl LedgerHarness {
    pub fn new(min_hold_time_sec: i64, claim_cooldown_sec: i64, min_balance: u64) -> Self {
        let pool = RewardPool {
            min_hold_time_sec,
            claim_cooldown_sec,
            min_balance,
            ..Default::default()
        };
        let mut harness = LedgerHarness {
            pool,
            records: BTreeMap::new(),
            vault: Pubkey::new_unique(),
            checkpoints: 0,
            distributions: 0,
        };
        let vault = harness.vault;
        harness.exclude(vault, true).unwrap();
        harness
    }

    fn record_mut(&mut self, who: Pubkey) -> &mut HolderRecord {
        self.records.entry(who).or_insert_with(|| HolderRecord {
            holder: who,
            ..Default::default()
        })
    }

    pub fn record(&self, who: Pubkey) -> HolderRecord {
        self.records.get(&who).cloned().unwrap_or_default()
    }

    pub fn balance(&self, who: Pubkey) -> u64 {
        self.record(who).balance
    }

    pub fn pending(&self, who: Pubkey) -> u64 {
        self.pool.pending(&self.record(who)).unwrap()
    }

    /// Reports `who` moving to `new_balance`
    pub fn set_balance(&mut self, who: Pubkey, new_balance: u64, now: i64) -> Result<()> {
        self.checkpoints += 1;
        let record = self.records.entry(who).or_insert_with(|| HolderRecord {
            holder: who,
            ..Default::default()
        });
        let old_balance = record.balance;
        self.pool.on_balance_change(record, old_balance, new_balance, now)
    }

    pub fn mint(&mut self, to: Pubkey, amount: u64, now: i64) {
        let balance = self.balance(to);
        self.set_balance(to, balance + amount, now).unwrap();
    }

    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64, now: i64) {
        let from_balance = self.balance(from);
        let to_balance = self.balance(to);
        self.set_balance(from, from_balance - amount, now).unwrap();
        self.set_balance(to, to_balance + amount, now).unwrap();
    }

    pub fn exclude(&mut self, who: Pubkey, excluded: bool) -> Result<bool> {
        self.checkpoints += 1;
        let record = self.records.entry(who).or_insert_with(|| HolderRecord {
            holder: who,
            ..Default::default()
        });
        self.pool.set_excluded(record, excluded)
    }

    /// Funds the reward vault and notifies the pool, as a tax pass does
    pub fn distribute(&mut self, amount: u64, now: i64) -> Result<()> {
        self.pool.notify_distribution(amount)?;
        self.distributions += 1;
        let vault = self.vault;
        self.mint(vault, amount, now);
        Ok(())
    }

    /// Claims for `who` and reports the vault -> holder payout
    pub fn claim(&mut self, who: Pubkey, now: i64) -> Result<u64> {
        self.checkpoints += 1;
        let record = self.record_mut(who);
        let mut working = record.clone();
        let amount = self.pool.claim(&mut working, now)?;
        self.records.insert(who, working);
        let vault = self.vault;
        self.transfer(vault, who, amount, now);
        Ok(amount)
    }

    /// eligible_supply == total_supply - sum of excluded balances
    pub fn assert_supply_invariant(&self) {
        let total: u64 = self.records.values().map(|r| r.balance).sum();
        let excluded: u64 = self
            .pool
            .excluded
            .iter()
            .map(|address| self.balance(*address))
            .sum();
        assert_eq!(self.pool.total_supply, total);
        assert_eq!(self.pool.eligible_supply, total - excluded);
    }

    /// total_claimed + sum(pending) == total_distributed, within rounding
    pub fn assert_conservation(&self) {
        let pending: u64 = self
            .records
            .values()
            .map(|r| self.pool.pending(r).unwrap())
            .sum();
        let accounted = self.pool.total_claimed as i128 + pending as i128;
        let drift = (self.pool.total_distributed as i128 - accounted).abs();
        let tolerance = (self.checkpoints + self.records.len() as u64 + self.distributions) as i128;
        assert!(
            drift <= tolerance,
            "conservation drift {} exceeds tolerance {}",
            drift,
            tolerance
        );
    }
}

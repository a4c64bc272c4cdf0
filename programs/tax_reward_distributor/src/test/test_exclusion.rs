use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::DistributorError;
use crate::state::*;
use super::{assert_error, LedgerHarness};

#[test]
fn test_exclusion_removes_balance_from_eligible_supply() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let alice = Pubkey::new_unique();
    let market = Pubkey::new_unique();

    ledger.mint(alice, 1000, 1);
    ledger.mint(market, 4000, 1);
    assert_eq!(ledger.pool.eligible_supply, 5000);

    assert!(ledger.exclude(market, true).unwrap());
    assert_eq!(ledger.pool.eligible_supply, 1000);
    assert_eq!(ledger.pool.total_supply, 5000);
    ledger.assert_supply_invariant();

    // Transfers in and out of an excluded address
    ledger.transfer(market, alice, 500, 2);
    ledger.transfer(alice, market, 200, 3);
    ledger.assert_supply_invariant();
    assert_eq!(ledger.pool.eligible_supply, 1300);
}

#[test]
fn test_exclusion_is_idempotent() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let market = Pubkey::new_unique();
    ledger.mint(market, 700, 1);

    assert!(ledger.exclude(market, true).unwrap());
    let eligible = ledger.pool.eligible_supply;
    let excluded = ledger.pool.excluded.clone();

    assert!(!ledger.exclude(market, true).unwrap());
    assert_eq!(ledger.pool.eligible_supply, eligible);
    assert_eq!(ledger.pool.excluded, excluded);

    assert!(ledger.exclude(market, false).unwrap());
    assert!(!ledger.exclude(market, false).unwrap());
    assert_eq!(ledger.pool.eligible_supply, 700);
    ledger.assert_supply_invariant();
}

#[test]
fn test_excluded_addresses_keep_insertion_order() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let vault = ledger.vault;
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let c = Pubkey::new_unique();

    ledger.exclude(a, true).unwrap();
    ledger.exclude(b, true).unwrap();
    ledger.exclude(c, true).unwrap();
    assert_eq!(ledger.pool.excluded, vec![vault, a, b, c]);

    ledger.exclude(b, false).unwrap();
    assert_eq!(ledger.pool.excluded, vec![vault, a, c]);

    ledger.exclude(b, true).unwrap();
    assert_eq!(ledger.pool.excluded, vec![vault, a, c, b]);
}

#[test]
fn test_excluded_holder_stops_accruing() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    ledger.mint(alice, 500, 1);
    ledger.mint(bob, 500, 1);
    ledger.distribute(100, 2).unwrap();
    assert_eq!(ledger.pending(bob), 50);

    // Pre-exclusion accrual stays visible but cannot be claimed
    ledger.exclude(bob, true).unwrap();
    assert_eq!(ledger.pending(bob), 50);
    assert_error(ledger.claim(bob, 3), DistributorError::ExcludedFromRewards);

    // Everything goes to the remaining eligible holder
    ledger.distribute(100, 4).unwrap();
    assert_eq!(ledger.pending(alice), 150);
    assert_eq!(ledger.pending(bob), 50);

    // Re-inclusion restores the pre-exclusion accrual, nothing from the gap
    ledger.exclude(bob, false).unwrap();
    assert_eq!(ledger.pending(bob), 50);

    ledger.distribute(100, 5).unwrap();
    assert_eq!(ledger.pending(alice), 200);
    assert_eq!(ledger.pending(bob), 100);
    ledger.assert_supply_invariant();
}

#[test]
fn test_balance_changes_while_excluded() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    ledger.mint(alice, 1000, 1);
    ledger.exclude(bob, true).unwrap();
    ledger.transfer(alice, bob, 400, 2);
    ledger.distribute(600, 3).unwrap();
    assert_eq!(ledger.pending(alice), 600);
    assert_eq!(ledger.pending(bob), 0);

    ledger.exclude(bob, false).unwrap();
    assert_eq!(ledger.pool.eligible_supply, 1000);
    ledger.distribute(1000, 4).unwrap();
    assert_eq!(ledger.pending(alice), 1200);
    assert_eq!(ledger.pending(bob), 400);
    ledger.assert_supply_invariant();
}

#[test]
fn test_exclusion_list_capacity() {
    let mut pool = RewardPool::default();
    for _ in 0..MAX_EXCLUDED_ADDRESSES {
        let mut record = HolderRecord {
            holder: Pubkey::new_unique(),
            ..Default::default()
        };
        assert!(pool.set_excluded(&mut record, true).unwrap());
    }

    let mut record = HolderRecord {
        holder: Pubkey::new_unique(),
        ..Default::default()
    };
    assert_error(pool.set_excluded(&mut record, true), DistributorError::ExclusionListFull);
    assert!(!record.excluded);
    assert_eq!(pool.excluded.len(), MAX_EXCLUDED_ADDRESSES);
}

#[test]
fn test_reward_pool_space_fits_full_exclusion_list() {
    let mut pool = RewardPool::default();
    pool.excluded = vec![Pubkey::new_unique(); MAX_EXCLUDED_ADDRESSES];
    let mut data = Vec::new();
    pool.serialize(&mut data).unwrap();
    assert_eq!(8 + data.len(), RewardPool::LEN);
}

#[test]
fn test_vault_owner_must_be_excluded() {
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let alice = Pubkey::new_unique();
    let processor = Pubkey::new_unique();

    ledger.mint(alice, 1000, 1);
    ledger.mint(processor, 1000, 1);
    assert_error(
        ledger.pool.require_excluded(&ledger.record(processor)),
        DistributorError::VaultOwnerNotExcluded,
    );

    ledger.exclude(processor, true).unwrap();
    ledger.pool.require_excluded(&ledger.record(processor)).unwrap();

    ledger.distribute(100, 2).unwrap();
    assert_eq!(ledger.pending(alice), 100);
    assert_eq!(ledger.pending(processor), 0);

    // The pool's own vault owner is excluded from the start
    let vault = ledger.vault;
    ledger.pool.require_excluded(&ledger.record(vault)).unwrap();
    assert_eq!(ledger.pending(vault), 0);
}

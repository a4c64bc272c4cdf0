use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::constants::*;
use crate::error::DistributorError;
use crate::state::*;
use crate::utils::*;
use super::{assert_error, LedgerHarness};

fn new_processor(reward_bps: u16, burn_bps: u16, marketing_bps: u16, vesting_bps: u16) -> TaxProcessor {
    TaxProcessor::validate_split(reward_bps, burn_bps, marketing_bps, vesting_bps).unwrap();
    TaxProcessor {
        reward_bps,
        burn_bps,
        marketing_bps,
        vesting_bps,
        processing_enabled: true,
        ..Default::default()
    }
}

fn wire_all(processor: &mut TaxProcessor) -> [Pubkey; 5] {
    let keys = [
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    ];
    processor
        .wire_destinations(Some(keys[0]), Some(keys[1]), Some(keys[2]), Some(keys[3]), Some(keys[4]))
        .unwrap();
    keys
}

#[test]
fn test_split_reward_burn_swap() {
    let processor = new_processor(4000, 1000, 5000, 5000);
    let split = processor.split(10_000).unwrap();
    assert_eq!(
        split,
        TaxSplit {
            reward_share: 4000,
            burn_share: 1000,
            swap_share: 5000,
        }
    );
}

#[test]
fn test_reward_share_feeds_pool() {
    let processor = new_processor(4000, 1000, 5000, 5000);
    let mut ledger = LedgerHarness::new(0, 0, 0);
    let alice = Pubkey::new_unique();
    ledger.mint(alice, 1_000_000, 1);

    let split = processor.split(10_000).unwrap();
    ledger.distribute(split.reward_share, 2).unwrap();
    assert_eq!(ledger.pool.total_distributed, 4000);
    assert_eq!(ledger.pending(alice), 4000);
}

#[test]
fn test_split_conserves_amount() {
    println!("=== Testing split conservation ===");

    let ratios = [(0, 0), (10_000, 0), (0, 10_000), (3333, 3333), (2500, 7499), (1, 1)];
    let amounts = [1u64, 3, 7, 999, 10_001, 123_456_789, u64::MAX];

    for (reward_bps, burn_bps) in ratios {
        let processor = new_processor(reward_bps, burn_bps, 1, 1);
        for amount in amounts {
            let split = processor.split(amount).unwrap();
            assert_eq!(
                split.reward_share + split.burn_share + split.swap_share,
                amount,
                "reward_bps={} burn_bps={} amount={}",
                reward_bps,
                burn_bps,
                amount
            );
        }
    }
}

#[test]
fn test_settlement_split() {
    let processor = new_processor(0, 0, 3000, 7000);
    let settlement = processor.split_settlement(1000).unwrap();
    assert_eq!(settlement.marketing_share, 300);
    assert_eq!(settlement.vesting_share, 700);

    // Weights need not sum to 10_000; vesting takes the rounding remainder
    let processor = new_processor(0, 0, 1, 2);
    let settlement = processor.split_settlement(100).unwrap();
    assert_eq!(settlement.marketing_share, 33);
    assert_eq!(settlement.vesting_share, 67);

    let settlement = processor.split_settlement(0).unwrap();
    assert_eq!(settlement, SettlementSplit::default());
}

#[test]
fn test_validate_split() {
    assert_error(
        TaxProcessor::validate_split(6000, 4001, 1, 1),
        DistributorError::InvalidSplit,
    );
    assert_error(
        TaxProcessor::validate_split(0, 0, 0, 0),
        DistributorError::InvalidSplit,
    );
    assert_error(
        TaxProcessor::validate_split(0, 0, 10_001, 0),
        DistributorError::InvalidSplit,
    );
    TaxProcessor::validate_split(6000, 4000, 0, 1).unwrap();
}

#[test]
fn test_validate_process_errors() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);

    processor.validate_process(100, 100, 50, 50).unwrap();
    assert_error(processor.validate_process(0, 100, 50, 60), DistributorError::ZeroAmount);
    assert_error(
        processor.validate_process(100, 100, 61, 60),
        DistributorError::DeadlineExpired,
    );
    assert_error(
        processor.validate_process(101, 100, 50, 60),
        DistributorError::InsufficientBalance,
    );

    // Kill-switch is checked before anything else
    processor.processing_enabled = false;
    assert_error(
        processor.validate_process(0, 0, 61, 60),
        DistributorError::ProcessingDisabled,
    );
}

#[test]
fn test_processed_amount_cannot_be_reprocessed() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);
    let mut available = 10_000u64;

    processor.validate_process(10_000, available, 1, 10).unwrap();
    let split = processor.split(10_000).unwrap();
    available -= 10_000;
    processor.record_processed(10_000, &split, 42, 1).unwrap();

    assert_error(
        processor.validate_process(10_000, available, 2, 10),
        DistributorError::InsufficientBalance,
    );
    assert_eq!(processor.total_processed, 10_000);
    assert_eq!(processor.total_rewarded, 4000);
    assert_eq!(processor.total_burned, 1000);
    assert_eq!(processor.total_swapped, 5000);
    assert_eq!(processor.total_settlement_out, 42);
    assert_eq!(processor.last_processed_at, 1);
}

#[test]
fn test_wire_slot_once() {
    let mut slot = WireSlot::default();
    let first = Pubkey::new_unique();

    assert_error(slot.require(), DistributorError::DestinationNotWired);
    assert_error(slot.wire(Pubkey::default()), DistributorError::ZeroAddress);

    assert!(slot.wire(first).unwrap());
    assert!(!slot.wire(first).unwrap());
    assert_error(slot.wire(Pubkey::new_unique()), DistributorError::AlreadyWired);
    assert_eq!(slot.require().unwrap(), first);
}

#[test]
fn test_wire_destinations_incrementally() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);
    let reward = Pubkey::new_unique();
    let burn_sink = Pubkey::new_unique();

    let wired = processor
        .wire_destinations(Some(reward), None, None, None, None)
        .unwrap();
    assert_eq!(wired, vec![("reward", reward)]);

    // Repeating a wired key is a no-op alongside new slots
    let wired = processor
        .wire_destinations(Some(reward), None, Some(burn_sink), None, None)
        .unwrap();
    assert_eq!(wired, vec![("burn_sink", burn_sink)]);

    assert_error(
        processor.wire_destinations(Some(Pubkey::new_unique()), None, None, None, None),
        DistributorError::AlreadyWired,
    );
    assert_error(
        processor.wire_destinations(None, Some(Pubkey::default()), None, None, None),
        DistributorError::ZeroAddress,
    );
    assert!(!processor.destinations.all_wired());
    assert_eq!(processor.destinations.reward.get(), Some(reward));
    assert_eq!(processor.destinations.swap_venue.get(), None);
}

#[test]
fn test_wiring_closed_once_all_slots_set() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);
    let keys = wire_all(&mut processor);
    assert!(processor.destinations.all_wired());

    assert_error(
        processor.wire_destinations(None, None, None, None, None),
        DistributorError::AlreadyWired,
    );
    assert_error(
        processor.wire_destinations(Some(keys[0]), None, None, None, None),
        DistributorError::AlreadyWired,
    );
    assert_eq!(processor.destinations.vesting.require().unwrap(), keys[4]);
}

#[test]
fn test_processor_space() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);
    wire_all(&mut processor);
    let mut data = Vec::new();
    processor.serialize(&mut data).unwrap();
    assert!(8 + data.len() <= TaxProcessor::LEN);
}

#[test]
fn test_math_helpers() {
    assert_eq!(bps_share(10_000, 2500).unwrap(), 2500);
    assert_eq!(bps_share(u64::MAX, BPS_DENOMINATOR as u16).unwrap(), u64::MAX);
    assert_error(weighted_share(10, 1, 0), DistributorError::InvalidSplit);
    assert_error(weighted_share(10, 2, 1), DistributorError::InvalidSplit);

    assert_eq!(apply_delta(100, 40, 70).unwrap(), 130);
    assert_eq!(apply_delta(100, 70, 40).unwrap(), 70);
    assert_error(apply_delta(10, 70, 40), DistributorError::ArithmeticOverflow);
}

#[test]
fn test_mul_div_floor_wide_product() {
    assert_eq!(mul_div_floor(250, 7_000_000_000_000_000, 1_000_000_000_000_000_000).unwrap(), 1);
    assert_eq!(mul_div_floor(3, u128::MAX, 4).unwrap(), 3 * (1u128 << 126) - 1);
    assert_eq!(
        mul_div_floor(u64::MAX, 1_000_000_000_000_000_000_000_000_000_000, ACC_PRECISION as u64).unwrap(),
        18_446_744_073_709_551_615_000_000_000_000
    );
    assert_error(mul_div_floor(u64::MAX, u128::MAX, 1), DistributorError::ArithmeticOverflow);
    assert_error(mul_div_floor(1, 1, 0), DistributorError::ArithmeticOverflow);
}

fn supplied(keys: &[Pubkey; 5]) -> Destinations {
    Destinations {
        reward: WireSlot::Set(keys[0]),
        swap_venue: WireSlot::Set(keys[1]),
        burn_sink: WireSlot::Set(keys[2]),
        marketing: WireSlot::Set(keys[3]),
        vesting: WireSlot::Set(keys[4]),
    }
}

#[test]
fn test_destinations_must_match_wired_slots() {
    let mut processor = new_processor(4000, 1000, 5000, 5000);
    let keys = [
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    ];

    processor
        .wire_destinations(Some(keys[0]), Some(keys[1]), Some(keys[2]), Some(keys[3]), None)
        .unwrap();
    assert_error(
        processor.destinations.require_matches(&supplied(&keys)),
        DistributorError::DestinationNotWired,
    );

    processor
        .wire_destinations(None, None, None, None, Some(keys[4]))
        .unwrap();
    processor.destinations.require_matches(&supplied(&keys)).unwrap();

    let mut wrong_burn_sink = supplied(&keys);
    wrong_burn_sink.burn_sink = WireSlot::Set(Pubkey::new_unique());
    assert_error(
        processor.destinations.require_matches(&wrong_burn_sink),
        DistributorError::DestinationMismatch,
    );
}

#[test]
fn test_settle_swap() {
    let processor = new_processor(4000, 1000, 3000, 7000);
    let split = processor.split(10_000).unwrap();
    let balances = SwapBalances {
        tax_before: 10_000,
        tax_after: 5_000,
        settlement_before: 20,
        settlement_after: 1_020,
    };

    let (settlement_out, settlement) = processor.settle_swap(&split, &balances, 1_000).unwrap();
    assert_eq!(settlement_out, 1_000);
    assert_eq!(settlement.marketing_share, 300);
    assert_eq!(settlement.vesting_share, 700);

    // Proceeds measured on the vault, below the caller's minimum
    assert_error(
        processor.settle_swap(&split, &balances, 1_001),
        DistributorError::SlippageExceeded,
    );
    let drained = SwapBalances {
        settlement_after: 10,
        ..balances
    };
    assert_error(
        processor.settle_swap(&split, &drained, 0),
        DistributorError::SlippageExceeded,
    );
}

#[test]
fn test_settle_swap_requires_exact_input() {
    let processor = new_processor(4000, 1000, 3000, 7000);
    let split = processor.split(10_000).unwrap();

    let under_spent = SwapBalances {
        tax_before: 10_000,
        tax_after: 5_001,
        settlement_before: 0,
        settlement_after: 1_000,
    };
    assert_error(
        processor.settle_swap(&split, &under_spent, 0),
        DistributorError::SwapInputMismatch,
    );

    let refilled = SwapBalances {
        tax_after: 10_001,
        ..under_spent
    };
    assert_error(
        processor.settle_swap(&split, &refilled, 0),
        DistributorError::SwapInputMismatch,
    );
}

#[test]
fn test_settle_swap_without_swap_share() {
    let processor = new_processor(6000, 4000, 3000, 7000);
    let split = processor.split(10_000).unwrap();
    assert_eq!(split.swap_share, 0);

    let untouched = SwapBalances {
        tax_before: 10_000,
        tax_after: 10_000,
        settlement_before: 50,
        settlement_after: 50,
    };
    assert_error(
        processor.settle_swap(&split, &untouched, 1),
        DistributorError::SlippageExceeded,
    );
    let (settlement_out, settlement) = processor.settle_swap(&split, &untouched, 0).unwrap();
    assert_eq!(settlement_out, 0);
    assert_eq!(settlement, SettlementSplit::default());
}

#[test]
fn test_router_swap_data_layout() {
    let data = router_swap_data(5000, 4900, 1_700_000_000);
    assert_eq!(data.len(), 32);
    assert_eq!(&data[..8], &hash(b"global:swap").to_bytes()[..8]);
    assert_eq!(&data[8..16], &5000u64.to_le_bytes());
    assert_eq!(&data[16..24], &4900u64.to_le_bytes());
    assert_eq!(&data[24..32], &1_700_000_000i64.to_le_bytes());
}

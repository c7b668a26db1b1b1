//! Tests for ChainIndex
//!
//! These tests verify:
//! - Slot allocation order and exhaustion
//! - Ordered chains and the per-chain ceiling
//! - Clearing slots independently of blocks

use mfs::index::ChainIndex;
use mfs::MfsError;

#[test]
fn test_allocate_slot_lowest_first() {
    let mut index = ChainIndex::new(4, 32);

    assert_eq!(index.allocate_slot().unwrap(), 0);
    assert_eq!(index.allocate_slot().unwrap(), 1);
    assert_eq!(index.slots_in_use(), 2);
    assert_eq!(index.capacity(), 4);
}

#[test]
fn test_allocated_empty_slot_is_not_handed_out_twice() {
    let mut index = ChainIndex::new(2, 32);

    let first = index.allocate_slot().unwrap();
    let second = index.allocate_slot().unwrap();

    assert_ne!(first, second);
    assert!(index.chain_of(first).is_empty());
    assert!(index.is_allocated(first));
}

#[test]
fn test_no_slot_available() {
    let mut index = ChainIndex::new(128, 32);
    for _ in 0..128 {
        index.allocate_slot().unwrap();
    }

    assert!(matches!(index.allocate_slot(), Err(MfsError::NoSlotAvailable)));
}

#[test]
fn test_append_preserves_order() {
    let mut index = ChainIndex::new(4, 32);
    let slot = index.allocate_slot().unwrap();

    for block in [7, 3, 11, 0] {
        index.append(slot, block).unwrap();
    }

    assert_eq!(index.chain_of(slot), &[7, 3, 11, 0]);
}

#[test]
fn test_append_chain_full() {
    let mut index = ChainIndex::new(2, 32);
    let slot = index.allocate_slot().unwrap();

    for block in 0..32 {
        index.append(slot, block).unwrap();
    }

    assert!(matches!(
        index.append(slot, 32),
        Err(MfsError::ChainFull { slot: s }) if s == slot
    ));
    assert_eq!(index.chain_of(slot).len(), 32);
}

#[test]
fn test_clear_frees_slot_and_returns_chain() {
    let mut index = ChainIndex::new(2, 32);
    let a = index.allocate_slot().unwrap();
    let _b = index.allocate_slot().unwrap();
    index.append(a, 5).unwrap();
    index.append(a, 6).unwrap();

    let chain = index.clear(a);

    assert_eq!(chain, vec![5, 6]);
    assert!(!index.is_allocated(a));
    assert!(index.chain_of(a).is_empty());
    assert_eq!(index.allocate_slot().unwrap(), a);
}

#[test]
fn test_iter_skips_free_slots() {
    let mut index = ChainIndex::new(4, 32);
    let a = index.allocate_slot().unwrap();
    let b = index.allocate_slot().unwrap();
    let c = index.allocate_slot().unwrap();
    index.append(a, 1).unwrap();
    index.append(c, 2).unwrap();
    index.clear(b);

    let chains: Vec<_> = index.iter().map(|(slot, chain)| (slot, chain.to_vec())).collect();

    assert_eq!(chains, vec![(a, vec![1]), (c, vec![2])]);
}

#[test]
#[should_panic]
fn test_append_to_free_slot_panics() {
    let mut index = ChainIndex::new(2, 32);
    let _ = index.append(1, 0);
}

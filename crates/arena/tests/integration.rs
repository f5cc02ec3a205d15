// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: arena behaviour across whole epochs.
//!
//! These tests drive the public API only, the way a message loop would:
//! allocate a batch, use the bytes, reset, repeat.

use epoch_arena::{Arena, ArenaConfig, ArenaError, ArenaSlice, ByteSize, DEFAULT_BLOCK_UNIT_SIZE};

// ── Helpers ────────────────────────────────────────────────────

fn assert_pairwise_disjoint(slices: &[ArenaSlice]) {
    for (i, a) in slices.iter().enumerate() {
        for b in &slices[i + 1..] {
            assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
        }
    }
}

// ── Bump Allocation ────────────────────────────────────────────

#[test]
fn test_three_small_then_one_large() {
    let mut arena = Arena::with_sizes(1000, DEFAULT_BLOCK_UNIT_SIZE).unwrap();

    let slices: Vec<_> = (0..3).map(|_| arena.allocate(100).unwrap()).collect();
    assert_eq!(slices[0].offset(), 0);
    assert_eq!(slices[1].offset(), 100);
    assert_eq!(slices[2].offset(), 200);
    assert!(slices.iter().all(|s| s.block_index() == 0));
    assert_eq!(arena.allocated_bytes(), 300);
    assert_eq!(arena.extra_block_count(), 0);

    // 700 bytes remain, so 800 must go to a new block.
    assert_eq!(arena.remaining(), 700);
    let large = arena.allocate(800).unwrap();
    assert_eq!(arena.extra_block_count(), 1);
    assert_eq!(large.block_index(), 1);
    assert_eq!(arena.block_size(1), Some(800.max(DEFAULT_BLOCK_UNIT_SIZE)));
}

#[test]
fn test_fitting_requests_never_add_blocks() {
    let mut arena = Arena::with_sizes(4096, 512).unwrap();
    let sizes = [1, 7, 64, 100, 333, 1000, 2000, 487];
    assert_eq!(sizes.iter().sum::<usize>(), 3992);

    for size in sizes {
        arena.allocate(size).unwrap();
    }
    assert_eq!(arena.extra_block_count(), 0);
    assert_eq!(arena.remaining(), 4096 - 3992);
}

#[test]
fn test_ranges_are_disjoint_across_blocks() {
    let mut arena = Arena::with_sizes(256, 128).unwrap();
    let slices: Vec<_> = (1..=64).map(|i| arena.allocate(i * 3).unwrap()).collect();

    assert!(arena.extra_block_count() > 0);
    assert_pairwise_disjoint(&slices);
    assert!(arena.allocated_bytes() <= arena.total_bytes());
}

#[test]
fn test_writes_do_not_clobber_neighbours() {
    let mut arena = Arena::with_sizes(128, 64).unwrap();
    let slices: Vec<_> = (0u8..40)
        .map(|i| arena.alloc_copy(&[i; 10]).unwrap())
        .collect();

    for (i, slice) in slices.iter().enumerate() {
        assert_eq!(arena.get(slice).unwrap(), &[i as u8; 10]);
    }
}

// ── Epoch Resizing ─────────────────────────────────────────────

#[test]
fn test_ten_requests_in_two_blocks() {
    let mut arena = Arena::with_sizes(600, 600).unwrap();
    for _ in 0..10 {
        arena.allocate(100).unwrap();
    }
    assert_eq!(arena.extra_block_count(), 1);
    assert_eq!(arena.total_bytes(), 1200);
    assert_eq!(arena.allocated_bytes(), 1000);

    arena.reset();
    assert_eq!(arena.block_unit_size(), 200);
    assert_eq!(arena.initial_block_size(), 600);
}

#[test]
fn test_unit_size_uses_floor_of_mean() {
    let mut arena = Arena::with_sizes(1024, 64).unwrap();
    arena.allocate(3).unwrap();
    arena.allocate(4).unwrap();
    arena.reset();

    // Mean 3.5 floors to 3.
    assert_eq!(arena.block_unit_size(), 6);
    // 1024 held → 512.
    assert_eq!(arena.initial_block_size(), 512);
}

#[test]
fn test_reset_starts_clean_epoch() {
    let mut arena = Arena::with_sizes(200, 100).unwrap();
    for _ in 0..20 {
        arena.allocate(50).unwrap();
    }
    let before = arena.stats();
    assert!(before.overflow_blocks > 0);

    arena.reset();
    let after = arena.stats();
    assert_eq!(after.epoch, before.epoch + 1);
    assert_eq!(after.total_bytes, 0);
    assert_eq!(after.allocated_bytes, 0);
    assert_eq!(after.request_sum, 0);
    assert_eq!(after.request_count, 0);
    assert_eq!(after.overflow_blocks, 0);
    assert_eq!(arena.extra_block_count(), 0);
    assert_eq!(arena.block_count(), 1);
}

#[test]
fn test_sizing_converges_on_steady_workload() {
    let mut arena = Arena::new();

    for _ in 0..6 {
        for _ in 0..200 {
            arena.allocate(256).unwrap();
        }
        arena.reset();
        assert_eq!(arena.block_unit_size(), 512);
    }

    // Overflow blocks are exactly two requests wide, so a steady workload
    // leaves no dead tail in any block.
    for _ in 0..200 {
        arena.allocate(256).unwrap();
    }
    assert!(arena.stats().utilisation() > 0.5);
}

#[test]
fn test_idle_epochs_shrink_to_floor() {
    let config = ArenaConfig {
        initial_block_size: ByteSize::from_kb(4),
        block_unit_size: ByteSize::from_bytes(256),
        min_block_size: ByteSize::from_bytes(128),
        ..Default::default()
    };
    let mut arena = Arena::with_config(&config).unwrap();
    for _ in 0..10 {
        arena.reset();
    }
    assert_eq!(arena.initial_block_size(), 128);
    assert_eq!(arena.block_unit_size(), DEFAULT_BLOCK_UNIT_SIZE);

    // Still usable.
    let s = arena.alloc_copy(b"hello").unwrap();
    assert_eq!(arena.get(&s).unwrap(), b"hello");
}

#[test]
fn test_small_epoch_halves_below_min_block_size() {
    let mut arena = Arena::with_sizes(100, 50).unwrap();
    arena.allocate(10).unwrap();
    assert_eq!(arena.total_bytes(), 100);

    arena.reset();
    assert_eq!(arena.initial_block_size(), 50);
    assert_eq!(arena.block_size(0), Some(50));
    assert_eq!(arena.block_unit_size(), 20);
}

#[test]
fn test_one_byte_epoch_leaves_empty_initial_block() {
    let mut arena = Arena::with_sizes(1, 1).unwrap();
    arena.allocate(1).unwrap();
    arena.reset();
    assert_eq!(arena.initial_block_size(), 0);
    assert_eq!(arena.remaining(), 0);

    // The first request goes straight to an overflow block.
    let s = arena.alloc_copy(b"abc").unwrap();
    assert_eq!(s.block_index(), 1);
    assert_eq!(arena.get(&s).unwrap(), b"abc");
    assert_eq!(arena.total_bytes(), 3);
}

// ── Rejections And Stale Handles ───────────────────────────────

#[test]
fn test_rejected_requests_leave_state_untouched() {
    let config = ArenaConfig::from_toml("max_request_size = \"16K\"").unwrap();
    let mut arena = Arena::with_config(&config).unwrap();
    arena.allocate(10).unwrap();
    let before = arena.stats();
    let remaining = arena.remaining();

    assert_eq!(arena.allocate(0), Err(ArenaError::ZeroSizedAllocation));
    assert!(matches!(
        arena.allocate(16 * 1024 + 1),
        Err(ArenaError::RequestTooLarge { .. })
    ));

    assert_eq!(arena.stats(), before);
    assert_eq!(arena.remaining(), remaining);
}

#[test]
fn test_handles_expire_at_reset() {
    let mut arena = Arena::with_sizes(64, 64).unwrap();
    let old = arena.alloc_copy(b"epoch zero").unwrap();
    arena.reset();
    let new = arena.alloc_copy(b"epoch one").unwrap();

    assert!(matches!(
        arena.get(&old),
        Err(ArenaError::StaleHandle {
            handle_epoch: 0,
            current_epoch: 1
        })
    ));
    assert_eq!(arena.get(&new).unwrap(), b"epoch one");
}

// ── Diagnostics ────────────────────────────────────────────────

#[test]
fn test_debug_string_reflects_state() {
    let mut arena = Arena::with_sizes(600, 600).unwrap();
    for _ in 0..10 {
        arena.allocate(100).unwrap();
    }
    let s = arena.debug_string();
    assert!(s.contains("2 blocks (1 extra)"));
    assert!(s.contains("held 1200 B"));
    assert!(s.contains("allocated 1000 B"));
    assert!(s.contains("10 requests (avg 100 B)"));
}

#[test]
fn test_stats_serialize_to_json() {
    let mut arena = Arena::with_sizes(600, 600).unwrap();
    arena.allocate(100).unwrap();
    let json = serde_json::to_string(&arena.stats()).unwrap();
    assert!(json.contains("\"allocated_bytes\":100"));
    assert!(json.contains("\"total_bytes\":600"));
}

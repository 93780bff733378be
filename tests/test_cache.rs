// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 The tristrip developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use tristrip::containers::cache_simulator::CacheSimulator;

type Cache = CacheSimulator<u32>;

#[test]
fn zero_capacity_means_disabled() {
    let cache = Cache::new(0);
    assert!(!cache.is_enabled());
    assert_eq!(cache.capacity(), 0);

    let cache = Cache::new(10);
    assert!(cache.is_enabled());
}

#[test]
fn repeated_index_is_a_hit() {
    let mut cache = Cache::new(4);
    cache.push(0, true);
    cache.push(1, true);
    cache.push(2, true);
    assert_eq!(cache.hit_count(), 0);

    cache.push(1, true);
    assert_eq!(cache.hit_count(), 1);
    cache.push(2, true);
    assert_eq!(cache.hit_count(), 2);
}

#[test]
fn uncounted_pushes_warm_the_cache_silently() {
    let mut cache = Cache::new(4);
    cache.push(0, false);
    cache.push(1, false);
    cache.push(0, false);
    assert_eq!(cache.hit_count(), 0);

    // The warmed entries still produce counted hits later.
    cache.push(1, true);
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn old_entries_fall_out_past_capacity() {
    let mut cache = Cache::new(3);
    cache.push(0, true);
    cache.push(1, true);
    cache.push(2, true);
    cache.push(3, true); // evicts 0

    cache.push(0, true);
    assert_eq!(cache.hit_count(), 0);
}

#[test]
fn a_hit_refreshes_the_entry_by_default() {
    let mut cache = Cache::new(3);
    cache.push(0, true);
    cache.push(1, true);
    cache.push(2, true);

    // Hitting 0 re-inserts it at the front, so it survives the next
    // insertions.
    cache.push(0, true);
    cache.push(3, true);
    cache.push(4, true);
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 2);
}

#[test]
fn push_hits_disabled_leaves_fifo_order_untouched() {
    let mut cache = Cache::new(3);
    cache.push_cache_hits(false);
    cache.push(0, true);
    cache.push(1, true);
    cache.push(2, true);

    // The hit on 0 neither moves nor duplicates it, so 0 is still the
    // oldest entry and the next miss evicts it.
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 1);
    cache.push(3, true);
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn reset_clears_entries_and_hits() {
    let mut cache = Cache::new(3);
    cache.push(0, true);
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 1);

    cache.reset();
    assert_eq!(cache.hit_count(), 0);
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 0);
}

#[test]
fn resize_changes_capacity_and_starts_cold() {
    let mut cache = Cache::new(2);
    cache.push(0, true);

    cache.resize(5);
    assert_eq!(cache.capacity(), 5);
    cache.push(0, true);
    assert_eq!(cache.hit_count(), 0);
}

#[test]
fn merge_replays_the_overlap_as_forced_hits() {
    let mut backward = Cache::new(5);
    backward.push(10, true);
    backward.push(11, true);
    assert_eq!(backward.hit_count(), 0);

    let mut cache = Cache::new(5);
    cache.push(11, true);

    // Overlap 2 replays the backward entries, newest first: 11 hits
    // the live cache, 10 misses.
    cache.merge(&backward, 2);
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn merge_absorbs_the_backward_hit_count() {
    let mut backward = Cache::new(5);
    backward.push(7, true);
    backward.push(7, true);
    assert_eq!(backward.hit_count(), 1);

    let mut cache = Cache::new(5);
    cache.merge(&backward, 0);
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn merge_overlap_is_clamped_to_what_exists() {
    let mut backward = Cache::new(5);
    backward.push(1, true);

    let mut cache = Cache::new(5);
    // Asking for more overlap than the backward cache holds must not
    // panic.
    cache.merge(&backward, 100);
    assert_eq!(cache.hit_count(), 0);
}

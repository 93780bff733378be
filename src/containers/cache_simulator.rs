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

use std::collections::VecDeque;

use crate::mesh::basic_types::VertexIndex;

/// FIFO model of the GPU post-transform vertex cache.
///
/// Cheap to clone: candidate evaluation snapshots the simulator,
/// scores a strip against the copy, and throws the copy away. The
/// snapshot carries the hit counter, so every candidate in a round is
/// scored from the same baseline.
#[derive(Debug, Clone)]
pub struct CacheSimulator<I: VertexIndex> {
    entries: VecDeque<I>,
    capacity: usize,
    hits: usize,
    push_hits: bool,
}

impl<I: VertexIndex> CacheSimulator<I> {
    /// A capacity of 0 disables the simulator entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            push_hits: true,
        }
    }

    /// Change the modelled cache size. Also resets the contents.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.reset();
    }

    /// Empty all slots and zero the hit counter. Capacity and the
    /// push-on-hit mode are preserved.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }

    /// Whether a cache hit re-inserts the index at the front (true,
    /// the default) or leaves the FIFO order undisturbed (false,
    /// modelling GPUs that do not duplicate cache entries).
    pub fn push_cache_hits(&mut self, enabled: bool) {
        self.push_hits = enabled;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.capacity != 0
    }

    #[inline]
    pub fn hit_count(&self) -> usize {
        self.hits
    }

    /// Push one index through the cache. The membership scan only
    /// runs when it can matter: a hit bumps the counter only when
    /// `count_hit` is set, and the index is re-pushed to the front
    /// only in push-on-hit mode; otherwise the FIFO stays untouched.
    /// A miss always inserts at the front and evicts the oldest entry
    /// past capacity.
    pub fn push(&mut self, i: I, count_hit: bool) {
        if (count_hit || self.push_hits) && self.entries.contains(&i) {
            if count_hit {
                self.hits += 1;
            }
            if !self.push_hits {
                return;
            }
        }

        self.entries.push_front(i);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Splice a backward-search cache onto this one: the first
    /// `overlap` entries of `backward` (clamped to capacity) are
    /// replayed as forced hits, and its hit count is absorbed.
    pub fn merge(&mut self, backward: &CacheSimulator<I>, overlap: usize) {
        let overlap = overlap.min(self.capacity).min(backward.entries.len());
        for k in 0..overlap {
            self.push(backward.entries[k], true);
        }
        self.hits += backward.hits;
    }
}

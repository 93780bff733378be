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

/// Binary min-heap whose elements stay addressable by a stable id.
///
/// `push` returns an id that survives every reshuffle, so callers can
/// `peek`, `update` or `erase` a logical element regardless of where
/// it currently sits in the heap. The heap follows a two-phase
/// lifecycle: bulk-load with `push`, then `lock()`; after locking,
/// only `pop`/`update`/`erase` are allowed. Ids are assigned
/// sequentially from 0 in push order.
#[derive(Debug, Clone, Default)]
pub struct HeapArray<T: Ord + Copy> {
    heap: Vec<Entry<T>>,
    // external id -> heap slot; None once erased or popped
    positions: Vec<Option<usize>>,
    locked: bool,
}

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    value: T,
    id: usize,
}

impl<T: Ord + Copy> HeapArray<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new(), positions: Vec::new(), locked: false }
    }

    pub fn reserve(&mut self, n: usize) {
        self.heap.reserve(n);
        self.positions.reserve(n);
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
        self.locked = false;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Forbid further `push` calls; required before any mutation.
    pub fn lock(&mut self) {
        debug_assert!(!self.locked, "heap locked twice");
        self.locked = true;
    }

    /// Insert a value and return its stable id.
    pub fn push(&mut self, value: T) -> usize {
        debug_assert!(!self.locked, "push into a locked heap");

        let id = self.positions.len();
        let slot = self.heap.len();
        self.heap.push(Entry { value, id });
        self.positions.push(Some(slot));
        self.sift_up(slot);
        id
    }

    /// The minimum value.
    #[inline]
    pub fn top(&self) -> T {
        self.heap[0].value
    }

    /// The id of the element holding the minimum value.
    #[inline]
    pub fn top_id(&self) -> usize {
        self.heap[0].id
    }

    /// Current value of the element with the given id.
    #[inline]
    pub fn peek(&self, id: usize) -> T {
        let slot = self.positions[id].expect("peek of a removed element");
        self.heap[slot].value
    }

    /// Whether the element with the given id has left the heap.
    #[inline]
    pub fn removed(&self, id: usize) -> bool {
        self.positions[id].is_none()
    }

    /// Remove the minimum element.
    pub fn pop(&mut self) {
        debug_assert!(self.locked, "pop from an unlocked heap");
        self.remove_slot(0);
    }

    /// Remove the element with the given id, wherever it sits.
    pub fn erase(&mut self, id: usize) {
        debug_assert!(self.locked, "erase from an unlocked heap");
        let slot = self.positions[id].expect("erase of a removed element");
        self.remove_slot(slot);
    }

    /// Replace the value of the element with the given id and restore
    /// the heap order around it.
    pub fn update(&mut self, id: usize, value: T) {
        debug_assert!(self.locked, "update of an unlocked heap");
        let slot = self.positions[id].expect("update of a removed element");

        let old = self.heap[slot].value;
        self.heap[slot].value = value;
        if value < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn remove_slot(&mut self, slot: usize) {
        let last = self.heap.len() - 1;
        self.positions[self.heap[slot].id] = None;

        if slot != last {
            self.heap.swap(slot, last);
            self.heap.pop();
            self.positions[self.heap[slot].id] = Some(slot);
            // The element swapped into the hole may belong either way.
            self.sift_up(slot);
            self.sift_down(slot);
        } else {
            self.heap.pop();
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].value >= self.heap[parent].value {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < self.heap.len() && self.heap[left].value < self.heap[smallest].value {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].value < self.heap[smallest].value {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id] = Some(a);
        self.positions[self.heap[b].id] = Some(b);
    }
}

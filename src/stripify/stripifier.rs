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

use crate::containers::cache_simulator::CacheSimulator;
use crate::containers::heap_array::HeapArray;
use crate::mesh::basic_types::{
    PrimitiveGroup, PrimitiveType, Strip, TriangleOrder, VertexIndex,
};
use crate::mesh::connectivity::ConnectivityGraph;
use crate::stripify::policy::StripPolicy;

pub const DEFAULT_CACHE_SIZE: usize = 10;
pub const DEFAULT_MIN_STRIP_SIZE: usize = 2;

/// Greedy post-T&L cache aware stripifier.
///
/// Seeds candidate strips from the loneliest unconsumed triangle,
/// explores every rotation of each candidate, scores the walks with a
/// simulated vertex cache, and commits the winner. Triangles that
/// never make it into a strip are emitted as one trailing
/// [`PrimitiveType::Triangles`] group.
///
/// The algorithm is total: degenerate triangles, non-manifold edges
/// and boundary edges all produce valid (if unremarkable) output.
pub struct Stripifier<I: VertexIndex> {
    graph: ConnectivityGraph<I>,
    heap: HeapArray<usize>,
    candidates: Vec<usize>,
    cache: CacheSimulator<I>,
    back_cache: CacheSimulator<I>,
    strip_id: u64,
    min_strip_size: usize,
    backward_search: bool,
    output: Vec<PrimitiveGroup<I>>,
    first_run: bool,
}

impl<I: VertexIndex> Stripifier<I> {
    /// Build the connectivity graph for an independent triangle list.
    /// A trailing remainder of the index buffer is silently ignored.
    pub fn new(indices: &[I]) -> Self {
        Self {
            graph: ConnectivityGraph::from_indices(indices),
            heap: HeapArray::new(),
            candidates: Vec::new(),
            cache: CacheSimulator::new(DEFAULT_CACHE_SIZE),
            back_cache: CacheSimulator::new(DEFAULT_CACHE_SIZE),
            strip_id: 0,
            min_strip_size: DEFAULT_MIN_STRIP_SIZE,
            backward_search: false,
            output: Vec::new(),
            first_run: true,
        }
    }

    /// Size of the simulated post-T&L cache. 0 disables cache-aware
    /// scoring entirely and the longest strip always wins.
    pub fn set_cache_size(&mut self, size: usize) {
        self.cache.resize(size);
        self.back_cache.resize(size);
    }

    /// Strips shorter than this are never emitted. Clamped to at
    /// least 2.
    pub fn set_min_strip_size(&mut self, size: usize) {
        self.min_strip_size = size.max(2);
    }

    /// Also try to grow strips backward from each seed (6 extra
    /// directions). Slower, and counter-productive when combined with
    /// cache simulation.
    pub fn set_backward_search(&mut self, enabled: bool) {
        self.backward_search = enabled;
    }

    /// Whether a simulated cache hit re-inserts the index at the
    /// front of the FIFO. See [`CacheSimulator::push_cache_hits`].
    pub fn set_push_cache_hits(&mut self, enabled: bool) {
        self.cache.push_cache_hits(enabled);
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.graph.len()
    }

    /// Run the full stripification and return the primitive groups.
    /// May be called repeatedly on the same instance; every run
    /// starts from a clean slate over the same connectivity graph.
    pub fn strip(&mut self) -> Vec<PrimitiveGroup<I>> {
        if !self.first_run {
            self.reset_state();
        }
        self.first_run = false;

        self.init_heap();
        self.stripify();
        self.add_left_triangles();

        std::mem::take(&mut self.output)
    }

    fn reset_state(&mut self) {
        self.graph.unmark_all();
        self.graph.reset_strip_ids();
        self.cache.reset();
        self.back_cache.reset();
        self.heap.clear();
        self.candidates.clear();
        self.strip_id = 0;
        self.output.clear();
    }

    fn init_heap(&mut self) {
        self.heap.reserve(self.graph.len());

        // The lower the number of available neighbours, the higher
        // the priority. Heap ids coincide with triangle ids because
        // the triangles are pushed in order.
        for i in 0..self.graph.len() {
            self.heap.push(self.graph.degree(i));
        }
        self.heap.lock();

        // Isolated triangles can never start a strip; they are swept
        // into the trailing Triangles group at the end.
        while !self.heap.is_empty() && self.heap.top() == 0 {
            self.heap.pop();
        }
    }

    fn stripify(&mut self) {
        while !self.heap.is_empty() {
            // The candidate list has drained; refill it with the
            // loneliest remaining triangle.
            let seed = self.heap.top_id();
            self.candidates.push(seed);

            while !self.candidates.is_empty() {
                // find_best_strip drains the candidate list, and
                // build_strip refills it.
                let strip = self.find_best_strip();

                if strip.size >= self.min_strip_size {
                    self.build_strip(strip);
                }
            }

            // Retire the seed unless a commit already removed it.
            if !self.heap.removed(seed) {
                self.heap.erase(seed);
            }

            // Eliminate the triangles that have now become useless.
            while !self.heap.is_empty() && self.heap.top() == 0 {
                self.heap.pop();
            }
        }
    }

    fn find_best_strip(&mut self) -> Strip {
        // Candidate evaluation runs on the live cache and restores
        // this snapshot afterward, hit counter included.
        let cache_backup = self.cache.clone();

        let mut policy = StripPolicy::new(self.min_strip_size, self.cache.is_enabled());

        while let Some(candidate) = self.candidates.pop() {
            // Entries may be stale by now: consumed since they were
            // queued, or out of unmarked neighbours. Duplicates in
            // the queue resolve to no-ops here.
            if self.graph.marked(candidate)
                || self.heap.removed(candidate)
                || self.heap.peek(candidate) == 0
            {
                continue;
            }

            for i in 0..3 {
                let strip = self.extend_to_strip(candidate, TriangleOrder::from_index(i));
                policy.challenge(strip, self.start_degree(&strip), self.cache.hit_count());
                self.cache = cache_backup.clone();
            }

            if self.backward_search {
                for clockwise in [false, true] {
                    for i in 0..3 {
                        let strip = self.back_extend_to_strip(
                            candidate,
                            TriangleOrder::from_index(i),
                            clockwise,
                        );
                        if strip.size > 0 {
                            policy.challenge(
                                strip,
                                self.start_degree(&strip),
                                self.cache.hit_count(),
                            );
                        }
                        self.cache = cache_backup.clone();
                    }
                }
            }
        }

        policy.best_strip()
    }

    // A backward walk can end on a triangle that was retired from the
    // heap as a failed seed in an earlier round; it no longer has a
    // tracked degree.
    fn start_degree(&self, strip: &Strip) -> usize {
        if self.heap.removed(strip.start) {
            0
        } else {
            self.heap.peek(strip.start)
        }
    }

    /// Simulate growing a strip forward from `start` in the given
    /// rotation, feeding the live cache. Returns the candidate strip.
    fn extend_to_strip(&mut self, start: usize, order: TriangleOrder) -> Strip {
        let start_order = order;
        let mut order = order;

        // Begin a new candidate walk; the fresh id keeps the walk
        // from revisiting its own triangles.
        self.strip_id += 1;
        self.graph.node_mut(start).triangle.set_strip_id(self.strip_id);
        self.add_triangle_indices(start, order, false);

        let mut size = 1;
        let mut clockwise = false;
        let mut node = start;

        // Walk across the trailing edge until no neighbour fits, or
        // the strip would outgrow the simulated cache.
        loop {
            if self.cache.is_enabled() && size + 2 >= self.cache.capacity() {
                break;
            }

            match self.link_to_neighbour(node, clockwise, &mut order, false) {
                Some(next) => {
                    self.graph.node_mut(next).triangle.set_strip_id(self.strip_id);
                    clockwise = !clockwise;
                    size += 1;
                    node = next;
                }
                None => break,
            }
        }

        Strip::new(start, start_order, size)
    }

    /// Simulate growing a strip backward from `start`: find triangles
    /// that would precede the seed in strip order. The walk feeds the
    /// separate backward cache, merged into the live one on success.
    fn back_extend_to_strip(
        &mut self,
        start: usize,
        order: TriangleOrder,
        clockwise: bool,
    ) -> Strip {
        self.back_cache.reset();

        self.strip_id += 1;
        self.graph.node_mut(start).triangle.set_strip_id(self.strip_id);
        if self.cache.is_enabled() {
            let last = self.graph.node(start).triangle.last_edge(order).b;
            self.back_cache.push(last, true);
        }

        let mut size = 1;
        let mut order = order;
        let mut clockwise = clockwise;
        let mut node = start;

        loop {
            if self.cache.is_enabled() && size + 2 >= self.cache.capacity() {
                break;
            }

            match self.back_link_to_neighbour(node, clockwise, &mut order) {
                Some(prev) => {
                    self.graph.node_mut(prev).triangle.set_strip_id(self.strip_id);
                    clockwise = !clockwise;
                    size += 1;
                    node = prev;
                }
                None => break,
            }
        }

        // A strip must start on a counterclockwise triangle. Dropping
        // the odd tail instead tends to orphan more triangles, so the
        // whole walk is rejected.
        if clockwise {
            return Strip::default();
        }

        if self.cache.is_enabled() {
            self.cache.merge(&self.back_cache, size);
        }

        Strip::new(node, order, size)
    }

    /// Commit the winning strip: emit its indices for real, mark its
    /// triangles consumed and update the neighbourhood.
    fn build_strip(&mut self, strip: Strip) {
        let mut clockwise = false;
        let mut order = strip.order;

        self.output.push(PrimitiveGroup::new(PrimitiveType::TriangleStrip));
        self.add_triangle_indices(strip.start, order, true);
        self.mark_triangle_taken(strip.start);

        let mut node = strip.start;
        for _ in 1..strip.size {
            let next = self
                .link_to_neighbour(node, clockwise, &mut order, true)
                .expect("committed strip lost a triangle simulated moments ago");
            self.mark_triangle_taken(next);
            clockwise = !clockwise;
            node = next;
        }
    }

    /// Follow the strip's trailing edge to the unique usable
    /// neighbour, if any. On success the rotation is updated, the new
    /// vertex is emitted and the neighbour's id returned.
    fn link_to_neighbour(
        &mut self,
        node: usize,
        clockwise: bool,
        order: &mut TriangleOrder,
        not_simulation: bool,
    ) -> Option<usize> {
        let edge = self.graph.node(node).triangle.last_edge(*order);

        for k in 0..self.graph.node(node).arcs.len() {
            let nb = self.graph.node(node).arcs[k];
            let tri = self.graph.node(nb).triangle;

            // A simulated walk may not reuse a triangle it already
            // holds; committed triangles are out for good.
            if (!not_simulation && tri.strip_id() == self.strip_id) || self.graph.marked(nb) {
                continue;
            }

            if edge.b == tri.a() && edge.a == tri.b() {
                *order = if clockwise { TriangleOrder::Abc } else { TriangleOrder::Bca };
                self.add_index(tri.c(), not_simulation);
                return Some(nb);
            } else if edge.b == tri.b() && edge.a == tri.c() {
                *order = if clockwise { TriangleOrder::Bca } else { TriangleOrder::Cab };
                self.add_index(tri.a(), not_simulation);
                return Some(nb);
            } else if edge.b == tri.c() && edge.a == tri.a() {
                *order = if clockwise { TriangleOrder::Cab } else { TriangleOrder::Abc };
                self.add_index(tri.b(), not_simulation);
                return Some(nb);
            }
        }

        None
    }

    /// Backward counterpart of [`Self::link_to_neighbour`]: follow
    /// the strip's leading edge to a triangle that would precede the
    /// current one.
    fn back_link_to_neighbour(
        &mut self,
        node: usize,
        clockwise: bool,
        order: &mut TriangleOrder,
    ) -> Option<usize> {
        let edge = self.graph.node(node).triangle.first_edge(*order);

        for k in 0..self.graph.node(node).arcs.len() {
            let nb = self.graph.node(node).arcs[k];
            let tri = self.graph.node(nb).triangle;

            if tri.strip_id() == self.strip_id || self.graph.marked(nb) {
                continue;
            }

            if edge.b == tri.a() && edge.a == tri.b() {
                *order = if clockwise { TriangleOrder::Cab } else { TriangleOrder::Bca };
                self.back_add_index(tri.c());
                return Some(nb);
            } else if edge.b == tri.b() && edge.a == tri.c() {
                *order = if clockwise { TriangleOrder::Abc } else { TriangleOrder::Cab };
                self.back_add_index(tri.a());
                return Some(nb);
            } else if edge.b == tri.c() && edge.a == tri.a() {
                *order = if clockwise { TriangleOrder::Bca } else { TriangleOrder::Abc };
                self.back_add_index(tri.b());
                return Some(nb);
            }
        }

        None
    }

    fn mark_triangle_taken(&mut self, i: usize) {
        self.graph.mark(i);

        if !self.heap.removed(i) {
            self.heap.erase(i);
        }

        // Every surviving neighbour just lost one option. With the
        // cache enabled it may also have become an attractive seed,
        // so it goes back on the candidate list.
        for k in 0..self.graph.node(i).arcs.len() {
            let j = self.graph.node(i).arcs[k];

            if !self.graph.marked(j) && !self.heap.removed(j) {
                let degree = self.heap.peek(j) - 1;
                self.heap.update(j, degree);

                if self.cache.is_enabled() && degree > 0 {
                    self.candidates.push(j);
                }
            }
        }
    }

    fn add_index(&mut self, i: I, not_simulation: bool) {
        if self.cache.is_enabled() {
            self.cache.push(i, !not_simulation);
        }

        if not_simulation {
            self.output
                .last_mut()
                .expect("no open primitive group")
                .indices
                .push(i);
        }
    }

    fn back_add_index(&mut self, i: I) {
        if self.cache.is_enabled() {
            self.back_cache.push(i, true);
        }
    }

    fn add_triangle_indices(&mut self, node: usize, order: TriangleOrder, not_simulation: bool) {
        let rotation = self.graph.node(node).triangle.rotation(order);
        for v in rotation {
            self.add_index(v, not_simulation);
        }
    }

    /// Sweep every triangle that never made it into a strip into one
    /// trailing Triangles group, in original triangle order.
    fn add_left_triangles(&mut self) {
        let mut group = PrimitiveGroup::new(PrimitiveType::Triangles);

        for i in 0..self.graph.len() {
            if !self.graph.marked(i) {
                let tri = self.graph.node(i).triangle;
                group.indices.push(tri.a());
                group.indices.push(tri.b());
                group.indices.push(tri.c());
            }
        }

        if !group.indices.is_empty() {
            self.output.push(group);
        }
    }
}

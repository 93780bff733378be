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

use smallvec::SmallVec;

use crate::mesh::basic_types::{Triangle, TriangleEdge, VertexIndex};

/// One graph node per input triangle. `arcs` holds the ids of every
/// triangle sharing an edge in the opposite winding; `marked` means
/// the triangle has been committed to an emitted strip.
#[derive(Debug, Clone)]
pub struct GraphNode<I: VertexIndex> {
    pub triangle: Triangle<I>,
    pub arcs: SmallVec<[usize; 3]>,
    pub marked: bool,
}

/// Adjacency graph over an independent triangle list. Node `i` always
/// corresponds to the i-th triangle of the input index buffer.
#[derive(Debug, Clone)]
pub struct ConnectivityGraph<I: VertexIndex> {
    nodes: Vec<GraphNode<I>>,
}

impl<I: VertexIndex> ConnectivityGraph<I> {
    /// Build the graph from a flat index buffer. A trailing remainder
    /// that does not fill a triangle is silently ignored.
    pub fn from_indices(indices: &[I]) -> Self {
        let tri_count = indices.len() / 3;

        let mut nodes = Vec::with_capacity(tri_count);
        for t in 0..tri_count {
            nodes.push(GraphNode {
                triangle: Triangle::new(indices[3 * t], indices[3 * t + 1], indices[3 * t + 2]),
                arcs: SmallVec::new(),
                marked: false,
            });
        }

        let mut graph = Self { nodes };
        graph.link_neighbours();
        graph
    }

    /// Link every pair of triangles sharing an edge with opposite
    /// windings, via a sorted edge table and lower-bound probes.
    fn link_neighbours(&mut self) {
        // Flat table of every forward edge, tagged with its owner.
        let mut edges: Vec<(TriangleEdge<I>, usize)> = Vec::with_capacity(self.nodes.len() * 3);
        for (t, node) in self.nodes.iter().enumerate() {
            let tri = &node.triangle;
            edges.push((TriangleEdge::new(tri.a(), tri.b()), t));
            edges.push((TriangleEdge::new(tri.b(), tri.c()), t));
            edges.push((TriangleEdge::new(tri.c(), tri.a()), t));
        }
        edges.sort_unstable();

        // Probe the table with each edge reversed. Every match is a
        // neighbour: more than one is legal in non-manifold meshes,
        // and a degenerate triangle may link to itself.
        for t in 0..self.nodes.len() {
            let tri = self.nodes[t].triangle;
            let reversed = [
                TriangleEdge::new(tri.b(), tri.a()),
                TriangleEdge::new(tri.c(), tri.b()),
                TriangleEdge::new(tri.a(), tri.c()),
            ];

            for rev in reversed {
                let first = edges.partition_point(|&(e, _)| e < rev);
                for &(e, owner) in &edges[first..] {
                    if e != rev {
                        break;
                    }
                    self.nodes[t].arcs.push(owner);
                }
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, i: usize) -> &GraphNode<I> {
        &self.nodes[i]
    }

    #[inline]
    pub fn node_mut(&mut self, i: usize) -> &mut GraphNode<I> {
        &mut self.nodes[i]
    }

    /// Number of neighbours, counting multiplicity on non-manifold
    /// edges.
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.nodes[i].arcs.len()
    }

    #[inline]
    pub fn marked(&self, i: usize) -> bool {
        self.nodes[i].marked
    }

    #[inline]
    pub fn mark(&mut self, i: usize) {
        self.nodes[i].marked = true;
    }

    pub fn unmark_all(&mut self) {
        for node in &mut self.nodes {
            node.marked = false;
        }
    }

    pub fn reset_strip_ids(&mut self) {
        for node in &mut self.nodes {
            node.triangle.reset_strip_id();
        }
    }
}

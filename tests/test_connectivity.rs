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

use tristrip::ConnectivityGraph;

type Graph = ConnectivityGraph<u32>;

/// A row of `n` triangles laid out in strip order, consistently
/// wound. Interior triangles have two neighbours, the ends one.
fn triangle_row(n: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(3 * n);
    for t in 0..n as u32 {
        if t % 2 == 0 {
            indices.extend_from_slice(&[t, t + 1, t + 2]);
        } else {
            indices.extend_from_slice(&[t + 1, t, t + 2]);
        }
    }
    indices
}

#[test]
fn empty_input_builds_an_empty_graph() {
    let graph = Graph::from_indices(&[]);
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
}

#[test]
fn trailing_remainder_is_ignored() {
    let graph = Graph::from_indices(&[0, 1, 2, 2, 1, 3, 7, 8]);
    assert_eq!(graph.len(), 2);
}

#[test]
fn opposite_winding_makes_two_triangles_neighbours() {
    // Shared edge (1, 2): the first triangle walks it as (1, 2), the
    // second as (2, 1).
    let graph = Graph::from_indices(&[0, 1, 2, 2, 1, 3]);

    assert_eq!(graph.degree(0), 1);
    assert_eq!(graph.degree(1), 1);
    assert_eq!(graph.node(0).arcs[0], 1);
    assert_eq!(graph.node(1).arcs[0], 0);
}

#[test]
fn same_winding_does_not_link() {
    // Both triangles walk the shared edge as (0, 1); a consistent
    // mesh would flip one of them.
    let graph = Graph::from_indices(&[0, 1, 2, 0, 1, 3]);

    assert_eq!(graph.degree(0), 0);
    assert_eq!(graph.degree(1), 0);
}

#[test]
fn row_degrees_match_the_layout() {
    let graph = Graph::from_indices(&triangle_row(6));
    assert_eq!(graph.len(), 6);

    assert_eq!(graph.degree(0), 1);
    assert_eq!(graph.degree(5), 1);
    for t in 1..5 {
        assert_eq!(graph.degree(t), 2);
    }
}

#[test]
fn non_manifold_edge_links_every_reversed_owner() {
    // Three triangles on edge (0, 1): the first walks it forward, the
    // other two reversed. The first sees both, the others see only
    // the first.
    let graph = Graph::from_indices(&[0, 1, 2, 1, 0, 3, 1, 0, 4]);

    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(1), 1);
    assert_eq!(graph.degree(2), 1);
    assert_eq!(graph.node(1).arcs[0], 0);
    assert_eq!(graph.node(2).arcs[0], 0);
}

#[test]
fn degenerate_triangle_links_to_itself_without_panicking() {
    let graph = Graph::from_indices(&[0, 0, 1]);

    assert_eq!(graph.len(), 1);
    assert!(graph.degree(0) > 0);
    for &arc in &graph.node(0).arcs {
        assert_eq!(arc, 0);
    }
}

#[test]
fn marks_are_per_node_and_resettable() {
    let mut graph = Graph::from_indices(&triangle_row(3));

    assert!(!graph.marked(1));
    graph.mark(1);
    assert!(graph.marked(1));
    assert!(!graph.marked(0));

    graph.unmark_all();
    assert!(!graph.marked(1));
}

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

use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

/// Vertex index types the stripifier accepts: any unsigned primitive
/// integer, so `u16` and `u32` index buffers work unconverted.
pub trait VertexIndex: PrimInt + Unsigned + Debug {}

impl<T: PrimInt + Unsigned + Debug> VertexIndex for T {}

/// Which cyclic rotation of a triangle's vertices a strip enters it
/// with. All three rotations describe the same triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleOrder {
    Abc,
    Bca,
    Cab,
}

impl TriangleOrder {
    #[inline]
    pub fn from_index(i: usize) -> Self {
        match i {
            0 => TriangleOrder::Abc,
            1 => TriangleOrder::Bca,
            2 => TriangleOrder::Cab,
            _ => panic!("TriangleOrder::from_index out of range"),
        }
    }
}

/// One input triangle. The vertex indices are fixed at graph-build
/// time; `strip_id` tags the candidate walk currently holding the
/// triangle (0 = unassigned) and is the only mutable state.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<I: VertexIndex> {
    a: I,
    b: I,
    c: I,
    strip_id: u64,
}

impl<I: VertexIndex> Triangle<I> {
    pub fn new(a: I, b: I, c: I) -> Self {
        Self { a, b, c, strip_id: 0 }
    }

    #[inline]
    pub fn a(&self) -> I {
        self.a
    }

    #[inline]
    pub fn b(&self) -> I {
        self.b
    }

    #[inline]
    pub fn c(&self) -> I {
        self.c
    }

    #[inline]
    pub fn strip_id(&self) -> u64 {
        self.strip_id
    }

    #[inline]
    pub fn set_strip_id(&mut self, id: u64) {
        self.strip_id = id;
    }

    #[inline]
    pub fn reset_strip_id(&mut self) {
        self.strip_id = 0;
    }

    /// The triangle's vertices in the given rotation.
    #[inline]
    pub fn rotation(&self, order: TriangleOrder) -> [I; 3] {
        match order {
            TriangleOrder::Abc => [self.a, self.b, self.c],
            TriangleOrder::Bca => [self.b, self.c, self.a],
            TriangleOrder::Cab => [self.c, self.a, self.b],
        }
    }

    /// The edge a strip enters the triangle across, for the given
    /// rotation.
    #[inline]
    pub fn first_edge(&self, order: TriangleOrder) -> TriangleEdge<I> {
        match order {
            TriangleOrder::Abc => TriangleEdge::new(self.a, self.b),
            TriangleOrder::Bca => TriangleEdge::new(self.b, self.c),
            TriangleOrder::Cab => TriangleEdge::new(self.c, self.a),
        }
    }

    /// The edge a strip leaves the triangle across, for the given
    /// rotation.
    #[inline]
    pub fn last_edge(&self, order: TriangleOrder) -> TriangleEdge<I> {
        match order {
            TriangleOrder::Abc => TriangleEdge::new(self.b, self.c),
            TriangleOrder::Bca => TriangleEdge::new(self.c, self.a),
            TriangleOrder::Cab => TriangleEdge::new(self.a, self.b),
        }
    }
}

/// A directed edge. Equality is order-sensitive: `(a, b)` and
/// `(b, a)` are the two windings of the same undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TriangleEdge<I: VertexIndex> {
    pub a: I,
    pub b: I,
}

impl<I: VertexIndex> TriangleEdge<I> {
    #[inline]
    pub fn new(a: I, b: I) -> Self {
        Self { a, b }
    }
}

/// A candidate or committed strip: the triangle it starts on, the
/// rotation of that first triangle, and its length in triangles.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    pub start: usize,
    pub order: TriangleOrder,
    pub size: usize,
}

impl Strip {
    pub fn new(start: usize, order: TriangleOrder, size: usize) -> Self {
        Self { start, order, size }
    }
}

impl Default for Strip {
    fn default() -> Self {
        Self::new(0, TriangleOrder::Abc, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// Independent triangles, three indices each.
    Triangles,
    /// A triangle strip: `n + 2` indices encode `n` triangles.
    TriangleStrip,
}

/// One output batch: either a strip or the trailing group of
/// triangles that could not be stripped.
#[derive(Debug, Clone)]
pub struct PrimitiveGroup<I: VertexIndex> {
    pub kind: PrimitiveType,
    pub indices: Vec<I>,
}

impl<I: VertexIndex> PrimitiveGroup<I> {
    pub(crate) fn new(kind: PrimitiveType) -> Self {
        Self { kind, indices: Vec::new() }
    }

    /// Number of triangles the group encodes.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match self.kind {
            PrimitiveType::Triangles => self.indices.len() / 3,
            PrimitiveType::TriangleStrip => self.indices.len().saturating_sub(2),
        }
    }

    /// Expand the group back into individual triangles. Strip
    /// triangles keep the winding of the source mesh: every odd
    /// window swaps its first two indices.
    pub fn triangles(&self) -> impl Iterator<Item = [I; 3]> + '_ {
        let strip = self.kind == PrimitiveType::TriangleStrip;
        (0..self.triangle_count()).map(move |t| {
            if strip {
                let (i0, i1) = if t % 2 == 0 { (t, t + 1) } else { (t + 1, t) };
                [self.indices[i0], self.indices[i1], self.indices[t + 2]]
            } else {
                [self.indices[3 * t], self.indices[3 * t + 1], self.indices[3 * t + 2]]
            }
        })
    }
}

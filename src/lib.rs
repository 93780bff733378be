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

//! Post-T&L cache aware triangle stripifier.
//!
//! Converts an indexed triangle list into triangle strips, scoring
//! candidate strips against a simulated GPU post-transform vertex
//! cache so the emitted strips re-reference recently used vertices.
//!
//! ```
//! use tristrip::{PrimitiveType, Stripifier};
//!
//! // two triangles sharing the edge (1, 2)
//! let indices: [u32; 6] = [0, 1, 2, 2, 1, 3];
//! let mut stripifier = Stripifier::new(&indices);
//! let groups = stripifier.strip();
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].kind, PrimitiveType::TriangleStrip);
//! assert_eq!(groups[0].indices.len(), 4);
//! ```

pub mod containers;
pub mod mesh;
pub mod stripify;

pub use mesh::basic_types::{
    PrimitiveGroup, PrimitiveType, Strip, Triangle, TriangleEdge, TriangleOrder, VertexIndex,
};
pub use mesh::connectivity::ConnectivityGraph;
pub use stripify::stripifier::Stripifier;

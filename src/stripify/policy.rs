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

use crate::mesh::basic_types::Strip;

/// Selects the winning candidate strip for one seed round.
///
/// With the cache simulator disabled the longest strip wins. With it
/// enabled: strictly more simulated cache hits, then a strictly
/// lonelier start triangle, then strictly greater length. Candidates
/// below the minimum strip size never compete.
#[derive(Debug)]
pub struct StripPolicy {
    best: Strip,
    degree: usize,
    cache_hits: usize,
    min_strip_size: usize,
    cache: bool,
}

impl StripPolicy {
    pub fn new(min_strip_size: usize, cache: bool) -> Self {
        Self {
            best: Strip::default(),
            degree: 0,
            cache_hits: 0,
            min_strip_size,
            cache,
        }
    }

    pub fn challenge(&mut self, strip: Strip, degree: usize, cache_hits: usize) {
        if strip.size < self.min_strip_size {
            return;
        }

        if !self.cache {
            // Cache simulator disabled: length is all there is.
            if strip.size > self.best.size {
                self.best = strip;
            }
        } else if cache_hits > self.cache_hits {
            self.best = strip;
            self.degree = degree;
            self.cache_hits = cache_hits;
        } else if cache_hits == self.cache_hits {
            // Lonelier start triangles run out of chances first, so
            // resolve them while a strip still reaches them.
            if self.best.size != 0 && degree < self.degree {
                self.best = strip;
                self.degree = degree;
            } else if strip.size > self.best.size {
                self.best = strip;
                self.degree = degree;
            }
        }
    }

    pub fn best_strip(&self) -> Strip {
        self.best
    }
}

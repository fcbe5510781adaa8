// Copyright 2024 frontier-stpath contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
//! Frontier table precomputation (§4.1).
//!
//! For each `i` in `0..=m`, `F[i]` is the set of vertices incident to at
//! least one processed edge (`e_1..e_i`) and at least one unprocessed edge
//! (`e_{i+1}..e_m`). A vertex enters the frontier at the edge that first
//! touches it and leaves immediately after the edge that last touches it.

use crate::common::{EdgeIndex, Graph, Vertex};

/// `F[0..=m]`, indexed by level.
#[derive(Debug, Clone)]
pub struct FrontierTable {
    by_level: Vec<Vec<Vertex>>,
}

impl FrontierTable {
    /// Precomputes the frontier at every level from the graph's edge list.
    ///
    /// Each vertex's last-touching edge is found in a single O(n+m) pass up
    /// front, so the per-edge frontier update below only has to check
    /// whether `i` equals that precomputed index, rather than rescanning
    /// the remaining edge list per candidate removal.
    pub fn compute(graph: &Graph) -> Self {
        let m = graph.nb_edges();
        let mut last_touch = vec![0usize; graph.nb_vertices() + 1];
        for (idx, edge) in graph.edges().iter().enumerate() {
            let i = idx + 1;
            last_touch[edge.src.id()] = i;
            last_touch[edge.dest.id()] = i;
        }

        let mut by_level = Vec::with_capacity(m + 1);
        let mut current: Vec<Vertex> = Vec::new();
        by_level.push(current.clone());

        for idx in 0..m {
            let i = idx + 1;
            let edge = graph.edge(EdgeIndex(i));
            for v in edge.endpoints() {
                if !current.contains(&v) {
                    current.push(v);
                }
            }
            current.retain(|v| last_touch[v.id()] != i);
            by_level.push(current.clone());
        }

        FrontierTable { by_level }
    }

    /// `F[i]` for `i` in `0..=m`.
    pub fn at(&self, i: usize) -> &[Vertex] {
        &self.by_level[i]
    }
}

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
//! Adjacency-list parsing (§4.7, ambient).
//!
//! Line `u` (1-based) lists the neighbours of vertex `u`, whitespace
//! separated. Since the graph is undirected, an edge is typically listed
//! from both of its endpoints' lines; the second listing is silently
//! dropped (P7), and a vertex listing itself is a self-loop that is
//! likewise silently skipped rather than contributing an edge (P8), since
//! `Edge` cannot represent one. The vertex count is the larger of the
//! number of lines and the largest vertex id mentioned, so a trailing
//! isolated vertex with an empty line is still counted.

use std::collections::HashSet;
use std::io::BufRead;

use crate::common::{Edge, Graph, Vertex};
use crate::error::{Error, MAX_EDGES};

pub fn parse_adjacency_list<R: BufRead>(reader: R) -> Result<Graph, Error> {
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    let mut max_vertex = 0usize;
    let mut line_count = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let u = idx + 1;
        line_count = u;
        max_vertex = max_vertex.max(u);

        for token in line.split_whitespace() {
            let v: usize = token
                .parse()
                .map_err(|_| Error::Format(format!("not a vertex id: {:?}", token)))?;
            if v == 0 {
                return Err(Error::Format("vertex ids are 1-based, found 0".into()));
            }
            max_vertex = max_vertex.max(v);
            if v == u {
                // self-loop: not representable as an Edge, contributes nothing (P8).
                continue;
            }

            let pair = if u < v { (u, v) } else { (v, u) };
            if seen.insert(pair) {
                edges.push(Edge::canonical(Vertex(u), Vertex(v)));
                if edges.len() > MAX_EDGES {
                    return Err(Error::TooManyEdges { found: edges.len(), max: MAX_EDGES });
                }
            }
        }
    }

    let nb_vertices = max_vertex.max(line_count);
    Ok(Graph::new(nb_vertices, edges))
}

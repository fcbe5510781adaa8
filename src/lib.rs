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
//! # frontier-stpath
//! `frontier-stpath` builds a zero-suppressed decision diagram (ZDD) that
//! enumerates every simple path between two fixed vertices `s` and `t` of an
//! undirected graph, using the frontier method: a level-by-level BFS over
//! the graph's edges that only ever tracks the handful of vertices straddling
//! the processed/unprocessed cut, rather than exploring paths one at a time.
//!
//! ## Quick example
//! ```
//! use frontier_stpath::{construct, count_solutions, Edge, FrontierTable, Graph, Vertex};
//!
//! // a 4-cycle: s = 1, t = 4. Two simple paths connect them: the direct
//! // edge, and the three-edge detour through 2 and 3.
//! let graph = Graph::new(4, vec![
//!     Edge::canonical(Vertex(1), Vertex(2)),
//!     Edge::canonical(Vertex(2), Vertex(3)),
//!     Edge::canonical(Vertex(3), Vertex(4)),
//!     Edge::canonical(Vertex(1), Vertex(4)),
//! ]);
//!
//! let frontier = FrontierTable::compute(&graph);
//! let diagram = construct(&graph, &frontier);
//! assert_eq!(count_solutions(&diagram).unwrap(), 2);
//! ```
//!
//! ## Module map
//! - [`common`]: the graph, vertex, edge and branch types shared by every
//!   other module.
//! - [`frontier`]: precomputes `F[0..=m]`, the frontier at each level.
//! - [`node`]: ZDD node identity and the sparse per-node frontier state.
//! - [`update`]: `UpdateInfo`, the per-edge state transition.
//! - [`oracle`]: `CheckTerminal`, the five-rule decision procedure.
//! - [`equivalence`]: the canonical frontier key and merge pool behind
//!   node deduplication.
//! - [`diagram`]: the construction driver tying the above together.
//! - [`count`]: backward-DP solution counting.
//! - [`parse`] / [`write`]: the adjacency-list reader and diagram writer
//!   used by the `frontier-stpath` binary.
//! - [`error`]: the recoverable error type for the parsing/writing/CLI
//!   boundary.

mod common;
mod count;
mod diagram;
mod equivalence;
mod error;
mod frontier;
mod node;
mod oracle;
mod parse;
mod update;
mod write;

pub use common::{Branch, Edge, EdgeIndex, Graph, Vertex};
pub use count::count_solutions;
pub use diagram::{construct, Diagram};
pub use equivalence::{FrontierKey, MergePool};
pub use error::{Error, MAX_EDGES};
pub use frontier::FrontierTable;
pub use node::{FrontierEntry, FrontierState, NodeId};
pub use oracle::{check_terminal, Outcome};
pub use parse::parse_adjacency_list;
pub use update::update_info;
pub use write::write_diagram;

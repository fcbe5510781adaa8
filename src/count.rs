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
//! Solution counting (§4.8, ambient): the number of distinct root-to-1-terminal
//! paths through the diagram, i.e. the number of s-t simple paths in the
//! source graph.

use crate::diagram::Diagram;
use crate::error::Error;
use crate::node::NodeId;

/// Counts the diagram's solutions with a single backward pass.
///
/// Internal nodes are visited in reverse creation order, which is always a
/// valid bottom-up order: a node's children are only ever created strictly
/// after the node itself (the driver only refers forward), so by the time a
/// node is visited both of its children's counts are already known. Overflow
/// is checked rather than silently wrapping or saturating, since a silently
/// wrong count would be worse than a clean failure (§9).
pub fn count_solutions(diagram: &Diagram) -> Result<i64, Error> {
    if diagram.root().is_terminal() {
        return Ok(terminal_count(diagram.root()));
    }

    let n = diagram.node_count();
    let mut counts = vec![0i64; n];

    for idx in (0..n).rev() {
        let id = NodeId(NodeId::FIRST_INTERNAL + idx);
        let (zero, one) = diagram.children(id);
        let zero_count = count_of(zero, &counts);
        let one_count = count_of(one, &counts);
        counts[idx] = zero_count.checked_add(one_count).ok_or(Error::Overflow)?;
    }

    Ok(counts[diagram.root().value() - NodeId::FIRST_INTERNAL])
}

fn terminal_count(id: NodeId) -> i64 {
    if id == NodeId::ONE {
        1
    } else {
        0
    }
}

fn count_of(id: NodeId, counts: &[i64]) -> i64 {
    if id.is_terminal() {
        terminal_count(id)
    } else {
        counts[id.value() - NodeId::FIRST_INTERNAL]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Edge, Graph, Vertex};
    use crate::diagram::construct;
    use crate::frontier::FrontierTable;

    fn edge(a: usize, b: usize) -> Edge {
        Edge::canonical(Vertex(a), Vertex(b))
    }

    #[test]
    fn single_edge_graph_has_exactly_one_solution() {
        let g = Graph::new(2, vec![edge(1, 2)]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);
        assert_eq!(count_solutions(&d).unwrap(), 1);
    }

    #[test]
    fn isolated_source_equal_to_target_has_exactly_one_solution() {
        let g = Graph::new(1, vec![]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);
        assert_eq!(count_solutions(&d).unwrap(), 1);
    }

    #[test]
    fn disconnected_graph_has_no_solutions() {
        let g = Graph::new(2, vec![]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);
        assert_eq!(count_solutions(&d).unwrap(), 0);
    }

    #[test]
    fn four_cycle_has_exactly_two_solutions() {
        let g = Graph::new(4, vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(1, 4)]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);
        assert_eq!(count_solutions(&d).unwrap(), 2);
    }

    #[test]
    fn triangle_graph_has_exactly_two_solutions() {
        // s = 1, t = 3: paths 1-3 and 1-2-3.
        let g = Graph::new(3, vec![edge(1, 2), edge(1, 3), edge(2, 3)]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);
        assert_eq!(count_solutions(&d).unwrap(), 2);
    }
}

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
//! The construction driver (§4.2): level-by-level expansion of the frontier
//! ZDD, tying together the frontier table, the oracle, and the merge pool.

use crate::common::{Branch, EdgeIndex, Graph};
use crate::equivalence::{FrontierKey, MergePool};
use crate::frontier::FrontierTable;
use crate::node::{FrontierState, NodeId, NodeRecord};
use crate::oracle::{check_terminal, Outcome};

/// The fully constructed ZDD: an arena of internal nodes plus a root id.
/// Terminal ids (`NodeId::ZERO`, `NodeId::ONE`) are never stored in the
/// arena; they are recognised by [`NodeId::is_terminal`].
#[derive(Debug)]
pub struct Diagram {
    m: usize,
    records: Vec<NodeRecord>,
    root: NodeId,
}

impl Diagram {
    /// The number of edges in the source graph, i.e. the deepest level.
    pub fn m(&self) -> usize {
        self.m
    }

    /// The diagram's single root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The number of internal (non-terminal) nodes in the diagram.
    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    /// The diagram's total node count, internal nodes plus the two terminal
    /// sentinels, matching the reference design's `GetNumberOfNodes()`
    /// (§6 "Output to standard error" reports this total, not just the
    /// internal-node count).
    pub fn total_node_count(&self) -> usize {
        self.node_count() + 2
    }

    fn record(&self, id: NodeId) -> &NodeRecord {
        &self.records[id.value() - NodeId::FIRST_INTERNAL]
    }

    /// `(zero_child, one_child)` of an internal node.
    ///
    /// # Panics
    /// Panics if `id` is a terminal; terminals have no children.
    pub fn children(&self, id: NodeId) -> (NodeId, NodeId) {
        let r = self.record(id);
        (r.zero_child, r.one_child)
    }

    /// The level at which `id` makes its next decision.
    pub fn level_of(&self, id: NodeId) -> usize {
        self.record(id).level
    }

    /// All internal node ids at decision level `i`, in creation order.
    pub fn nodes_at_level(&self, i: usize) -> impl Iterator<Item = NodeId> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.level == i)
            .map(|(idx, _)| NodeId(idx + NodeId::FIRST_INTERNAL))
    }
}

/// Builds the complete frontier ZDD for `graph`'s s-t simple paths.
///
/// Processes edges `e_1..e_m` in order. At each level the candidates spawned
/// by the previous level's nodes are classified by [`check_terminal`]; those
/// that are neither terminal are looked up in a per-level [`MergePool`]
/// keyed by [`FrontierKey`] so that equivalent candidates collapse onto the
/// same node (§4.6), with the first candidate to reach a given key keeping
/// its assigned id for the rest of construction.
pub fn construct(graph: &Graph, frontier: &FrontierTable) -> Diagram {
    let m = graph.nb_edges();
    let s = graph.source();
    let t = graph.target();

    if m == 0 {
        // No edges to choose from: s and t are connected by the empty path
        // iff they are the same vertex.
        let root = if s == t { NodeId::ONE } else { NodeId::ZERO };
        return Diagram { m: 0, records: Vec::new(), root };
    }

    let root = NodeId(NodeId::FIRST_INTERNAL);
    let mut records = vec![NodeRecord {
        state: FrontierState::default(),
        level: 1,
        zero_child: NodeId::ZERO,
        one_child: NodeId::ZERO,
    }];
    let mut current: Vec<(NodeId, FrontierState)> = vec![(root, FrontierState::default())];

    for i in 1..=m {
        let edge = graph.edge(EdgeIndex(i));
        let mut pool = MergePool::new();
        let mut next: Vec<(NodeId, FrontierState)> = Vec::new();

        for (parent_id, parent_state) in &current {
            let mut children = [NodeId::ZERO, NodeId::ZERO];
            for (slot, branch) in Branch::ALL.into_iter().enumerate() {
                let outcome = check_terminal(parent_state, edge, i, branch, frontier, s, t, m);
                children[slot] = match outcome {
                    Outcome::Zero => NodeId::ZERO,
                    Outcome::One => NodeId::ONE,
                    Outcome::Internal(candidate) => {
                        let key = FrontierKey::new(&candidate, frontier.at(i));
                        if let Some(existing) = pool.find(&key) {
                            existing
                        } else {
                            let id = NodeId(NodeId::FIRST_INTERNAL + records.len());
                            records.push(NodeRecord {
                                state: candidate.clone(),
                                level: i + 1,
                                zero_child: NodeId::ZERO,
                                one_child: NodeId::ZERO,
                            });
                            pool.insert(key, id);
                            next.push((id, candidate));
                            id
                        }
                    }
                };
            }

            let idx = parent_id.value() - NodeId::FIRST_INTERNAL;
            records[idx].zero_child = children[0];
            records[idx].one_child = children[1];
        }

        current = next;
    }

    Diagram { m, records, root }
}

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
//! State update (UpdateInfo, §4.4).

use crate::common::{Branch, Edge};
use crate::frontier::FrontierTable;
use crate::node::{entry_or_fresh, FrontierEntry, FrontierState};

/// Applies `branch` for edge `e_i` to `state` in place.
///
/// Newly-entering vertices (those not in `F[i-1]`) are seeded fresh first
/// (invariant I4). On `Branch::One`, both endpoints' degree is incremented
/// and their components are unified, with the smaller label absorbing the
/// larger one across `F[i]` (not `F[i-1]`), so the endpoints themselves are
/// always updated and vertices already retired are left untouched. On
/// `Branch::Zero` this second step is skipped entirely — the edge is simply
/// refused, which is why UpdateInfo is idempotent there (P6).
pub fn update_info(state: &mut FrontierState, edge: Edge, level: usize, branch: Branch, frontier: &FrontierTable) {
    let f_prev = frontier.at(level - 1);
    for v in edge.endpoints() {
        if !f_prev.contains(&v) {
            state.insert(v, FrontierEntry::fresh(v));
        } else {
            state.entry(v).or_insert_with(|| FrontierEntry::fresh(v));
        }
    }

    if branch != Branch::One {
        return;
    }

    state.get_mut(&edge.src).expect("src seeded above").deg += 1;
    state.get_mut(&edge.dest).expect("dest seeded above").deg += 1;

    let comp_src = entry_or_fresh(state, edge.src).comp;
    let comp_dest = entry_or_fresh(state, edge.dest).comp;
    let c_min = comp_src.min(comp_dest);
    let c_max = comp_src.max(comp_dest);
    if c_min == c_max {
        return;
    }

    for &v in frontier.at(level) {
        if let Some(e) = state.get_mut(&v) {
            if e.comp == c_max {
                e.comp = c_min;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Edge, Graph, Vertex};

    fn edge(a: usize, b: usize) -> Edge {
        Edge::canonical(Vertex(a), Vertex(b))
    }

    #[test]
    fn zero_branch_only_seeds_new_vertices() {
        let g = Graph::new(3, vec![edge(1, 2), edge(2, 3)]);
        let frontier = FrontierTable::compute(&g);
        let mut state = FrontierState::default();
        state.insert(Vertex(2), FrontierEntry { deg: 1, comp: Vertex(9) });

        update_info(&mut state, g.edge(crate::common::EdgeIndex(2)), 2, Branch::Zero, &frontier);

        // the pre-existing entry for vertex 2 is untouched (P6).
        assert_eq!(state[&Vertex(2)], FrontierEntry { deg: 1, comp: Vertex(9) });
        // vertex 3 is new to the frontier and gets a fresh entry.
        assert_eq!(state[&Vertex(3)], FrontierEntry::fresh(Vertex(3)));
    }

    #[test]
    fn one_branch_unifies_components() {
        let g = Graph::new(3, vec![edge(1, 2), edge(1, 3)]);
        let frontier = FrontierTable::compute(&g);
        let mut state = FrontierState::default();

        update_info(&mut state, g.edge(crate::common::EdgeIndex(1)), 1, Branch::One, &frontier);
        assert_eq!(state[&Vertex(1)].deg, 1);
        assert_eq!(state[&Vertex(2)].deg, 1);
        assert_eq!(state[&Vertex(1)].comp, state[&Vertex(2)].comp);
    }
}

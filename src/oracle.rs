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
//! Decision oracle (CheckTerminal, §4.3).

use crate::common::{Branch, Edge, Vertex};
use crate::frontier::FrontierTable;
use crate::node::{entry_or_fresh, FrontierState};
use crate::update::update_info;

/// The oracle's verdict for a (node, edge, branch) triple.
pub enum Outcome {
    /// Every completion of this prefix is doomed; wire the 0-terminal.
    Zero,
    /// This was the last edge and the prefix is a complete s-t simple path.
    One,
    /// Neither terminal applies; `state` is the child's candidate
    /// frontier-restricted state, ready to be merged or appended at level
    /// `i+1`.
    Internal(FrontierState),
}

/// Classifies `(parent_state, edge, branch)` per the five rules in §4.3,
/// evaluated in order. The candidate post-state is computed once (by
/// cloning `parent_state` and applying [`update_info`]) and reused by every
/// rule that needs it, rather than re-deriving it per rule.
#[allow(clippy::too_many_arguments)]
pub fn check_terminal(
    parent_state: &FrontierState,
    edge: Edge,
    level: usize,
    branch: Branch,
    frontier: &FrontierTable,
    s: Vertex,
    t: Vertex,
    last_level: usize,
) -> Outcome {
    // Rule 1: closing a cycle is only possible by choosing the edge.
    if branch == Branch::One {
        let comp_src = entry_or_fresh(parent_state, edge.src).comp;
        let comp_dest = entry_or_fresh(parent_state, edge.dest).comp;
        if comp_src == comp_dest {
            return Outcome::Zero;
        }
    }

    let mut candidate = parent_state.clone();
    update_info(&mut candidate, edge, level, branch, frontier);

    // Rule 3: degree upper bound.
    for v in edge.endpoints() {
        let deg = candidate[&v].deg;
        let cap = if v == s || v == t { 1 } else { 2 };
        if deg > cap {
            return Outcome::Zero;
        }
    }

    // Rule 4: retirement check, for endpoints leaving the frontier after
    // this edge.
    let f_i = frontier.at(level);
    for v in edge.endpoints() {
        if f_i.contains(&v) {
            continue;
        }
        let deg = candidate[&v].deg;
        let ok = if v == s || v == t {
            deg == 1
        } else {
            deg == 0 || deg == 2
        };
        if !ok {
            return Outcome::Zero;
        }
    }

    // Rule 5: termination.
    if level == last_level {
        return Outcome::One;
    }

    Outcome::Internal(candidate)
}

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
//! ZDD node identity and per-node frontier state (§3).

use fxhash::FxHashMap;

use crate::common::Vertex;

/// The identifier of a node. `0` and `1` are the terminal sentinels; internal
/// node ids start at `2` and are assigned monotonically in creation order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The 0-terminal: every root-to-here path is an inadmissible prefix.
    pub const ZERO: NodeId = NodeId(0);
    /// The 1-terminal: every root-to-here path is a complete s-t simple path.
    pub const ONE: NodeId = NodeId(1);

    pub(crate) const FIRST_INTERNAL: usize = 2;

    /// The raw numeric id, as printed in the diagram's textual output.
    pub fn value(self) -> usize {
        self.0
    }

    /// Whether this id names one of the two terminal sentinels.
    pub fn is_terminal(self) -> bool {
        self.0 < Self::FIRST_INTERNAL
    }
}

/// `deg[v]` and `comp[v]` for a single frontier vertex (§3).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct FrontierEntry {
    pub deg: u8,
    pub comp: Vertex,
}

impl FrontierEntry {
    /// The "fresh" entry a vertex gets the instant it enters the frontier
    /// (invariant I4): no chosen edges yet, its own singleton component.
    pub fn fresh(v: Vertex) -> Self {
        FrontierEntry { deg: 0, comp: v }
    }
}

/// The sparse (deg, comp) state of a node, keyed by vertex. Only vertices
/// that are currently on, or entering, the frontier ever have an entry; this
/// is the frontier-restricted record described in §9, realised with a hash
/// map instead of full length-`n` arrays or a separate index table, since
/// frontier widths are small and Rust's hash map already gives us O(1)
/// amortised access without manual bookkeeping.
pub type FrontierState = FxHashMap<Vertex, FrontierEntry>;

/// Looks up `v`'s entry, treating an absent vertex as freshly entering the
/// frontier (invariant I4).
pub fn entry_or_fresh(state: &FrontierState, v: Vertex) -> FrontierEntry {
    state.get(&v).copied().unwrap_or_else(|| FrontierEntry::fresh(v))
}

/// A fully expanded internal node: its frontier state, the level at which it
/// makes its next decision, and its two children. The children start out as
/// placeholders and are filled in by the driver once both branches of this
/// node have been classified.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub state: FrontierState,
    pub level: usize,
    pub zero_child: NodeId,
    pub one_child: NodeId,
}

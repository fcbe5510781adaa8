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
//! Equivalence test and merge lookup (IsEquivalent / Find, §4.6).
//!
//! Two level-`(i+1)` candidates are equivalent iff they agree on `(deg,
//! comp)` for every vertex in `F[i]`; off-frontier coordinates cannot
//! influence any future decision and are ignored. The reference design
//! performs `Find` as a linear scan of the level's node list; this crate
//! instead keys an `FxHashMap` by the canonicalised frontier slice (the
//! optimisation noted in §9), which preserves the externally visible
//! "oldest match wins" identity-assignment rule because a lookup that hits
//! never replaces the stored id.

use fxhash::FxHashMap;

use crate::common::Vertex;
use crate::node::{FrontierState, NodeId};

/// A canonical, hashable snapshot of a candidate's `(deg, comp)` pairs
/// restricted to a frontier, sorted by vertex id so that two equivalent
/// states always produce the same key regardless of hash map iteration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrontierKey(Vec<(Vertex, u8, Vertex)>);

impl FrontierKey {
    pub fn new(state: &FrontierState, frontier: &[Vertex]) -> Self {
        let mut key: Vec<_> = frontier
            .iter()
            .map(|&v| {
                let entry = state.get(&v).copied().unwrap_or_else(|| crate::node::FrontierEntry::fresh(v));
                (v, entry.deg, entry.comp)
            })
            .collect();
        key.sort_unstable_by_key(|&(v, _, _)| v);
        FrontierKey(key)
    }
}

/// The set of distinct nodes created so far at one level, indexed by their
/// canonical frontier key for O(1) amortised merge lookup.
#[derive(Debug, Default)]
pub struct MergePool {
    by_key: FxHashMap<FrontierKey, NodeId>,
}

impl MergePool {
    pub fn new() -> Self {
        MergePool::default()
    }

    /// Returns the existing node equivalent to `key`, if any.
    pub fn find(&self, key: &FrontierKey) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    /// Registers a freshly created node under `key`. Must only be called
    /// once [`MergePool::find`] has confirmed no equivalent node exists.
    pub fn insert(&mut self, key: FrontierKey, id: NodeId) {
        self.by_key.insert(key, id);
    }
}

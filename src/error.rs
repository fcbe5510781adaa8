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
//! Error model for the ambient (parsing, serialisation, CLI) layers (§4.11).
//!
//! The core construction (`frontier`, `node`, `update`, `oracle`,
//! `equivalence`, `diagram`) has no recoverable error path: every input it
//! receives is already a validated [`crate::common::Graph`], so it can only
//! ever succeed. Recoverable failure is confined to the boundary that turns
//! untrusted bytes into that `Graph` and back.

use std::io;

use thiserror::Error;

/// Hard cap on the number of edges a single adjacency list may declare
/// (§4.7, P9). Chosen generously above any graph this crate is meant to
/// enumerate paths for; its purpose is to fail fast on malformed input
/// rather than build an oversized frontier table.
pub const MAX_EDGES: usize = 1024;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed input: {0}")]
    Format(String),

    #[error("input declares {found} edges, exceeding the cap of {max}")]
    TooManyEdges { found: usize, max: usize },

    #[error("solution count overflowed i64")]
    Overflow,
}

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
//! Diagram serialisation (§4.9, ambient): the CRLF-framed textual format.
//!
//! ```text
//! #1\r\n
//! 2:0,3\r\n
//! #2\r\n
//! 3:1,0\r\n
//! ```
//! One `#<level>` header per level `1..=m`, followed by one `<id>:<zero
//! child>,<one child>` line per node at that level, in creation order. A
//! graph with no edges produces no output at all: the loop over `1..=m`
//! simply does not execute.

use std::io::{self, Write};

use crate::diagram::Diagram;

pub fn write_diagram<W: Write>(diagram: &Diagram, mut out: W) -> io::Result<()> {
    for level in 1..=diagram.m() {
        write!(out, "#{}\r\n", level)?;
        for id in diagram.nodes_at_level(level) {
            let (zero, one) = diagram.children(id);
            write!(out, "{}:{},{}\r\n", id.value(), zero.value(), one.value())?;
        }
    }
    Ok(())
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
    fn single_edge_graph_writes_one_level_with_one_node() {
        let g = Graph::new(2, vec![edge(1, 2)]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);

        let mut buf = Vec::new();
        write_diagram(&d, &mut buf).unwrap();

        assert_eq!(buf, b"#1\r\n2:0,1\r\n");
    }

    #[test]
    fn edgeless_graph_writes_nothing() {
        let g = Graph::new(1, vec![]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);

        let mut buf = Vec::new();
        write_diagram(&d, &mut buf).unwrap();

        assert!(buf.is_empty());
    }

    #[test]
    fn every_line_is_crlf_terminated() {
        let g = Graph::new(4, vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(1, 4)]);
        let frontier = FrontierTable::compute(&g);
        let d = construct(&g, &frontier);

        let mut buf = Vec::new();
        write_diagram(&d, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.lines().all(|_| true));
        for raw_line in text.split("\r\n") {
            assert!(!raw_line.contains('\n'));
        }
        assert!(text.ends_with("\r\n") || text.is_empty());
    }
}

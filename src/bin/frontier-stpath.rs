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
//! Reads an adjacency list from a file (or stdin), builds the frontier ZDD
//! for its s-t simple paths, writes the diagram to stdout and a short
//! summary to stderr.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use frontier_stpath::{construct, count_solutions, parse_adjacency_list, write_diagram, Error, FrontierTable};

/// Builds a ZDD enumerating the s-t simple paths of an undirected graph
/// given as an adjacency list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the adjacency list. Reads stdin if omitted.
    input: Option<PathBuf>,
}

/// Distinct exit code for an edge-count-cap violation (§6), so a caller can
/// tell "your instance is too big" apart from any other failure.
const EDGE_CAP_EXIT_CODE: u8 = 2;
const ERROR_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::TooManyEdges { found, max }) => {
            eprintln!("error: {} edges exceeds the cap of {}", found, max);
            ExitCode::from(EDGE_CAP_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let graph = match args.input {
        Some(path) => parse_adjacency_list(BufReader::new(File::open(path)?))?,
        None => parse_adjacency_list(io::stdin().lock())?,
    };

    let frontier = FrontierTable::compute(&graph);
    let diagram = construct(&graph, &frontier);
    let solutions = count_solutions(&diagram)?;

    let stdout = io::stdout();
    write_diagram(&diagram, stdout.lock())?;
    io::stdout().flush()?;

    eprintln!("vertices={} edges={}", graph.nb_vertices(), graph.nb_edges());
    eprintln!("nodes={} solutions={}", diagram.total_node_count(), solutions);

    Ok(())
}

//! End-to-end scenarios exercising the full pipeline: parse, frontier,
//! construct, count, write.

use std::collections::HashSet;

use frontier_stpath::{construct, count_solutions, parse_adjacency_list, write_diagram, Edge, FrontierTable, Graph, Vertex};

fn edge(a: usize, b: usize) -> Edge {
    Edge::canonical(Vertex(a), Vertex(b))
}

/// Exhaustively counts s-t simple paths by DFS, for cross-checking the
/// frontier construction on graphs small enough to brute force.
fn brute_force_count(graph: &Graph) -> i64 {
    let s = graph.source();
    let t = graph.target();
    let mut adjacency = vec![Vec::new(); graph.nb_vertices() + 1];
    for e in graph.edges() {
        adjacency[e.src.id()].push(e.dest);
        adjacency[e.dest.id()].push(e.src);
    }

    fn dfs(v: Vertex, t: Vertex, visited: &mut HashSet<Vertex>, adjacency: &[Vec<Vertex>]) -> i64 {
        if v == t {
            return 1;
        }
        let mut total = 0;
        for &next in &adjacency[v.id()] {
            if visited.insert(next) {
                total += dfs(next, t, visited, adjacency);
                visited.remove(&next);
            }
        }
        total
    }

    let mut visited = HashSet::new();
    visited.insert(s);
    if s == t {
        return 1;
    }
    dfs(s, t, &mut visited, &adjacency)
}

fn solutions_for(graph: &Graph) -> i64 {
    let frontier = FrontierTable::compute(graph);
    let diagram = construct(graph, &frontier);
    count_solutions(&diagram).unwrap()
}

#[test]
fn s1_single_edge_has_one_path() {
    let g = Graph::new(2, vec![edge(1, 2)]);
    assert_eq!(solutions_for(&g), 1);
}

#[test]
fn s2_disconnected_graph_has_no_path() {
    let g = Graph::new(4, vec![edge(1, 2), edge(3, 4)]);
    assert_eq!(solutions_for(&g), 0);
}

#[test]
fn s3_triangle_has_two_paths() {
    let g = Graph::new(3, vec![edge(1, 2), edge(1, 3), edge(2, 3)]);
    assert_eq!(solutions_for(&g), 2);
}

#[test]
fn s4_four_cycle_has_two_paths() {
    let g = Graph::new(4, vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(1, 4)]);
    assert_eq!(solutions_for(&g), 2);
}

#[test]
fn s5_petersen_like_graph_matches_brute_force() {
    // a 3x3 grid graph, s = vertex 1 (corner), t = vertex 9 (opposite corner).
    // vertices numbered row-major: 1 2 3 / 4 5 6 / 7 8 9.
    let g = Graph::new(
        9,
        vec![
            edge(1, 2), edge(2, 3),
            edge(4, 5), edge(5, 6),
            edge(7, 8), edge(8, 9),
            edge(1, 4), edge(4, 7),
            edge(2, 5), edge(5, 8),
            edge(3, 6), edge(6, 9),
        ],
    );
    assert_eq!(solutions_for(&g), brute_force_count(&g));
}

#[test]
fn s6_isolated_source_equal_to_target_has_one_path() {
    let g = Graph::new(1, vec![]);
    assert_eq!(solutions_for(&g), 1);
}

#[test]
fn p1_small_random_like_graphs_match_brute_force() {
    let graphs = vec![
        Graph::new(5, vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(4, 5), edge(1, 3), edge(2, 5)]),
        Graph::new(6, vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(4, 5), edge(5, 6), edge(1, 6), edge(2, 5)]),
        Graph::new(4, vec![edge(1, 2), edge(2, 3), edge(3, 4)]),
    ];
    for g in &graphs {
        assert_eq!(solutions_for(g), brute_force_count(g));
    }
}

#[test]
fn p10_writer_output_round_trips_through_expected_bytes() {
    let g = Graph::new(2, vec![edge(1, 2)]);
    let frontier = FrontierTable::compute(&g);
    let diagram = construct(&g, &frontier);

    let mut buf = Vec::new();
    write_diagram(&diagram, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with("#1\r\n"));
    assert!(text.ends_with("\r\n"));
    assert!(!text.contains("\n\n"));
}

#[test]
fn p7_p8_p9_parser_canonicalises_dedupes_and_enforces_the_cap() {
    // vertex 1 lists 2 and 3; vertex 2 independently lists 3 again. The
    // (2, 3) pair should only be counted once, keeping the first encounter.
    let g = parse_adjacency_list("2 3\n3\n".as_bytes()).unwrap();
    assert_eq!(g.nb_edges(), 3);

    let self_loop = parse_adjacency_list("1\n".as_bytes()).unwrap();
    assert_eq!(self_loop.nb_edges(), 0);

    let mut too_many = String::new();
    for i in 2..=(frontier_stpath::MAX_EDGES + 2) {
        too_many.push_str(&format!("{}\n", i));
    }
    assert!(matches!(
        parse_adjacency_list(too_many.as_bytes()),
        Err(frontier_stpath::Error::TooManyEdges { .. })
    ));
}

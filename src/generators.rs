//! A catalog of named graphs on `{0, .., n-1}` used throughout the tests
//! and handy as rigidity examples.

use itertools::Itertools;

use crate::graph::Graph;

fn build<I>(vertices: usize, edges: I) -> Graph<usize>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut graph = Graph::new();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for (u, v) in edges {
        // Catalog edges are distinct pairs by construction.
        graph.add_edge_unchecked(u, v);
    }
    graph
}

/// Return the complete graph on `n` vertices.
pub fn complete(n: usize) -> Graph<usize> {
    build(n, (0..n).tuple_combinations())
}

/// Return the complete bipartite graph with parts `{0, .., m-1}` and
/// `{m, .., m+n-1}`.
pub fn complete_bipartite(m: usize, n: usize) -> Graph<usize> {
    build(
        m + n,
        (0..m).cartesian_product(0..n).map(|(i, j)| (i, m + j)),
    )
}

/// Return the cycle graph on `n >= 3` vertices.
pub fn cycle(n: usize) -> Graph<usize> {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    build(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Return the path graph on `n` vertices.
pub fn path(n: usize) -> Graph<usize> {
    build(n, (1..n).map(|i| (i - 1, i)))
}

/// Return the diamond: the complete graph on 4 vertices minus one edge.
pub fn diamond() -> Graph<usize> {
    build(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
}

/// Return the complete bipartite graph on 3+3 vertices with one extra
/// edge inside a part.
pub fn k33_plus_edge() -> Graph<usize> {
    let mut graph = complete_bipartite(3, 3);
    graph.add_edge_unchecked(0, 1);
    graph
}

/// Return the 3-prism: two triangles joined by a perfect matching.
pub fn three_prism() -> Graph<usize> {
    build(
        6,
        [
            (0, 1),
            (1, 2),
            (0, 2),
            (3, 4),
            (4, 5),
            (3, 5),
            (0, 3),
            (1, 4),
            (2, 5),
        ],
    )
}

/// Return the 3-prism with one extra edge.
pub fn three_prism_plus_edge() -> Graph<usize> {
    let mut graph = three_prism();
    graph.add_edge_unchecked(0, 5);
    graph
}

/// Return the diamond extended by a degree-2 vertex on its two opposite
/// spikes.
pub fn diamond_with_zero_extension() -> Graph<usize> {
    build(5, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 4), (3, 4)])
}

/// Return the smallest minimally rigid graph on five vertices.
///
/// Same edge list as [`diamond_with_zero_extension`]; both names are in
/// circulation for this graph, so the catalog keeps the two entries.
pub fn smallest_minimally_rigid() -> Graph<usize> {
    diamond_with_zero_extension()
}

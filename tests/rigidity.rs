//! Rigidity predicates: fixture catalogs and end-to-end scenarios.

use rigidity::algo::{
    is_globally_rigid, is_k_redundantly_rigid, is_min_rigid, is_redundantly_rigid, is_rigid,
    is_sparse_pebble, is_tight, is_vertex_redundantly_rigid, maximal_rigid_subgraphs,
    minimal_rigid_subgraphs,
};
use rigidity::generators;
use rigidity::Graph;

#[test]
fn rigid_in_d2() {
    for graph in [
        generators::complete(2),
        generators::complete(3),
        generators::complete(4),
        generators::complete_bipartite(3, 3),
        generators::complete_bipartite(3, 4),
        generators::complete_bipartite(4, 4),
        generators::diamond(),
        generators::k33_plus_edge(),
        generators::three_prism(),
        generators::three_prism_plus_edge(),
    ] {
        assert_eq!(is_rigid(&graph, 2), Ok(true), "{graph:?}");
    }
}

#[test]
fn not_rigid_in_d2() {
    for graph in [
        generators::complete_bipartite(1, 3),
        generators::complete_bipartite(2, 3),
        generators::cycle(4),
        generators::cycle(5),
        generators::path(3),
        generators::path(4),
    ] {
        assert_eq!(is_rigid(&graph, 2), Ok(false), "{graph:?}");
    }
}

#[test]
fn min_rigid_in_d2() {
    for graph in [
        generators::complete(2),
        generators::complete(3),
        generators::complete_bipartite(3, 3),
        generators::diamond(),
        generators::three_prism(),
        generators::smallest_minimally_rigid(),
    ] {
        assert_eq!(is_min_rigid(&graph, 2), Ok(true), "{graph:?}");
    }
}

#[test]
fn not_min_rigid_in_d2() {
    for graph in [
        generators::complete(4),
        generators::complete_bipartite(1, 3),
        generators::complete_bipartite(2, 3),
        generators::complete_bipartite(3, 4),
        generators::complete_bipartite(4, 4),
        generators::cycle(4),
        generators::cycle(5),
        generators::k33_plus_edge(),
        generators::path(3),
        generators::path(4),
        generators::three_prism_plus_edge(),
    ] {
        assert_eq!(is_min_rigid(&graph, 2), Ok(false), "{graph:?}");
    }
}

#[test]
fn globally_rigid_in_d2() {
    for graph in [
        generators::complete(3),
        generators::complete(4),
        generators::complete_bipartite(3, 4),
        generators::complete_bipartite(4, 4),
        generators::k33_plus_edge(),
        generators::three_prism_plus_edge(),
    ] {
        assert_eq!(is_globally_rigid(&graph, 2), Ok(true), "{graph:?}");
    }
}

#[test]
fn not_globally_rigid_in_d2() {
    for graph in [
        generators::complete_bipartite(1, 3),
        generators::complete_bipartite(2, 3),
        generators::complete_bipartite(3, 3),
        generators::cycle(4),
        generators::cycle(5),
        generators::diamond(),
        generators::path(3),
        generators::path(4),
        generators::three_prism(),
    ] {
        assert_eq!(is_globally_rigid(&graph, 2), Ok(false), "{graph:?}");
    }
}

/// Minimal rigidity in the plane is exactly (2, 3)-tightness.
#[test]
fn rigidity_duality() {
    for graph in [
        generators::complete(3),
        generators::complete(4),
        generators::cycle(4),
        generators::cycle(5),
        generators::diamond(),
        generators::path(4),
        generators::three_prism(),
        generators::three_prism_plus_edge(),
        generators::k33_plus_edge(),
        generators::smallest_minimally_rigid(),
    ] {
        assert_eq!(
            is_min_rigid(&graph, 2).unwrap(),
            is_tight(&graph, 2, 3).unwrap(),
            "{graph:?}"
        );
    }
}

// The six end-to-end scenarios.

#[test]
fn scenario_k4() {
    let g = generators::complete(4);
    assert_eq!(is_sparse_pebble(&g, 2, 3), Ok(false));
    assert_eq!(is_tight(&g, 2, 3), Ok(false));
    assert_eq!(is_rigid(&g, 2), Ok(true));
    assert_eq!(is_globally_rigid(&g, 2), Ok(true));
}

#[test]
fn scenario_triangle() {
    let g = generators::complete(3);
    assert_eq!(is_tight(&g, 2, 3), Ok(true));
    assert_eq!(is_min_rigid(&g, 2), Ok(true));
    assert_eq!(is_globally_rigid(&g, 2), Ok(true));
}

#[test]
fn scenario_four_cycle() {
    let g = generators::cycle(4);
    assert_eq!(is_sparse_pebble(&g, 2, 3), Ok(true));
    assert_eq!(is_tight(&g, 2, 3), Ok(false));
    assert_eq!(is_rigid(&g, 2), Ok(false));
}

#[test]
fn scenario_three_prism() {
    let g = generators::three_prism();
    assert_eq!(is_tight(&g, 2, 3), Ok(true));
    assert_eq!(is_rigid(&g, 2), Ok(true));
    assert_eq!(is_globally_rigid(&g, 2), Ok(false));
}

#[test]
fn scenario_three_prism_plus_edge() {
    let g = generators::three_prism_plus_edge();
    assert_eq!(is_sparse_pebble(&g, 2, 3), Ok(false));
    assert_eq!(is_rigid(&g, 2), Ok(true));
    assert_eq!(is_redundantly_rigid(&g, 2), Ok(true));
    assert_eq!(is_globally_rigid(&g, 2), Ok(true));
}

#[test]
fn scenario_k33_plus_edge() {
    let g = generators::k33_plus_edge();
    assert_eq!(is_globally_rigid(&g, 2), Ok(true));
    // Reference integer for the codec, under sorted vertex order.
    assert_eq!(g.to_integer().unwrap(), 24056u32.into());
}

#[test]
fn redundancy_variants() {
    // K4 survives one edge deletion but not two.
    let k4 = generators::complete(4);
    assert_eq!(is_redundantly_rigid(&k4, 2), Ok(true));
    assert_eq!(is_k_redundantly_rigid(&k4, 2, 2), Ok(false));

    // A minimally rigid graph is never redundantly rigid.
    assert_eq!(is_redundantly_rigid(&generators::three_prism(), 2), Ok(false));

    // Complete graphs stay complete after losing a vertex.
    assert_eq!(is_vertex_redundantly_rigid(&generators::complete(5), 2), Ok(true));
    assert_eq!(is_vertex_redundantly_rigid(&generators::complete(4), 2), Ok(true));
    assert_eq!(
        is_vertex_redundantly_rigid(&generators::three_prism(), 2),
        Ok(false)
    );
}

#[test]
fn deterministic_predicates() {
    let g = generators::three_prism_plus_edge();
    let first = (
        is_rigid(&g, 2),
        is_min_rigid(&g, 2),
        is_globally_rigid(&g, 2),
    );
    let second = (
        is_rigid(&g, 2),
        is_min_rigid(&g, 2),
        is_globally_rigid(&g, 2),
    );
    assert_eq!(first, second);
}

#[test]
fn prism_with_pendant_triangle_subgraphs() {
    // The 3-prism plus a triangle hanging off vertex 0.
    let mut g = generators::three_prism();
    g.add_edges([(0, 6), (0, 7), (6, 7)]).unwrap();

    let maximal = maximal_rigid_subgraphs(&g, 2).unwrap();
    assert_eq!(maximal.len(), 2);
    let mut orders: Vec<_> = maximal.iter().map(Graph::node_count).collect();
    orders.sort_unstable();
    assert_eq!(orders, vec![3, 6]);

    // Every minimal rigid subgraph is a triangle, and the triangles are
    // all isomorphic, so exactly one class remains.
    let minimal = minimal_rigid_subgraphs(&g, 2).unwrap();
    assert_eq!(minimal.len(), 1);
    assert_eq!(minimal[0].node_count(), 3);
    assert_eq!(minimal[0].edge_count(), 3);
}

#[test]
fn dimension_one_catalog() {
    assert_eq!(is_rigid(&generators::path(5), 1), Ok(true));
    assert_eq!(is_min_rigid(&generators::path(5), 1), Ok(true));
    assert_eq!(is_min_rigid(&generators::cycle(5), 1), Ok(false));
    assert_eq!(is_globally_rigid(&generators::cycle(5), 1), Ok(true));
    assert_eq!(is_globally_rigid(&generators::path(5), 1), Ok(false));
    assert_eq!(is_globally_rigid(&generators::complete(2), 1), Ok(true));
}

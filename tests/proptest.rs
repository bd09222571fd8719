//! Property tests: sparsity agreement, codec round trips, determinism.

use proptest::prelude::*;

use rigidity::algo::{is_min_rigid, is_sparse, is_sparse_pebble, is_tight, is_tree};
use rigidity::{Graph, PebbleDigraph};

/// Arbitrary simple graph on 2 to 7 vertices, drawn from a bit mask over
/// the strictly upper adjacency triangle.
fn arb_graph() -> impl Strategy<Value = Graph<usize>> {
    (2usize..=7)
        .prop_flat_map(|n| {
            let pairs = n * (n - 1) / 2;
            (Just(n), 0u64..(1u64 << pairs))
        })
        .prop_map(|(n, mask)| {
            let mut graph = Graph::new();
            for v in 0..n {
                graph.add_vertex(v);
            }
            let mut bit = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    if mask >> bit & 1 == 1 {
                        graph.add_edge(i, j).unwrap();
                    }
                    bit += 1;
                }
            }
            graph
        })
}

fn arb_parameters() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=3).prop_flat_map(|k| (Just(k), 0..2 * k))
}

proptest! {
    #[test]
    fn pebble_game_matches_brute_force(graph in arb_graph(), (k, l) in arb_parameters()) {
        let brute = is_sparse(&graph, k, l).unwrap();
        let pebble = is_sparse_pebble(&graph, k, l).unwrap();
        prop_assert_eq!(brute, pebble);
    }

    #[test]
    fn one_one_tight_means_spanning_tree(graph in arb_graph()) {
        prop_assert_eq!(is_tight(&graph, 1, 1).unwrap(), is_tree(&graph));
    }

    #[test]
    fn min_rigid_iff_tight(graph in arb_graph()) {
        prop_assert_eq!(
            is_min_rigid(&graph, 2).unwrap(),
            is_tight(&graph, 2, 3).unwrap()
        );
    }

    #[test]
    fn out_degrees_stay_bounded(graph in arb_graph(), (k, l) in arb_parameters()) {
        let mut digraph = PebbleDigraph::new(k, l).unwrap();
        digraph.add_edges_maintaining_digraph(graph.edges());
        for v in digraph.vertices() {
            prop_assert!(digraph.out_degree(v).unwrap() <= k);
        }
    }

    #[test]
    fn admission_is_deterministic(graph in arb_graph(), (k, l) in arb_parameters()) {
        let run = || {
            let mut digraph = PebbleDigraph::new(k, l).unwrap();
            digraph.add_edges_maintaining_digraph(graph.edges());
            digraph.directed_edges().collect::<Vec<_>>()
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn codec_round_trip(graph in arb_graph()) {
        prop_assume!(graph.edge_count() > 0);
        let encoded = graph.to_integer().unwrap();
        let decoded = Graph::from_integer(&encoded).unwrap();
        prop_assert_eq!(decoded.to_integer().unwrap(), encoded);
    }
}

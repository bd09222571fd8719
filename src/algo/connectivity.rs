//! Connectivity queries backing the dimension-1 predicates and the
//! 3-connectivity half of global rigidity.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;

use crate::graph::{Graph, NodeTrait};

/// Return `true` if the graph is connected.
///
/// The empty graph and the single vertex count as connected.
pub fn is_connected<N: NodeTrait>(graph: &Graph<N>) -> bool {
    let mut vertices = graph.vertices();
    let start = match vertices.next() {
        Some(start) => start,
        None => return true,
    };
    let mut seen: HashSet<N> = HashSet::new();
    seen.insert(start);
    let mut stack = vec![start];
    while let Some(x) = stack.pop() {
        for y in graph.neighbors(x) {
            if seen.insert(y) {
                stack.push(y);
            }
        }
    }
    seen.len() == graph.node_count()
}

/// Return `true` if the graph is a tree: connected with `|E| = |V| - 1`.
pub fn is_tree<N: NodeTrait>(graph: &Graph<N>) -> bool {
    graph.edge_count() == graph.node_count().saturating_sub(1) && is_connected(graph)
}

/// Return the vertex connectivity: the size of a smallest vertex set
/// whose removal disconnects the graph (or leaves less than 2 vertices).
///
/// The complete graph on `n` vertices has connectivity `n - 1`; a
/// disconnected or trivial graph has connectivity 0. Every other value
/// is the minimum over non-adjacent pairs of the unit-capacity max-flow
/// between them on the vertex-split digraph (Menger's theorem).
pub fn vertex_connectivity<N: NodeTrait>(graph: &Graph<N>) -> usize {
    let n = graph.node_count();
    if n < 2 {
        return 0;
    }
    if graph.is_complete() {
        return n - 1;
    }
    if !is_connected(graph) {
        return 0;
    }

    let order: Vec<N> = graph.vertices().collect();
    let mut adjacency = vec![FixedBitSet::with_capacity(n); n];
    for (i, &v) in order.iter().enumerate() {
        for (j, &w) in order.iter().enumerate() {
            if graph.contains_edge(v, w) {
                adjacency[i].insert(j);
            }
        }
    }

    let mut connectivity = n - 1;
    for s in 0..n {
        for t in (s + 1)..n {
            if !adjacency[s].contains(t) {
                connectivity = connectivity.min(min_vertex_cut(&adjacency, n, s, t));
            }
        }
    }
    connectivity
}

/// Minimum s-t vertex cut for non-adjacent `s`, `t`, as the maximum flow
/// on the split digraph: each vertex `v` becomes an arc `v_in -> v_out`
/// of capacity 1, each edge `{a, b}` the arcs `a_out -> b_in` and
/// `b_out -> a_in` of unbounded capacity. Augmenting paths are found by
/// breadth-first search.
fn min_vertex_cut(adjacency: &[FixedBitSet], n: usize, s: usize, t: usize) -> usize {
    let size = 2 * n;
    let unbounded = n as i64;
    let mut capacity = vec![vec![0i64; size]; size];
    for v in 0..n {
        capacity[2 * v][2 * v + 1] = 1;
    }
    for a in 0..n {
        for b in adjacency[a].ones() {
            capacity[2 * a + 1][2 * b] = unbounded;
        }
    }

    let source = 2 * s + 1;
    let sink = 2 * t;
    let mut flow = 0i64;
    loop {
        let mut parent = vec![usize::MAX; size];
        parent[source] = source;
        let mut queue = VecDeque::from([source]);
        while let Some(x) = queue.pop_front() {
            for y in 0..size {
                if parent[y] == usize::MAX && capacity[x][y] > 0 {
                    parent[y] = x;
                    queue.push_back(y);
                }
            }
        }
        if parent[sink] == usize::MAX {
            break;
        }

        let mut bottleneck = i64::MAX;
        let mut y = sink;
        while y != source {
            let x = parent[y];
            bottleneck = bottleneck.min(capacity[x][y]);
            y = x;
        }
        let mut y = sink;
        while y != source {
            let x = parent[y];
            capacity[x][y] -= bottleneck;
            capacity[y][x] += bottleneck;
            y = x;
        }
        flow += bottleneck;
    }
    flow as usize
}

//! The oriented witness graph behind the (K, L)-pebble game.
//!
//! A [`PebbleDigraph`] maintains an orientation of the edges accepted so
//! far such that every vertex keeps at most `K` outgoing edges. An edge
//! `{u, v}` is admitted exactly when pebbles can be gathered so that
//! `out(u) + out(v) <= 2K - L - 1`; gathering moves pebbles by reversing
//! directed paths found by depth-first search. The admitted edge set is
//! then a maximal (K, L)-sparse subset of the input stream, and the
//! visited set of a failed search is the fundamental circuit of the
//! rejected edge.

use fixedbitset::FixedBitSet;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::error::{check_k_l, GraphError, InvalidParameters};
use crate::graph::NodeTrait;

/// A directed edge of the arena. Endpoints are vertex indices; the
/// unordered pair `{tail, head}` (the support) never changes after
/// insertion, only the direction does.
#[derive(Clone, Copy, Debug)]
struct Arc {
    tail: usize,
    head: usize,
}

/// Directed multigraph driving the (K, L)-pebble game.
///
/// Vertices are stored in an insertion-ordered arena; each vertex record
/// keeps its outgoing arc indices in insertion order, which makes the
/// pebble search and the reported circuits deterministic for a given edge
/// input order.
#[derive(Clone, Debug)]
pub struct PebbleDigraph<N: NodeTrait> {
    k: usize,
    l: usize,
    nodes: IndexMap<N, Vec<usize>>,
    arcs: Vec<Arc>,
}

impl<N: NodeTrait> PebbleDigraph<N> {
    /// Create an empty pebble digraph with the given parameters.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidParameters`] unless `K >= 1` and `L < 2K`.
    pub fn new(k: usize, l: usize) -> Result<Self, InvalidParameters> {
        check_k_l(k, l)?;
        Ok(PebbleDigraph {
            k,
            l,
            nodes: IndexMap::new(),
            arcs: Vec::new(),
        })
    }

    /// The pebble count per vertex.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The sparsity offset.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Replace the game parameters.
    ///
    /// Changing K or L invalidates every orientation made under the old
    /// parameters, so all directed edges are discarded; the vertex set is
    /// kept.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidParameters`] unless `K >= 1` and `L < 2K`;
    /// the digraph is left untouched in that case.
    pub fn set_k_l(&mut self, k: usize, l: usize) -> Result<(), InvalidParameters> {
        check_k_l(k, l)?;
        debug!(
            "pebble parameters change ({}, {}) -> ({k}, {l}): discarding {} directed edges",
            self.k,
            self.l,
            self.arcs.len()
        );
        self.k = k;
        self.l = l;
        self.arcs.clear();
        for out in self.nodes.values_mut() {
            out.clear();
        }
        Ok(())
    }

    /// Return the number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.arcs.len()
    }

    /// Return `true` if the vertex is contained in the digraph.
    pub fn contains_vertex(&self, v: N) -> bool {
        self.nodes.contains_key(&v)
    }

    /// Add a vertex with no incident edges. A duplicate is a no-op.
    pub fn add_vertex(&mut self, v: N) {
        self.nodes.entry(v).or_default();
    }

    /// Return an iterator over the vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.keys().copied()
    }

    /// Return an iterator over the directed edges as `(tail, head)` pairs,
    /// in insertion order.
    pub fn directed_edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.arcs.iter().filter_map(|arc| {
            let tail = self.nodes.get_index(arc.tail)?.0;
            let head = self.nodes.get_index(arc.head)?.0;
            Some((*tail, *head))
        })
    }

    /// Return the number of edges leading out of `v`, or `None` when `v`
    /// is not part of the digraph.
    pub fn out_degree(&self, v: N) -> Option<usize> {
        self.nodes.get(&v).map(Vec::len)
    }

    /// Return the number of edges leading into `v`, or `None` when `v`
    /// is not part of the digraph.
    pub fn in_degree(&self, v: N) -> Option<usize> {
        let ix = self.nodes.get_index_of(&v)?;
        Some(self.arcs.iter().filter(|arc| arc.head == ix).count())
    }

    /// Attempt to admit the undirected edge `{u, v}`.
    ///
    /// Returns `true` iff the edge is independent in the (K, L)-matroid
    /// given the edges admitted so far; it is then stored oriented out of
    /// the endpoint with the smaller out-degree (ties go from `u` to `v`).
    /// On `false` the digraph's edge set is unchanged (pebbles may have
    /// moved, which never alters the admitted set).
    ///
    /// `u` and `v` must be distinct; the engine tracks simple graphs only.
    pub fn add_edge_maintaining_digraph(&mut self, u: N, v: N) -> bool {
        debug_assert!(u != v, "pebble digraph edges must not be self-loops");

        // An absent endpoint has out-degree 0, so the edge can always be
        // admitted oriented out of it.
        if !self.contains_vertex(u) {
            self.add_vertex(u);
            self.add_vertex(v);
            self.push_arc(u, v);
            return true;
        }
        if !self.contains_vertex(v) {
            self.add_vertex(v);
            self.push_arc(v, u);
            return true;
        }

        let ui = self.index_of(u);
        let vi = self.index_of(v);
        if self.circuit_indices(ui, vi).is_some() {
            debug!("edge rejected by pebble game: dependent on admitted edges");
            return false;
        }
        // Orient out of the endpoint with fewer pebbles spent; ties go
        // from u to v.
        if self.nodes[ui].len() <= self.nodes[vi].len() {
            self.push_arc(u, v);
        } else {
            self.push_arc(v, u);
        }
        true
    }

    /// Run [`add_edge_maintaining_digraph`](Self::add_edge_maintaining_digraph)
    /// for each edge in order and return how many were admitted.
    ///
    /// The admitted subset depends on the input order, but the count
    /// equals the input length iff the whole stream is (K, L)-sparse.
    pub fn add_edges_maintaining_digraph<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (N, N)>,
    {
        edges
            .into_iter()
            .filter(|&(u, v)| self.add_edge_maintaining_digraph(u, v))
            .count()
    }

    /// Answer whether [`add_edge_maintaining_digraph`](Self::add_edge_maintaining_digraph)
    /// would admit `{u, v}`, without changing the admitted edge set.
    ///
    /// Pebbles may still be moved by the probe; path reversal never
    /// changes which edges are admitted.
    pub fn can_add_edge(&mut self, u: N, v: N) -> bool {
        match (self.nodes.get_index_of(&u), self.nodes.get_index_of(&v)) {
            // An absent endpoint bootstraps, see add_edge_maintaining_digraph.
            (Some(ui), Some(vi)) => self.circuit_indices(ui, vi).is_none(),
            _ => true,
        }
    }

    /// Return the vertex set of the fundamental (K, L)-matroid circuit of
    /// the edge `{u, v}` relative to the admitted edges, or `None` when
    /// `{u, v}` is independent.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::UnknownVertex`] when `u` or `v` is not
    /// part of the digraph.
    pub fn fundamental_circuit(&mut self, u: N, v: N) -> Result<Option<IndexSet<N>>, GraphError> {
        let ui = self
            .nodes
            .get_index_of(&u)
            .ok_or(GraphError::UnknownVertex)?;
        let vi = self
            .nodes
            .get_index_of(&v)
            .ok_or(GraphError::UnknownVertex)?;
        Ok(self.circuit_indices(ui, vi).map(|visited| {
            visited
                .ones()
                .filter_map(|ix| self.nodes.get_index(ix).map(|(n, _)| *n))
                .collect()
        }))
    }

    fn index_of(&self, v: N) -> usize {
        self.nodes
            .get_index_of(&v)
            .expect("vertex was inserted above")
    }

    fn push_arc(&mut self, tail: N, head: N) {
        let tail_ix = self.index_of(tail);
        let head_ix = self.index_of(head);
        let arc_ix = self.arcs.len();
        self.arcs.push(Arc {
            tail: tail_ix,
            head: head_ix,
        });
        self.nodes[tail_ix].push(arc_ix);
    }

    /// Flip one arc end-to-end, keeping its support.
    ///
    /// Callers only hand in arcs they just traversed tail-to-head, so the
    /// arc is always present in its tail's out-list.
    fn reverse_arc(&mut self, arc_ix: usize) {
        let Arc { tail, head } = self.arcs[arc_ix];
        let out = &mut self.nodes[tail];
        let pos = out.iter().position(|&a| a == arc_ix);
        debug_assert!(pos.is_some(), "arc must be outgoing from its tail");
        if let Some(pos) = pos {
            out.remove(pos);
            self.arcs[arc_ix] = Arc {
                tail: head,
                head: tail,
            };
            self.nodes[head].push(arc_ix);
        }
    }

    /// Depth-first search for a vertex with a free pebble, reachable from
    /// `start` along arc directions.
    ///
    /// A goal is any vertex outside `exclude` with out-degree below K.
    /// On success every arc on the walk from `start` to the goal is
    /// reversed (moving one pebble to `start`'s side) and `true` is
    /// returned. `visited` accumulates every vertex reached, also across
    /// consecutive calls, so a second search continues where the first
    /// stopped.
    fn find_free_pebble(
        &mut self,
        start: usize,
        exclude: (usize, usize),
        visited: &mut FixedBitSet,
    ) -> bool {
        visited.insert(start);
        // Frames are (vertex, next out-arc cursor); `path` holds the arcs
        // of the current walk and stays aligned one behind the stack.
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        let mut path: Vec<usize> = Vec::new();

        while let Some(frame) = stack.last_mut() {
            let (x, cursor) = *frame;
            if cursor >= self.nodes[x].len() {
                stack.pop();
                path.pop();
                continue;
            }
            frame.1 += 1;

            let arc_ix = self.nodes[x][cursor];
            let y = self.arcs[arc_ix].head;
            if visited.contains(y) {
                continue;
            }
            visited.insert(y);
            path.push(arc_ix);

            if y != exclude.0 && y != exclude.1 && self.nodes[y].len() < self.k {
                trace!("free pebble found, reversing a path of {} arcs", path.len());
                for &arc in &path {
                    self.reverse_arc(arc);
                }
                return true;
            }
            stack.push((y, 0));
        }
        false
    }

    /// The pebble search proper. Returns the visited set when `{u, v}` is
    /// dependent, `None` when it is independent.
    fn circuit_indices(&mut self, ui: usize, vi: usize) -> Option<FixedBitSet> {
        let max_joint_degree = 2 * self.k - self.l - 1;
        let mut visited = FixedBitSet::with_capacity(self.nodes.len());

        while self.nodes[ui].len() + self.nodes[vi].len() > max_joint_degree {
            visited.clear();
            visited.insert(ui);
            visited.insert(vi);

            if self.find_free_pebble(ui, (ui, vi), &mut visited) {
                continue;
            }
            // The second search keeps the visited set of the first, so the
            // two reach exactly the vertices reachable from {u, v}.
            if self.find_free_pebble(vi, (ui, vi), &mut visited) {
                continue;
            }
            // Neither endpoint can reach a free pebble; the reachable set
            // is maximal and spans the fundamental circuit.
            return Some(visited);
        }
        None
    }
}

/*!
# Unit-Flow Subset Graph

[`FlowGraph`] is the storage backend shared by the flow routines and the
cut-matching driver. It combines

- an adjacency structure of paired directed **flow edges** (each undirected
  edge is stored as two [`FlowEdge`]s whose `back_idx` fields point at each
  other),
- an alive/removed partition of the vertices ([`SubsetList`]),
- the per-vertex state of the push-relabel engine (`absorbed`, `sink_cap`,
  `height`, `next_edge`).

## Removal semantics

`remove(u)` deactivates, for every active edge `(u, v)`, the reverse copy
`(v, u)` inside `v`'s list, and freezes `u`'s own list as-is. Consequences:

- the degree of an **alive** vertex counts alive neighbours only,
- the degree of a **removed** vertex is frozen at its removal-time value,
  so the volume of the removed side counts each edge with at least one
  removed endpoint exactly once,
- `restore_removes` undoes all removals (internally in LIFO order, which
  keeps the active-prefix bookkeeping consistent).

Active edges occupy a prefix of each adjacency list; deactivation swaps an
edge behind the prefix boundary and patches the `back_idx` of every edge it
displaces.
*/

use smallvec::SmallVec;

use crate::{edge::Edge, node::*, repr::subset::SubsetList};

/// One direction of an undirected flow edge.
///
/// The pair invariants are `reverse.flow == -flow` and
/// `reverse.congestion == congestion`; `residual = capacity - flow`.
#[derive(Copy, Clone, Debug)]
pub struct FlowEdge {
    pub from: Node,
    pub to: Node,
    /// Position of the reverse copy inside `to`'s adjacency list. Kept
    /// up-to-date across the swaps performed by removal/restore.
    pub back_idx: NumNodes,
    pub flow: Flow,
    pub capacity: Flow,
    pub congestion: Flow,
}

/// Adjacency list of one vertex. Split vertices, the majority of a
/// subdivision graph, have exactly two edges and stay inline.
pub(crate) type AdjList = SmallVec<[FlowEdge; 2]>;

/// An undirected multigraph with flow state and an alive/removed partition.
pub struct FlowGraph {
    pub(crate) adj: Vec<AdjList>,
    /// Length of the active prefix of each adjacency list.
    pub(crate) active_deg: Vec<NumNodes>,
    pub(crate) vertices: SubsetList,

    pub(crate) absorbed: Vec<Flow>,
    pub(crate) sink_cap: Vec<Flow>,
    pub(crate) height: Vec<Height>,
    pub(crate) next_edge: Vec<NumNodes>,
}

impl FlowGraph {
    /// Creates an edgeless graph with `n` vertices, all alive.
    pub fn new(n: NumNodes) -> Self {
        let n = n as usize;
        Self {
            adj: vec![AdjList::new(); n],
            active_deg: vec![0; n],
            vertices: SubsetList::new(n as NumNodes),
            absorbed: vec![0; n],
            sink_cap: vec![0; n],
            height: vec![0; n],
            next_edge: vec![0; n],
        }
    }

    /// Creates a graph with `n` vertices and the given edges, each with
    /// capacity 0. Self-loops are dropped, duplicates are kept.
    pub fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n);
        for e in edges {
            let Edge(u, v) = e.into();
            graph.add_edge(u, v, 0);
        }
        graph
    }

    /// Inserts the undirected edge `{u, v}` as a pair of directed flow
    /// edges. Self-loops are ignored.
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Flow) {
        if u == v {
            return;
        }
        let u_deg = self.adj[u as usize].len() as NumNodes;
        let v_deg = self.adj[v as usize].len() as NumNodes;

        self.adj[u as usize].push(FlowEdge {
            from: u,
            to: v,
            back_idx: v_deg,
            flow: 0,
            capacity,
            congestion: 0,
        });
        self.adj[v as usize].push(FlowEdge {
            from: v,
            to: u,
            back_idx: u_deg,
            flow: 0,
            capacity,
            congestion: 0,
        });
        self.active_deg[u as usize] += 1;
        self.active_deg[v as usize] += 1;
    }

    // ---------- vertex sets ----------

    /// Total number of vertices, alive or removed.
    #[inline]
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.number_of_nodes()
    }

    /// Number of alive vertices.
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.vertices.alive_count()
    }

    /// Number of removed vertices.
    #[inline]
    pub fn removed_count(&self) -> usize {
        self.vertices.removed_count()
    }

    /// Returns `true` if `u` has not been removed.
    #[inline]
    pub fn is_alive(&self, u: Node) -> bool {
        self.vertices.is_alive(u)
    }

    /// Iterates over the alive vertices. The order is a permutation that
    /// changes under removal; snapshot before mutating.
    #[inline]
    pub fn alive(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.alive()
    }

    /// Iterates over the removed vertices, most recently removed first.
    #[inline]
    pub fn removed(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.removed()
    }

    // ---------- degrees, edges, volumes ----------

    /// Degree of `u`: alive neighbours for an alive vertex, the frozen
    /// removal-time value for a removed one.
    #[inline]
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.active_deg[u as usize]
    }

    /// The active edges out of `u` (the active prefix of its list).
    #[inline]
    pub fn edges_of(&self, u: Node) -> &[FlowEdge] {
        &self.adj[u as usize][..self.active_deg[u as usize] as usize]
    }

    /// The reverse copy of `e`.
    #[inline]
    pub fn reverse(&self, e: &FlowEdge) -> &FlowEdge {
        &self.adj[e.to as usize][e.back_idx as usize]
    }

    /// Number of undirected edges between alive vertices.
    pub fn edge_count(&self) -> NumEdges {
        let twice: u64 = self.alive().map(|u| self.degree_of(u) as u64).sum();
        (twice / 2) as NumEdges
    }

    /// Sum of degrees over the given vertices.
    pub fn volume_of<I>(&self, vs: I) -> u64
    where
        I: IntoIterator<Item = Node>,
    {
        vs.into_iter().map(|u| self.degree_of(u) as u64).sum()
    }

    // ---------- removal / restore ----------

    /// Removes `u`: deactivates the reverse copy of each of `u`'s active
    /// edges and freezes `u`'s own list. O(deg(u)) amortized.
    pub fn remove(&mut self, u: Node) {
        for i in 0..self.active_deg[u as usize] as usize {
            // `back_idx` is re-read each round: deactivations patch it.
            let e = self.adj[u as usize][i];
            self.deactivate_edge(e.to, e.back_idx as usize);
        }
        self.vertices.remove(u);
    }

    /// Restores every removed vertex and reactivates all edges.
    pub fn restore_removes(&mut self) {
        while let Some(u) = self.vertices.restore_next() {
            for i in 0..self.active_deg[u as usize] as usize {
                let e = self.adj[u as usize][i];
                self.reactivate_edge(e.to, e.back_idx as usize);
            }
        }
    }

    /// Swaps the edge at position `j` of `v`'s list behind the active
    /// prefix.
    fn deactivate_edge(&mut self, v: Node, j: usize) {
        let last = self.active_deg[v as usize] as usize - 1;
        debug_assert!(j <= last, "deactivating an inactive edge");
        self.adj[v as usize].swap(j, last);
        self.patch_back_idx(v, j);
        self.patch_back_idx(v, last);
        self.active_deg[v as usize] -= 1;
    }

    /// Swaps the (inactive) edge at position `j` of `v`'s list onto the end
    /// of the active prefix.
    fn reactivate_edge(&mut self, v: Node, j: usize) {
        let first_inactive = self.active_deg[v as usize] as usize;
        debug_assert!(j >= first_inactive, "reactivating an active edge");
        self.adj[v as usize].swap(j, first_inactive);
        self.patch_back_idx(v, j);
        self.patch_back_idx(v, first_inactive);
        self.active_deg[v as usize] += 1;
    }

    fn patch_back_idx(&mut self, v: Node, p: usize) {
        let FlowEdge { to, back_idx, .. } = self.adj[v as usize][p];
        self.adj[to as usize][back_idx as usize].back_idx = p as NumNodes;
    }

    // ---------- flow state ----------

    /// Zeroes all flows and the per-vertex engine state. Capacities and
    /// congestion are left untouched.
    pub fn reset(&mut self) {
        for list in &mut self.adj {
            for e in list.iter_mut() {
                e.flow = 0;
            }
        }
        self.absorbed.fill(0);
        self.sink_cap.fill(0);
        self.height.fill(0);
        self.next_edge.fill(0);
    }

    /// Seeds `u` with `mass` units of source mass.
    #[inline]
    pub fn add_source(&mut self, u: Node, mass: Flow) {
        self.absorbed[u as usize] += mass;
    }

    /// Grants `u` the capacity to absorb `cap` units.
    #[inline]
    pub fn add_sink(&mut self, u: Node, cap: Flow) {
        self.sink_cap[u as usize] += cap;
    }

    /// Mass held by `u` beyond its sink capacity.
    #[inline]
    pub fn excess(&self, u: Node) -> Flow {
        (self.absorbed[u as usize] - self.sink_cap[u as usize]).max(0)
    }

    /// Mass currently absorbed at `u`.
    #[inline]
    pub fn absorbed(&self, u: Node) -> Flow {
        self.absorbed[u as usize]
    }

    /// Remaining sink capacity granted to `u`.
    #[inline]
    pub fn sink_cap(&self, u: Node) -> Flow {
        self.sink_cap[u as usize]
    }

    /// Flow entering `u` over its active edges.
    pub fn flow_in(&self, u: Node) -> Flow {
        self.edges_of(u).iter().map(|e| (-e.flow).max(0)).sum()
    }

    /// Sets the capacity of every active edge of `u` (both directions) and
    /// clears their congestion.
    pub fn set_capacity(&mut self, u: Node, capacity: Flow) {
        for i in 0..self.active_deg[u as usize] as usize {
            let e = &mut self.adj[u as usize][i];
            e.capacity = capacity;
            e.congestion = 0;
            let (to, back) = (e.to as usize, e.back_idx as usize);
            let rev = &mut self.adj[to][back];
            rev.capacity = capacity;
            rev.congestion = 0;
        }
    }
}

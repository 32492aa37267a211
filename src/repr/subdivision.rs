/*!
# Subdivision Graph Construction

The cut-matching game runs on the **subdivision graph** H of G: every edge
`e = {u, v}` of G is replaced by a degree-2 *split vertex* `s_e` with edges
`{u, s_e}` and `{v, s_e}`. For a graph with `n` vertices and `m` edges, H
has `n + m` vertices and `2m` edges; split vertices get the ids `n..n + m`
in edge-list order.

[`SubdivisionIndex`] tracks which vertices of H are split vertices and maps
them to dense indices in `[0, m)` (`None` marks an original vertex, taking
the place of the `-1` sentinel). The driver re-densifies the indices over
the currently alive vertices once per run via [`SubdivisionIndex::reindex`];
removal never reshuffles assigned indices.
*/

use crate::{edge::Edge, node::*, repr::flow_graph::FlowGraph};

/// Split-vertex index table of a subdivision graph plus its reverse map.
pub struct SubdivisionIndex {
    /// `None` for original vertices, `Some(dense index)` for split vertices.
    index: Vec<Option<NumEdges>>,
    /// Maps a dense index back to the split vertex carrying it.
    rev: Vec<Node>,
}

impl SubdivisionIndex {
    fn new(num_vertices: usize, num_splits: usize) -> Self {
        Self {
            index: vec![None; num_vertices],
            rev: vec![0; num_splits],
        }
    }

    /// The split index of `u`, or `None` if `u` is an original vertex.
    #[inline]
    pub fn split_of(&self, u: Node) -> Option<usize> {
        self.index[u as usize].map(|i| i as usize)
    }

    /// Returns `true` if `u` is a split vertex.
    #[inline]
    pub fn is_split(&self, u: Node) -> bool {
        self.index[u as usize].is_some()
    }

    /// The split index of `u`.
    ///
    /// # Panics
    /// Panics if `u` is an original vertex.
    #[inline]
    pub fn index_of(&self, u: Node) -> usize {
        self.split_of(u)
            .expect("vertex is not a subdivision vertex")
    }

    /// The split vertex carrying dense index `i`.
    #[inline]
    pub fn vertex_of(&self, i: usize) -> Node {
        self.rev[i]
    }

    /// Reassigns dense indices `0..k` to the split vertices among `alive`
    /// (in iteration order) and rebuilds the reverse map. Returns `k`.
    pub fn reindex<I>(&mut self, alive: I) -> usize
    where
        I: IntoIterator<Item = Node>,
    {
        let mut count = 0;
        for u in alive {
            if self.index[u as usize].is_some() {
                self.index[u as usize] = Some(count as NumEdges);
                self.rev[count] = u;
                count += 1;
            }
        }
        count
    }
}

/// Builds the subdivision graph of the graph given by `n` vertices and
/// `edges`, together with its split-index table. Self-loops are skipped,
/// duplicate edges produce distinct split vertices. All edge capacities
/// start at 0.
pub fn subdivide(n: NumNodes, edges: &[Edge]) -> (FlowGraph, SubdivisionIndex) {
    let m = edges.iter().filter(|e| !e.is_loop()).count();
    let mut graph = FlowGraph::new(n + m as NumNodes);
    let mut subdivision = SubdivisionIndex::new(n as usize + m, m);

    let mut split = n;
    for &Edge(u, v) in edges.iter().filter(|e| !e.is_loop()) {
        graph.add_edge(u, split, 0);
        graph.add_edge(v, split, 0);
        subdivision.index[split as usize] = Some(split - n);
        subdivision.rev[(split - n) as usize] = split;
        split += 1;
    }

    (graph, subdivision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn subdivide_triangle() {
        let edges = [(0, 1), (0, 2), (1, 2)].iter().map(Edge::from).collect_vec();
        let (h, subdivision) = subdivide(3, &edges);

        assert_eq!(h.number_of_nodes(), 6);
        assert_eq!(h.edge_count(), 6);
        for u in 0..3 {
            assert_eq!(h.degree_of(u), 2);
            assert!(!subdivision.is_split(u));
        }
        for s in 3..6 {
            assert_eq!(h.degree_of(s), 2);
            assert_eq!(subdivision.index_of(s), s as usize - 3);
            assert_eq!(subdivision.vertex_of(s as usize - 3), s);
        }

        // split vertex of edge i is adjacent to exactly its endpoints
        let Edge(u, v) = edges[1];
        let neighbors = h.edges_of(4).iter().map(|e| e.to).collect_vec();
        assert_eq!(neighbors, vec![u, v]);
    }

    #[test]
    fn loops_produce_no_split_vertex() {
        let edges = [(0, 0), (0, 1)].iter().map(Edge::from).collect_vec();
        let (h, subdivision) = subdivide(2, &edges);
        assert_eq!(h.number_of_nodes(), 3);
        assert!(subdivision.is_split(2));
        assert_eq!(h.degree_of(2), 2);
    }

    #[test]
    fn reindex_skips_removed_splits() {
        let edges = [(0, 1), (1, 2), (2, 0)].iter().map(Edge::from).collect_vec();
        let (mut h, mut subdivision) = subdivide(3, &edges);

        h.remove(4);
        let count = subdivision.reindex(h.alive());
        assert_eq!(count, 2);

        let indices = h
            .alive()
            .filter(|&u| subdivision.is_split(u))
            .map(|u| subdivision.index_of(u))
            .sorted_unstable()
            .collect_vec();
        assert_eq!(indices, vec![0, 1]);
        for i in 0..count {
            assert_eq!(subdivision.index_of(subdivision.vertex_of(i)), i);
        }
    }
}

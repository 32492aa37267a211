/*!
# Bounded-Height Unit Flow

Push-relabel on a [`FlowGraph`] with per-vertex source mass and sink
capacities. Two features distinguish this from a max-flow solver:

- every push is additionally capped by the **degree of the receiver**, and
- heights are bounded by `min(max_height, 2n + 1)`; a vertex that reaches
  the bound simply drops out of the work queue.

Running to completion is therefore cheap and never fails: leftover excess
is an expected outcome that the caller turns into a [level cut]
(`UnitFlow::level_cut`).

Active vertices are processed smallest height first; equal heights resolve
by smallest vertex id (the queue holds `(height, vertex)` pairs under a
lexicographic min order). This tie-break is pinned by the tests below.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{node::*, repr::FlowGraph};

/// Unit-flow routing and level-cut extraction over a flow graph.
pub trait UnitFlow {
    /// Routes as much source mass as possible into sinks, respecting edge
    /// capacities and the degree cap on pushes. Returns the vertices still
    /// carrying excess when the work queue empties (empty means all mass
    /// was absorbed).
    ///
    /// Pushed flow is added to the edge `congestion` counters, which are
    /// not cleared by [`FlowGraph::reset`].
    fn route(&mut self, max_height: Height) -> Vec<Node>;

    /// Returns the alive vertices above the level `l` minimizing the ratio
    /// of edges crossing `{height > l}` / `{height <= l}` to the volume
    /// above. Ties resolve to the lowest level.
    ///
    /// Only meaningful directly after a [`UnitFlow::route`] that left
    /// excess; `h` must be at least the `max_height` passed there.
    fn level_cut(&self, h: Height) -> Vec<Node>;
}

impl UnitFlow for FlowGraph {
    fn route(&mut self, max_height: Height) -> Vec<Node> {
        let max_h = max_height.min(2 * self.number_of_nodes() + 1);

        let mut queue: BinaryHeap<Reverse<(Height, Node)>> = self
            .alive()
            .filter(|&u| self.excess(u) > 0)
            .map(|u| Reverse((self.height[u as usize], u)))
            .collect();

        while let Some(&Reverse((_, u))) = queue.peek() {
            let ui = u as usize;
            if self.active_deg[ui] == 0 {
                queue.pop();
                continue;
            }

            let i = self.next_edge[ui] as usize;
            let e = self.adj[ui][i];
            let residual = e.capacity - e.flow;

            if self.excess(u) > 0
                && residual > 0
                && self.height[ui] == self.height[e.to as usize] + 1
            {
                // push
                let to = e.to as usize;
                let delta = self
                    .excess(u)
                    .min(residual)
                    .min(self.degree_of(e.to) as Flow);
                let receiver_was_active = self.excess(e.to) > 0;

                self.adj[ui][i].flow += delta;
                self.adj[ui][i].congestion += delta;
                let back = e.back_idx as usize;
                self.adj[to][back].flow -= delta;
                self.adj[to][back].congestion += delta;

                self.absorbed[ui] -= delta;
                self.absorbed[to] += delta;
                debug_assert!(self.absorbed[ui] >= 0, "negative absorbed after push");
                debug_assert!(self.adj[ui][i].flow <= self.adj[ui][i].capacity);

                if self.height[ui] >= max_h || self.excess(u) == 0 {
                    queue.pop();
                }
                // Enqueue the receiver on its inactive -> active transition.
                // An already-active receiver below max_h is queued already.
                if !receiver_was_active && self.height[to] < max_h && self.excess(e.to) > 0 {
                    queue.push(Reverse((self.height[to], e.to)));
                }
            } else if i + 1 == self.active_deg[ui] as usize {
                // all edges tried, relabel
                queue.pop();
                self.height[ui] += 1;
                self.next_edge[ui] = 0;
                if self.height[ui] < max_h {
                    queue.push(Reverse((self.height[ui], u)));
                }
            } else {
                self.next_edge[ui] += 1;
            }
        }

        self.alive().filter(|&u| self.excess(u) > 0).collect()
    }

    fn level_cut(&self, h: Height) -> Vec<Node> {
        let levels = h as usize;
        let mut vol_at = vec![0u64; levels + 1];
        let mut cross_diff = vec![0i64; levels + 1];
        let mut total_volume = 0u64;

        for u in self.alive() {
            let hu = self.height[u as usize] as usize;
            debug_assert!(hu <= levels, "height exceeds the level-cut bound");
            let deg = self.degree_of(u) as u64;
            vol_at[hu] += deg;
            total_volume += deg;

            for e in self.edges_of(u) {
                let hv = self.height[e.to as usize] as usize;
                // An edge crossing levels hv..hu is counted from its upper
                // endpoint only.
                if hu > hv {
                    cross_diff[hv] += 1;
                    cross_diff[hu] -= 1;
                }
            }
        }

        // (crossing, volume above, level)
        let mut best: Option<(u64, u64, usize)> = None;
        let mut crossing = 0i64;
        let mut below = 0u64;
        for level in 0..levels {
            crossing += cross_diff[level];
            below += vol_at[level];
            let above = total_volume - below;
            if above == 0 {
                break;
            }
            let c = crossing as u64;
            let better = match best {
                None => true,
                Some((bc, bv, _)) => (c as u128) * (bv as u128) < (bc as u128) * (above as u128),
            };
            if better {
                best = Some((c, above, level));
            }
        }

        let (_, _, cut_level) = best.expect("level cut requires a vertex above level zero");
        self.alive()
            .filter(|&u| self.height[u as usize] as usize > cut_level)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;
    use itertools::Itertools;

    fn with_capacity(n: NumNodes, edges: &[(Node, Node)], cap: Flow) -> FlowGraph {
        let mut g = FlowGraph::from_edges(n, edges.iter().map(Edge::from));
        for u in g.alive().collect_vec() {
            g.set_capacity(u, cap);
        }
        g
    }

    fn assert_flow_invariants(g: &FlowGraph, total_source: Flow) {
        let mut absorbed = 0;
        for u in g.alive() {
            absorbed += g.absorbed(u);
            for e in g.edges_of(u) {
                assert!(e.flow.abs() <= e.capacity, "capacity violated on {e:?}");
                assert_eq!(g.reverse(e).flow, -e.flow, "antisymmetry violated on {e:?}");
                assert_eq!(g.reverse(e).congestion, e.congestion);
                assert!(e.congestion >= 0);
            }
        }
        assert_eq!(absorbed, total_source, "mass not conserved");
    }

    #[test]
    fn route_along_path() {
        let mut g = with_capacity(3, &[(0, 1), (1, 2)], 10);
        g.add_source(0, 1);
        g.add_sink(2, 1);

        let excess = g.route(10);
        assert!(excess.is_empty());
        assert_eq!(g.absorbed(2), 1);
        assert_flow_invariants(&g, 1);
        assert!(g.alive().all(|u| g.height[u as usize] <= 7)); // 2n + 1
    }

    #[test]
    fn two_sources_two_sinks_on_cycle() {
        let mut g = with_capacity(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], 10);
        g.add_source(0, 1);
        g.add_source(2, 1);
        g.add_sink(1, 1);
        g.add_sink(3, 1);

        let excess = g.route(5);
        assert!(excess.is_empty());
        assert_eq!(g.absorbed(1), 1);
        assert_eq!(g.absorbed(3), 1);
        assert_flow_invariants(&g, 2);

        // Pins the queue tie-break (smallest vertex id among equal heights).
        assert_eq!(
            g.alive()
                .sorted_unstable()
                .map(|u| g.height[u as usize])
                .collect_vec(),
            vec![1, 2, 1, 0]
        );
    }

    #[test]
    fn saturated_edge_leaves_excess_and_level_cut() {
        let mut g = with_capacity(2, &[(0, 1)], 1);
        g.add_source(0, 2);
        g.add_sink(1, 1);

        let excess = g.route(5);
        assert_eq!(excess, vec![0]);
        assert_eq!(g.absorbed(1), 1);
        assert_eq!(g.excess(0), 1);
        assert_eq!(g.height[0], 5);
        assert_flow_invariants(&g, 2);

        assert_eq!(g.level_cut(5), vec![0]);
    }

    #[test]
    fn height_bound_is_clamped() {
        // max_height far above 2n + 1; unroutable mass must still terminate
        // with heights <= 2n + 1.
        let mut g = with_capacity(2, &[(0, 1)], 1);
        g.add_source(0, 3);

        let excess = g.route(1000);
        assert_eq!(excess.len(), 2); // the stranded unit sits somewhere
        assert!(g.alive().all(|u| g.height[u as usize] <= 5));
        assert_flow_invariants(&g, 3);
    }

    #[test]
    fn degree_cap_bounds_absorption() {
        // Star center with one outgoing path: pushes into a vertex never
        // exceed sink capacity plus its degree when no excess remains there.
        let mut g = with_capacity(5, &[(0, 1), (1, 2), (1, 3), (1, 4)], 100);
        g.add_source(0, 3);
        g.add_sink(2, 1);
        g.add_sink(3, 1);
        g.add_sink(4, 1);

        let excess = g.route(20);
        assert!(excess.is_empty());
        for u in g.alive() {
            assert!(g.absorbed(u) <= g.sink_cap(u) + g.degree_of(u) as Flow);
        }
        assert_flow_invariants(&g, 3);
    }

    #[test]
    fn removed_vertices_do_not_participate() {
        let mut g = with_capacity(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], 10);
        g.remove(3);
        g.add_source(0, 1);
        g.add_sink(2, 1);

        let excess = g.route(10);
        assert!(excess.is_empty());
        assert_eq!(g.absorbed(2), 1);
        // the only route is through 1
        assert!(g.edges_of(0).iter().all(|e| e.to != 3));
    }
}

/*!
# Matching Extraction From a Routed Flow

After a successful [`UnitFlow::route`](crate::algo::UnitFlow::route), every
satisfied source has pushed one unit of mass to some sink. This module
recovers an explicit source/sink pairing: a DFS from each source walks edges
that still carry positive flow and claims the first reachable vertex with
positive remaining inflow and sink capacity.

Claiming a path decrements the flow of each traversed edge (the traversed
copy only; the flow state is scratch at this point and is discarded by the
next `reset`) and the sink's absorbed mass, so later sources cannot reuse
the same flow units.

The walk visits edges in adjacency order, which makes the extraction
deterministic for a fixed graph construction order.
*/

use bitvec::prelude::*;

use crate::{node::*, repr::FlowGraph};

/// Recovers source/sink pairs from the flow left behind by the unit-flow
/// engine.
pub trait FlowMatching {
    /// Matches each source, in order, to a sink reachable along
    /// flow-carrying edges. Sources for which no claimable path remains are
    /// skipped; each returned pair consumes its path.
    fn flow_matching(&mut self, sources: &[Node]) -> Vec<(Node, Node)>;
}

impl FlowMatching for FlowGraph {
    fn flow_matching(&mut self, sources: &[Node]) -> Vec<(Node, Node)> {
        let mut matches = Vec::with_capacity(sources.len());
        let mut visited = bitvec![0; self.number_of_nodes() as usize];

        for &source in sources {
            visited.fill(false);
            if let Some(sink) = self.claim_path(source, &mut visited) {
                matches.push((source, sink));
            }
        }

        matches
    }
}

impl FlowGraph {
    /// Depth-first search from `start` along `flow > 0` edges. On success
    /// decrements the flow of every tree-path edge and the sink's absorbed
    /// mass, returning the sink.
    fn claim_path(&mut self, start: Node, visited: &mut BitSlice) -> Option<Node> {
        visited.set(start as usize, true);
        // (vertex, index of the next edge to inspect)
        let mut stack: Vec<(Node, u32)> = vec![(start, 0)];

        while let Some(&(u, i)) = stack.last() {
            if i >= self.degree_of(u) {
                stack.pop();
                continue;
            }
            stack.last_mut().unwrap().1 += 1;

            let e = self.adj[u as usize][i as usize];
            if e.flow <= 0 {
                continue;
            }

            if self.flow_in(e.to) > 0 && self.sink_cap(e.to) > 0 {
                // Each frame's `i` already points one past the edge it took.
                for &(v, ni) in &stack {
                    self.adj[v as usize][ni as usize - 1].flow -= 1;
                }
                self.absorbed[e.to as usize] -= 1;
                return Some(e.to);
            }

            if !visited[e.to as usize] {
                visited.set(e.to as usize, true);
                stack.push((e.to, 0));
            }
        }

        None
    }
}

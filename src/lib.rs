/*!
`expander-decomp` is the cut-matching core of an expander decomposition for
**u**nlabelled, **u**nweighted, **u**ndirected graphs: given a subset of a
graph G and a conductance target `phi`, one run of the
[cut-matching game](algo::cut_matching) either certifies the subset as an
expander, finds a balanced sparse cut, or identifies a near expander to be
repaired by trimming.

# Representation

We represent **nodes** as `u32` in the range `0..n`. The game itself runs
on the [subdivision graph](repr::subdivide) of G, where every edge is
replaced by a degree-2 *split vertex*; both graphs are stored as
[`FlowGraph`](repr::FlowGraph)s, an adjacency structure of paired directed
flow edges with an alive/removed vertex partition.

# Usage

```
use expander_decomp::prelude::*;
use expander_decomp::algo::cut_matching::{Parameters, Solver};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

// A 4-cycle.
let edges = vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)];
let mut graph = FlowGraph::from_edges(4, edges.iter().copied());
let (mut subdiv_graph, mut subdivision) = subdivide(4, &edges);

// Small instances need the balanced cut shape; the RST strategy caps the
// source side at an eighth of the split vertices.
let params = Parameters {
    balanced_cut_strategy: true,
    ..Parameters::default()
};

let mut rng = Pcg64Mcg::seed_from_u64(0);
let solver = Solver::new(
    &mut graph,
    &mut subdiv_graph,
    &mut rng,
    &mut subdivision,
    0.01,
    params,
);
let outcome = solver.compute();
assert!(outcome.congestion >= 1);
```

The caller reads the resulting partition off the alive/removed sets of
`graph`; a driver that wants to reuse the graphs afterwards calls
[`FlowGraph::restore_removes`](repr::FlowGraph::restore_removes).

# Design

Algorithms are provided as traits on the graph representation
([`UnitFlow`](algo::UnitFlow), [`FlowMatching`](algo::FlowMatching)) or as
configurable solver structs borrowing it ([`Solver`](algo::Solver)). The
core is single-threaded and deterministic for a fixed RNG seed; all
randomness flows through the caller-provided [`rand::Rng`].

# Out of scope

The outer recursive decomposition driver, the trimming post-processor,
command-line parsing, and file I/O live outside this crate.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod repr;

/// Includes node/edge definitions and all graph storage types.
pub mod prelude {
    pub use super::{edge::*, node::*, repr::*};
}

/*!
# Cut-Matching Game

The iterative core of the expander decomposition. Each round, the **cut
player** projects a random unit vector through the matchings played so far
and proposes a bisection of the alive split vertices; the **matching
player** answers by routing unit flow from the proposed sources to the
proposed sinks through the subdivision graph. Mass that cannot be routed is
cut away via a level cut, the recovered matching is averaged into the flow
vector, and the game continues for up to `T` rounds or until enough volume
has been carved off.

The final state of the alive/removed partition of G, together with the
accumulated congestion, classifies the subset as
[`Balanced`](OutcomeKind::Balanced), an
[`Expander`](OutcomeKind::Expander), or a
[`NearExpander`](OutcomeKind::NearExpander) that a caller may hand to a
trimming step.

A [`Solver`] borrows both graphs, the RNG, and the split-index table for
exactly one [`Solver::compute`] call; reusing the graphs afterwards is the
caller's affair (`FlowGraph::restore_removes`).
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    algo::{FlowMatching, UnitFlow},
    node::*,
    repr::{FlowGraph, SubdivisionIndex},
};

/// Parameters configuring how the cut-matching game should run.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    /// Value `t_1` in `T = t_1 + t_2 log^2 m`.
    pub t_const: u32,

    /// Value `t_2` in `T = t_1 + t_2 log^2 m`.
    pub t_factor: f64,

    /// The minimum volume balance `0 <= b <= 0.5` the algorithm should
    /// reach before terminating with a sparse cut.
    pub min_balance: f64,

    /// True if the potential function should be sampled each iteration.
    /// This requires maintaining the entire `O(m^2)` flow matrix.
    pub sample_potential: bool,

    /// True if the flow vector should be re-seeded from the RNG each
    /// iteration and projected through all rounds played so far.
    pub resample_unit_vector: bool,

    /// Number of projection passes per resample. Ignored unless
    /// `resample_unit_vector` is set; usually 1.
    pub random_walk_steps: u32,

    /// If true, use a cut strategy which proposes perfectly balanced cuts.
    /// Otherwise use the original strategy from Lemma 3.3 in RST.
    pub balanced_cut_strategy: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_const: 0,
            t_factor: 1.0,
            min_balance: 0.0,
            sample_potential: false,
            resample_unit_vector: false,
            random_walk_steps: 0,
            balanced_cut_strategy: false,
        }
    }
}

/// How a cut-matching run classified the subset it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Both sides of G are non-empty and the removed side carries more than
    /// `num_split / (10 T)` volume in H.
    Balanced,
    /// No vertex of G was removed (or all were, in which case they have
    /// been restored): the subset is certified.
    Expander,
    /// Some vertices of G were removed but not enough volume: the alive
    /// side is a near expander.
    NearExpander,
}

/// The result of one cut-matching run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub kind: OutcomeKind,

    /// Number of iterations the game ran; 0 if it exited early.
    pub iterations: usize,

    /// Congestion of the embedding, at least 1. If the result is an
    /// expander, the conductance of the subset is `1 / congestion`.
    pub congestion: Flow,

    /// Potential samples (one per iteration plus a final one); empty unless
    /// requested.
    pub sampled_potentials: Vec<f64>,
}

impl Default for Outcome {
    fn default() -> Self {
        Self {
            kind: OutcomeKind::Expander,
            iterations: 0,
            congestion: 1,
            sampled_potentials: Vec::new(),
        }
    }
}

/// A played round: pairs of dense split indices. The game guarantees that
/// no index occurs in more than one pair of a round.
pub type Matching = Vec<(NumEdges, NumEdges)>;

/// Projects `flow` through all `rounds` in order: every pair averages its
/// two entries. O(total pairs) per call.
pub fn project_flow(rounds: &[Matching], flow: &mut [f64]) {
    for round in rounds {
        for &(i, j) in round {
            let avg = 0.5 * (flow[i as usize] + flow[j as usize]);
            flow[i as usize] = avg;
            flow[j as usize] = avg;
        }
    }
}

/// One cut-matching computation over a subset of G and its subdivision
/// graph H.
pub struct Solver<'a, R: Rng> {
    graph: &'a mut FlowGraph,
    subdiv_graph: &'a mut FlowGraph,
    rng: &'a mut R,
    subdivision: &'a mut SubdivisionIndex,

    phi: f64,
    params: Parameters,
    /// Iteration cap `T`.
    t_rounds: usize,
    /// Number of alive split vertices at construction.
    num_split: usize,

    /// Row-major `num_split x num_split` multi-commodity flow matrix; empty
    /// unless the potential is sampled.
    flow_matrix: Vec<f64>,
}

impl<'a, R: Rng> Solver<'a, R> {
    /// Prepares a cut-matching run: computes `T`, assigns the edge
    /// capacities `ceil(1 / (phi T))`, densifies the split indices, and (if
    /// requested) sets the flow matrix to the identity.
    ///
    /// # Panics
    /// Panics if the subset is empty.
    pub fn new(
        graph: &'a mut FlowGraph,
        subdiv_graph: &'a mut FlowGraph,
        rng: &'a mut R,
        subdivision: &'a mut SubdivisionIndex,
        phi: f64,
        params: Parameters,
    ) -> Self {
        assert!(
            graph.alive_count() > 0,
            "cut-matching expected a non-empty subset"
        );

        let m = graph.edge_count();
        let log_m = (m as f64).log10();
        let t_rounds = 1.max(
            (params.t_const as i64).saturating_add((params.t_factor * log_m * log_m) as i64),
        ) as usize;

        let capacity = (1.0 / phi / t_rounds as f64).ceil() as Flow;
        for u in graph.alive() {
            subdiv_graph.set_capacity(u, capacity);
        }

        let num_split = subdivision.reindex(subdiv_graph.alive());
        debug_assert_eq!(num_split, subdiv_graph.alive_count() - graph.alive_count());

        let flow_matrix = if params.sample_potential {
            let mut matrix = vec![0.0; num_split * num_split];
            for i in 0..num_split {
                matrix[i * num_split + i] = 1.0;
            }
            matrix
        } else {
            Vec::new()
        };

        Self {
            graph,
            subdiv_graph,
            rng,
            subdivision,
            phi,
            params,
            t_rounds,
            num_split,
            flow_matrix,
        }
    }

    /// Runs the game and classifies the subset.
    pub fn compute(mut self) -> Outcome {
        let mut result = Outcome::default();

        if self.num_split <= 1 {
            trace!(
                "cut-matching exited early with {} subdivision vertices",
                self.num_split
            );
            return result;
        }

        let lower_volume_balance = (self.num_split / 10 / self.t_rounds) as u64;
        let target_volume_balance = lower_volume_balance.max(
            (self.params.min_balance * self.subdiv_graph.volume_of(self.subdiv_graph.alive()) as f64)
                as u64,
        );

        let height_bound = {
            let log_ns = (self.num_split as f64).log10();
            ((1.0 / self.phi / log_ns).ceil() as Height).max(log_ns.ceil() as Height)
        };

        let mut rounds: Vec<Matching> = Vec::new();
        let mut flow = self.random_unit_vector();

        let mut iterations = 0;
        while iterations < self.t_rounds
            && self.subdiv_graph.volume_of(self.subdiv_graph.removed()) <= target_volume_balance
        {
            debug!("iteration {} out of {}", iterations, self.t_rounds);

            if self.params.sample_potential {
                result.sampled_potentials.push(self.sample_potential());
            }

            if self.params.resample_unit_vector {
                flow = self.random_unit_vector();
                for _ in 0..self.params.random_walk_steps {
                    project_flow(&rounds, &mut flow);
                }
            }

            let (mut ax_left, mut ax_right) = self.propose_cut(&flow);
            trace!(
                "computing flow with {} sources, {} sinks, max height {}",
                ax_left.len(),
                ax_right.len(),
                height_bound
            );

            self.subdiv_graph.reset();
            for &u in &ax_left {
                self.subdiv_graph.add_source(u, 1);
            }
            for &u in &ax_right {
                self.subdiv_graph.add_sink(u, 1);
            }

            let has_excess = self.subdiv_graph.route(height_bound);

            let mut removed: FxHashSet<Node> = FxHashSet::default();
            if has_excess.is_empty() {
                trace!("all flow routed");
            } else {
                trace!(
                    "{} vertices with excess, computing level cut",
                    has_excess.len()
                );
                removed.extend(self.subdiv_graph.level_cut(height_bound));
                removed.extend(has_excess);
            }
            trace!("removing {} vertices", removed.len());

            ax_left.retain(|u| !removed.contains(u));
            ax_right.retain(|u| !removed.contains(u));
            for &u in &removed {
                if !self.subdivision.is_split(u) {
                    self.graph.remove(u);
                }
                self.subdiv_graph.remove(u);
            }

            let zero_degree = self
                .subdiv_graph
                .alive()
                .filter(|&u| self.subdiv_graph.degree_of(u) == 0)
                .collect_vec();
            for &u in &zero_degree {
                if !self.subdivision.is_split(u) {
                    self.graph.remove(u);
                }
                self.subdiv_graph.remove(u);
                removed.insert(u);
            }

            if self.params.resample_unit_vector {
                for round in rounds.iter_mut() {
                    round.retain(|&(i, j)| {
                        !removed.contains(&self.subdivision.vertex_of(i as usize))
                            && !removed.contains(&self.subdivision.vertex_of(j as usize))
                    });
                }
            }

            trace!("computing matching over {} sources", ax_left.len());
            let matching = self.subdiv_graph.flow_matching(&ax_left);
            assert_eq!(
                matching.len(),
                ax_left.len(),
                "expected all source vertices to be matched"
            );

            for &(a, b) in &matching {
                let i = self.subdivision.index_of(a);
                let j = self.subdivision.index_of(b);
                let avg = 0.5 * (flow[i] + flow[j]);
                flow[i] = avg;
                flow[j] = avg;
                if self.params.sample_potential {
                    self.average_matrix_rows(i, j);
                }
            }

            if self.params.resample_unit_vector {
                rounds.push(
                    matching
                        .iter()
                        .map(|&(a, b)| {
                            (
                                self.subdivision.index_of(a) as NumEdges,
                                self.subdivision.index_of(b) as NumEdges,
                            )
                        })
                        .collect(),
                );
            }

            iterations += 1;
        }

        result.iterations = iterations;
        result.congestion = 1;
        for u in self.subdiv_graph.alive() {
            for e in self.subdiv_graph.edges_of(u) {
                result.congestion = result.congestion.max(e.congestion * iterations as Flow);
            }
        }

        if self.params.sample_potential {
            result.sampled_potentials.push(self.sample_potential());
        }

        let removed_volume = self.subdiv_graph.volume_of(self.subdiv_graph.removed());
        result.kind = if self.graph.alive_count() > 0
            && self.graph.removed_count() > 0
            && removed_volume > lower_volume_balance
        {
            debug!(
                "cut-matching ran {} iterations and resulted in a balanced cut of size ({}, {})",
                iterations,
                self.graph.alive_count(),
                self.graph.removed_count()
            );
            OutcomeKind::Balanced
        } else if self.graph.removed_count() == 0 {
            debug!("cut-matching ran {iterations} iterations and resulted in an expander");
            OutcomeKind::Expander
        } else if self.graph.alive_count() == 0 {
            self.graph.restore_removes();
            debug!("cut-matching ran {iterations} iterations and emptied the subset; restored");
            OutcomeKind::Expander
        } else {
            debug!(
                "cut-matching ran {} iterations and resulted in a near expander of size {}",
                iterations,
                self.graph.alive_count()
            );
            OutcomeKind::NearExpander
        };

        result
    }

    /// Draws a semi-random vector over the alive split vertices: each entry
    /// is `+-1`, then the whole vector is divided by the number of alive
    /// split vertices.
    fn random_unit_vector(&mut self) -> Vec<f64> {
        let mut result = vec![0.0; self.num_split];
        let mut alive_splits = 0usize;
        for u in self.subdiv_graph.alive() {
            if let Some(i) = self.subdivision.split_of(u) {
                alive_splits += 1;
                result[i] = if self.rng.random_range(0..2) == 0 {
                    -1.0
                } else {
                    1.0
                };
            }
        }
        for value in result.iter_mut() {
            *value /= alive_splits as f64;
        }
        result
    }

    /// Samples the potential function from the current flow matrix: the sum
    /// of squared deviations of the alive rows from their column averages,
    /// over alive columns.
    fn sample_potential(&self) -> f64 {
        let n = self.num_split;
        let alive = self
            .subdiv_graph
            .alive()
            .filter_map(|u| self.subdivision.split_of(u))
            .collect_vec();

        let mut avg = vec![0.0f64; n];
        for &u in &alive {
            let row = &self.flow_matrix[u * n..(u + 1) * n];
            for &v in &alive {
                avg[v] += row[v];
            }
        }
        for value in avg.iter_mut() {
            *value /= alive.len() as f64;
        }

        let mut result = 0.0;
        for &u in &alive {
            let row = &self.flow_matrix[u * n..(u + 1) * n];
            for &v in &alive {
                let d = row[v] - avg[v];
                result += d * d;
            }
        }
        result
    }

    /// Averages rows `i` and `j` of the flow matrix over every column.
    fn average_matrix_rows(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        let n = self.num_split;
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (head, tail) = self.flow_matrix.split_at_mut(hi * n);
        let row_lo = &mut head[lo * n..(lo + 1) * n];
        let row_hi = &mut tail[..n];
        for (a, b) in row_lo.iter_mut().zip(row_hi.iter_mut()) {
            let avg = 0.5 * (*a + *b);
            *a = avg;
            *b = avg;
        }
    }

    /// Creates a cut according to the cut player strategy given the current
    /// flow vector. Returns `(sources, sinks)` with both sides non-empty
    /// and the source side no larger than the sink side.
    fn propose_cut(&self, flow: &[f64]) -> (Vec<Node>, Vec<Node>) {
        let cur_splits = self.subdiv_graph.alive_count() - self.graph.alive_count();

        let mut avg = 0.0;
        for u in self.subdiv_graph.alive() {
            if let Some(i) = self.subdivision.split_of(u) {
                avg += flow[i];
            }
        }
        avg /= cur_splits as f64;

        // Partition subdivision vertices into a left and right set.
        let mut ax_left = Vec::new();
        let mut ax_right = Vec::new();
        for u in self.subdiv_graph.alive() {
            if let Some(i) = self.subdivision.split_of(u) {
                if flow[i] < avg {
                    ax_left.push(u);
                } else {
                    ax_right.push(u);
                }
            }
        }
        let left_larger = ax_left.len() > ax_right.len();
        if left_larger {
            std::mem::swap(&mut ax_left, &mut ax_right);
        }

        let mut total_potential = 0.0;
        for u in self.subdiv_graph.alive() {
            if let Some(i) = self.subdivision.split_of(u) {
                let d = flow[i] - avg;
                total_potential += d * d;
            }
        }
        let mut left_potential = 0.0;
        for &u in &ax_left {
            let d = flow[self.subdivision.index_of(u)] - avg;
            left_potential += d * d;
        }

        let key = |u: &Node| flow[self.subdivision.index_of(*u)];
        ax_left.sort_unstable_by(|a, b| key(a).total_cmp(&key(b)));
        ax_right.sort_unstable_by(|a, b| key(a).total_cmp(&key(b)));

        if ax_left.is_empty() {
            // Left side emptied by floating-point ties at the average:
            // split the right side in half instead.
            while ax_left.len() < ax_right.len() {
                ax_left.push(ax_right.pop().unwrap());
            }
            if ax_left.len() > ax_right.len() {
                std::mem::swap(&mut ax_left, &mut ax_right);
            }
        } else if left_potential > total_potential / 20.0 {
            // If the left side was not larger, remove smallest flow values
            // instead of largest from the right.
            if !left_larger {
                ax_right.reverse();
            }
        } else {
            let l: f64 = ax_left
                .iter()
                .map(|&u| (flow[self.subdivision.index_of(u)] - avg).abs())
                .sum();
            let mu = avg + 4.0 * l / cur_splits as f64;
            let lower = avg + 6.0 * l / cur_splits as f64;

            // Re-partition along mu.
            ax_left.clear();
            ax_right.clear();
            for u in self.subdiv_graph.alive() {
                if let Some(i) = self.subdivision.split_of(u) {
                    if flow[i] < mu {
                        ax_right.push(u);
                    } else if flow[i] >= lower {
                        ax_left.push(u);
                    }
                }
            }
            ax_right.reverse();
        }

        assert!(!ax_left.is_empty(), "left side of cut cannot be empty");

        if self.params.balanced_cut_strategy {
            while ax_right.len() > ax_left.len() {
                ax_right.pop();
            }
            assert_eq!(
                ax_left.len(),
                ax_right.len(),
                "proposed cut should be perfectly balanced"
            );
        } else {
            // If the left side was larger, remove smallest flow values
            // instead of largest.
            if left_larger {
                ax_left.reverse();
            }
            while ax_left.len() * 8 > cur_splits {
                ax_left.pop();
            }
            assert!(!ax_left.is_empty(), "left side of cut cannot be empty");
            debug_assert!(ax_left.len() <= ax_right.len());
        }

        (ax_left, ax_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge::Edge, repr::subdivide};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn run(
        n: NumNodes,
        edges: &[Edge],
        phi: f64,
        params: Parameters,
        seed: u64,
    ) -> (Outcome, FlowGraph) {
        let mut graph = FlowGraph::from_edges(n, edges.iter().copied());
        let (mut subdiv_graph, mut subdivision) = subdivide(n, edges);
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let outcome = Solver::new(
            &mut graph,
            &mut subdiv_graph,
            &mut rng,
            &mut subdivision,
            phi,
            params,
        )
        .compute();
        (outcome, graph)
    }

    fn assert_consistent(outcome: &Outcome, graph: &FlowGraph) {
        assert!(outcome.congestion >= 1);
        match outcome.kind {
            OutcomeKind::Expander => assert_eq!(graph.removed_count(), 0),
            OutcomeKind::Balanced | OutcomeKind::NearExpander => {
                assert!(graph.alive_count() > 0);
                assert!(graph.removed_count() > 0);
            }
        }
    }

    fn clique_edges(vertices: std::ops::Range<Node>) -> Vec<Edge> {
        vertices.tuple_combinations().map(|(u, v)| Edge(u, v)).collect_vec()
    }

    // ---------- flow projection ----------

    #[test]
    fn project_flow_no_rounds() {
        let mut xs = vec![0.1, 0.2, 0.3, 0.4];
        project_flow(&[], &mut xs);
        assert_eq!(xs, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn project_flow_single_round_single_match() {
        let mut xs = vec![0.0, 0.25, 0.5, 0.25];
        project_flow(&[vec![(0, 3)]], &mut xs);
        assert_eq!(xs, vec![0.125, 0.25, 0.5, 0.125]);
    }

    #[test]
    fn project_flow_two_rounds_single_matches() {
        let mut xs = vec![0.0, 0.25, 0.5, 0.25];
        project_flow(&[vec![(0, 3)], vec![(0, 2)]], &mut xs);
        assert_eq!(xs, vec![0.3125, 0.25, 0.3125, 0.125]);
    }

    #[test]
    fn projection_preserves_sum_and_locality() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut xs = (0..10).map(|_| rng.random_range(0..100) as f64).collect_vec();
        let before: f64 = xs.iter().sum();

        let rounds = vec![vec![(0, 4), (2, 9)], vec![(4, 2)], vec![(1, 8), (3, 5)]];
        let untouched = (xs[6], xs[7]);
        project_flow(&rounds, &mut xs);

        let after: f64 = xs.iter().sum();
        assert!((before - after).abs() < 1e-9);
        assert_eq!((xs[6], xs[7]), untouched);
    }

    // ---------- scenarios ----------

    #[test]
    fn singleton_graph_is_an_expander() {
        let (outcome, graph) = run(1, &[], 0.5, Parameters::default(), 0);
        assert_eq!(outcome.kind, OutcomeKind::Expander);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.congestion, 1);
        assert_eq!(graph.alive_count(), 1);
    }

    #[test]
    fn two_disconnected_triangles_split_apart() {
        let edges = [(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]
            .iter()
            .map(Edge::from)
            .collect_vec();
        let params = Parameters {
            balanced_cut_strategy: true,
            ..Parameters::default()
        };

        let mut found = false;
        for seed in 0..200 {
            let (outcome, graph) = run(6, &edges, 0.1, params, seed);
            assert_consistent(&outcome, &graph);

            if outcome.kind == OutcomeKind::Balanced {
                let alive = graph.alive().sorted_unstable().collect_vec();
                let removed = graph.removed().sorted_unstable().collect_vec();
                if alive == vec![0, 1, 2] && removed == vec![3, 4, 5]
                    || alive == vec![3, 4, 5] && removed == vec![0, 1, 2]
                {
                    found = true;
                    break;
                }
            }
        }
        assert!(found, "no seed split the graph into its two triangles");
    }

    #[test]
    fn dumbbell_yields_a_balanced_cut() {
        // Two K10 cliques joined by a single bridge edge.
        let mut edges = clique_edges(0..10);
        edges.extend(clique_edges(10..20));
        edges.push(Edge(9, 10));

        // Extra iterations push the edge capacity down to 1, so the bridge
        // congests as soon as the proposal is lopsided across the cliques.
        let params = Parameters {
            t_const: 17,
            balanced_cut_strategy: true,
            ..Parameters::default()
        };

        let mut found = false;
        for seed in 0..40 {
            let (outcome, graph) = run(20, &edges, 0.05, params, seed);
            assert_consistent(&outcome, &graph);

            if outcome.kind == OutcomeKind::Balanced {
                assert!(graph.removed_count() < 20);
                assert!(graph.alive_count() < 20);
                found = true;
                break;
            }
        }
        assert!(found, "no seed produced a balanced cut on the dumbbell");
    }

    #[test]
    fn random_regular_graph_is_certified() {
        use crate::gens::{DegreeGen, GraphGenerator, NumNodesGen, RandomRegular};

        let mut rng = Pcg64Mcg::seed_from_u64(58);
        let edges = RandomRegular::new().nodes(200).degree(3).generate(&mut rng);

        let (outcome, graph) = run(200, &edges, 0.001, Parameters::default(), 58);
        assert_eq!(outcome.kind, OutcomeKind::Expander);
        assert_eq!(graph.removed_count(), 0);
        // T = 1 + floor(log10(300)^2) with t_const = 0, t_factor = 1
        assert_eq!(outcome.iterations, 6);
        assert!(outcome.congestion >= 1);
    }

    #[test]
    fn complete_graph_with_resampling() {
        let edges = clique_edges(0..5);
        let params = Parameters {
            resample_unit_vector: true,
            random_walk_steps: 1,
            ..Parameters::default()
        };

        // phi small enough that the height bound clamps to 2|V(H)| + 1 and
        // every feasible unit is routed.
        for seed in 0..10 {
            let (outcome, graph) = run(5, &edges, 0.01, params, seed);
            assert_eq!(outcome.kind, OutcomeKind::Expander);
            assert_eq!(graph.removed_count(), 0);
            assert_eq!(outcome.iterations, 1);
        }
    }

    #[test]
    fn potential_sampling_starts_at_identity() {
        let edges = clique_edges(0..4);
        let params = Parameters {
            sample_potential: true,
            balanced_cut_strategy: true,
            ..Parameters::default()
        };

        let (outcome, _) = run(4, &edges, 0.05, params, 3);
        // K4 has m = 6, so the identity flow matrix starts at potential
        // num_split - 1 = 5.
        assert_eq!(outcome.sampled_potentials.len(), outcome.iterations + 1);
        assert!((outcome.sampled_potentials[0] - 5.0).abs() < 1e-9);
        let last = *outcome.sampled_potentials.last().unwrap();
        assert!(last <= outcome.sampled_potentials[0] + 1e-9);
    }

    #[test]
    fn without_sampling_no_potentials_are_recorded() {
        let edges = clique_edges(0..4);
        let params = Parameters {
            balanced_cut_strategy: true,
            ..Parameters::default()
        };
        let (outcome, _) = run(4, &edges, 0.05, params, 3);
        assert!(outcome.sampled_potentials.is_empty());
    }

    #[test]
    #[should_panic]
    fn empty_subset_is_rejected() {
        let mut graph = FlowGraph::from_edges(1, std::iter::empty::<Edge>());
        graph.remove(0);
        let (mut subdiv_graph, mut subdivision) = subdivide(1, &[]);
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        let _ = Solver::new(
            &mut graph,
            &mut subdiv_graph,
            &mut rng,
            &mut subdivision,
            0.5,
            Parameters::default(),
        );
    }
}

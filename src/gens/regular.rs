/*!
# Random Regular Graphs

Uniform-ish random `d`-regular simple graphs via the **pairing model**
(configuration model): every node contributes `d` stubs, the stubs are
shuffled and paired up, and the whole sample is rejected if it contains a
self-loop or a duplicate edge. For constant `d` the acceptance probability
is bounded away from zero, so the rejection loop terminates quickly.
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::seq::SliceRandom;

use super::*;

/// Generator for random `d`-regular simple graphs on `n` nodes.
///
/// Requires `d < n` and `n * d` even; [`GraphGenerator::generate`] panics
/// otherwise.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomRegular {
    n: NumNodes,
    degree: NumNodes,
}

impl RandomRegular {
    /// Creates a new unconfigured generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomRegular {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl DegreeGen for RandomRegular {
    fn set_degree(&mut self, degree: NumNodes) {
        self.degree = degree;
    }
}

impl GraphGenerator for RandomRegular {
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let (n, d) = (self.n, self.degree);
        assert!(n > 0, "at least one node must be generated");
        assert!(d < n, "degree must be smaller than the number of nodes");
        assert!(
            (n as u64 * d as u64) % 2 == 0,
            "n * d must be even for a d-regular graph to exist"
        );

        let mut stubs: Vec<Node> = (0..n)
            .flat_map(|u| std::iter::repeat(u).take(d as usize))
            .collect();

        loop {
            stubs.shuffle(rng);

            let mut seen = FxHashSet::default();
            let mut edges = Vec::with_capacity(stubs.len() / 2);
            let simple = stubs.iter().copied().tuples().all(|(u, v)| {
                let e = Edge(u, v).normalized();
                if e.is_loop() || !seen.insert(e) {
                    return false;
                }
                edges.push(e);
                true
            });

            if simple {
                return edges;
            }
        }
    }
}

/*!
# Graph Generators

Random edge-list generators used to produce benchmark and test instances.
Generators are configurable structs following the *Builder* / *Setter*
pattern: configure via `.nodes(n)` / `.degree(d)` (or the `set_*` setters),
then produce an edge list with [`GraphGenerator::generate`].

```
use expander_decomp::gens::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let edges = RandomRegular::new().nodes(50).degree(3).generate(rng);
assert_eq!(edges.len(), 75);
```
*/

use rand::Rng;

use crate::edge::Edge;
use crate::node::*;

pub mod regular;

pub use regular::*;

/// Trait for generators that allow specifying the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the generator (mutable setter).
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes and returns the generator (builder style).
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }

    /// Constructs a generator with `n` nodes using `Default` + builder.
    fn with_nodes(n: NumNodes) -> Self
    where
        Self: Default,
    {
        Self::default().nodes(n)
    }
}

/// Trait for generators that allow specifying a uniform vertex degree.
pub trait DegreeGen: Sized {
    /// Sets the degree in the generator (mutable setter).
    fn set_degree(&mut self, degree: NumNodes);

    /// Sets the degree and returns the generator (builder style).
    fn degree(mut self, degree: NumNodes) -> Self {
        self.set_degree(degree);
        self
    }
}

/// General trait for a configured random edge generator.
pub trait GraphGenerator {
    /// Generates the full edge list of one random instance.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng;
}

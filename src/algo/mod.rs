/*!
# Algorithms

The three algorithmic layers of the cut-matching core, bottom-up:

- [`UnitFlow`](unit_flow::UnitFlow): bounded-height push-relabel with
  degree-capped pushes, plus level-cut extraction.
- [`FlowMatching`](matching::FlowMatching): recovers a source/sink matching
  from a routed flow.
- [`cut_matching`]: the iterative cut-matching game driving both.
*/

pub mod cut_matching;
pub mod matching;
pub mod unit_flow;

pub use cut_matching::{Outcome, OutcomeKind, Parameters, Solver};
pub use matching::FlowMatching;
pub use unit_flow::UnitFlow;

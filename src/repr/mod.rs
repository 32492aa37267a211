/*!
# Graph Storage

Storage backends for the decomposition core:

- [`SubsetList`](subset::SubsetList): the alive/removed vertex partition.
- [`FlowGraph`](flow_graph::FlowGraph): an undirected multigraph of paired
  flow edges with subset semantics and push-relabel vertex state.
- [`subdivide`](subdivision::subdivide): subdivision-graph construction and
  the split-index table.
*/

pub mod flow_graph;
pub mod subdivision;
pub mod subset;

pub use flow_graph::{FlowEdge, FlowGraph};
pub use subdivision::{subdivide, SubdivisionIndex};
pub use subset::SubsetList;

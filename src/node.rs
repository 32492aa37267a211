/*!
# Node & Quantity Types

Vertices are plain integers in the range `0..n`. As most graphs handled here
stay far below `2^32` vertices, `u32` suffices and halves the memory of the
adjacency structures compared to `u64`/`usize`.

Flow quantities are signed 64-bit: a directed edge and its reverse always
carry flows of opposite sign, and congestion accumulates across iterations.
*/

/// A vertex id in `0..n`. Applies to both the original graph and the
/// subdivision graph (where ids `>= n` denote split vertices).
pub type Node = u32;

/// Number of vertices in a graph.
///
/// If wanting more than `2^32 - 1` vertices, change manually to `u64`.
pub type NumNodes = u32;

/// Number of edges in a graph.
///
/// Limited to `u32` (maximum `2^32 - 1` edges). Split-vertex indices live in
/// `0..m` and therefore share this type.
pub type NumEdges = u32;

/// Flow on a directed edge. Signed: the reverse edge carries the negated
/// value. Also used for source mass, sink capacities, and congestion.
pub type Flow = i64;

/// A push-relabel height label. Bounded by `2n + 1`, so `u32` is plenty.
pub type Height = u32;

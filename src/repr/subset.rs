/*!
# Alive/Removed Vertex Partition

[`SubsetList`] maintains a partition of the vertex ids `0..n` into an
**alive** set and a **removed** set. It is the bookkeeping half of the
subset graph: the graph decides what removal means for edges, this structure
tracks membership and supports

- O(1) `remove`,
- iteration over either side without copying,
- restoring removed vertices in LIFO order (`restore_next`).

Internally the ids are kept as a permutation with a position table: alive
vertices occupy the prefix `[0, alive_count)`, removed vertices the suffix
in most-recently-removed-first order. Removal therefore permutes the
iteration order of the alive set; callers that mutate while iterating must
snapshot first.
*/

use crate::node::*;

/// A two-sided partition of `0..n` with O(1) removal and LIFO restore.
#[derive(Clone)]
pub struct SubsetList {
    /// Permutation of all ids: alive prefix, removed suffix.
    vertices: Vec<Node>,
    /// Position of each id inside `vertices`.
    pos: Vec<NumNodes>,
    alive: usize,
}

impl SubsetList {
    /// Creates a partition of `0..n` with every id alive.
    pub fn new(n: NumNodes) -> Self {
        Self {
            vertices: (0..n).collect(),
            pos: (0..n).collect(),
            alive: n as usize,
        }
    }

    /// Total number of ids, alive or removed.
    #[inline]
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Number of alive ids.
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    /// Number of removed ids.
    #[inline]
    pub fn removed_count(&self) -> usize {
        self.vertices.len() - self.alive
    }

    /// Returns `true` if `u` is alive.
    #[inline]
    pub fn is_alive(&self, u: Node) -> bool {
        (self.pos[u as usize] as usize) < self.alive
    }

    /// Iterates over all alive ids.
    #[inline]
    pub fn alive(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices[..self.alive].iter().copied()
    }

    /// Iterates over all removed ids, most recently removed first.
    #[inline]
    pub fn removed(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices[self.alive..].iter().copied()
    }

    /// Moves `u` from the alive to the removed side.
    ///
    /// # Panics
    /// Panics if `u` is already removed.
    pub fn remove(&mut self, u: Node) {
        assert!(self.is_alive(u), "vertex {u} is already removed");
        self.swap_into(u, self.alive - 1);
        self.alive -= 1;
    }

    /// Restores the most recently removed id and returns it, or `None` if
    /// everything is alive.
    pub fn restore_next(&mut self) -> Option<Node> {
        if self.alive == self.vertices.len() {
            return None;
        }
        let u = self.vertices[self.alive];
        self.alive += 1;
        Some(u)
    }

    fn swap_into(&mut self, u: Node, target: usize) {
        let from = self.pos[u as usize] as usize;
        let other = self.vertices[target];
        self.vertices.swap(from, target);
        self.pos[u as usize] = target as NumNodes;
        self.pos[other as usize] = from as NumNodes;
    }
}

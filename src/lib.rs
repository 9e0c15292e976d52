/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : every edge carries a signed integer weight
- **w**ell-indexed : nodes are numbered `0` to `n - 1` and may carry an optional label

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as
compared to `u64/usize`. **Edges** are simple tuple-structs `Edge(Node, Node, Weight)` with
`Weight = i64`. The absence of an edge is always represented out-of-band (an optional weight),
never by a magic weight value, so a stored weight of `0` is a perfectly legal edge.

### Directed vs Undirected

Directedness is fixed at construction through the type of the graph:

- In an **undirected** graph, inserting `Edge(u, v, w)` also records the mirrored arc `(v, u, w)`.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are distinct.

Algorithms that are only meaningful for one orientation (topological sorting on directed graphs,
spanning trees on undirected ones) are constrained to it at compile time.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjArray`](crate::repr::AdjArray) / [`AdjArrayUndir`](crate::repr::AdjArrayUndir) —
  sparse per-node arrays of outgoing arcs,
- [`AdjMatrix`](crate::repr::AdjMatrix) / [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir) —
  dense `n x n` weight tables.

Both expose the same query contract, so every algorithm runs on either backend.

# Design

Graphs are built once (fallible insertion, range-checked) and then only queried; algorithms take
the graph by shared reference and never mutate it. Failures are reported through
[`GraphError`](crate::error::GraphError) — an out-of-range vertex, a disconnected input to a
spanning-tree computation, or a cyclic input to a topological sort — and are never papered over
with partial results.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all
  standard graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  (`graph.bfs(start)`), Dijkstra (`graph.dijkstra(start)`), Prim/Kruskal (`graph.prim()`),
  and topological sorting (`graph.topo_sort_kahn()`),
- [`io`] includes plain-text dump writers for adjacency matrices and adjacency lists,
- [`utils`] includes helper structures such as [`DisjointSets`](crate::utils::DisjointSets)
  and the [`Set`](crate::utils::Set) abstraction used by the traversal machinery.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}

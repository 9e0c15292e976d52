/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this
crate. All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest-path, spanning-tree and topological-sorting routines.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Every algorithm treats the graph as an immutable snapshot: scratch state (visited sets, distance
arrays) is allocated per call, so a graph may be queried any number of times.
*/

mod mst;
mod shortest_path;
mod topo;
mod traversal;

use crate::{prelude::*, utils::*};

pub use mst::*;
pub use shortest_path::*;
pub use topo::*;
pub use traversal::*;

/// Trait for algorithm state that holds a reference to the graph it runs on.
pub trait WithGraphRef<G> {
    /// Returns the graph being processed.
    fn graph_ref(&self) -> &G;
}

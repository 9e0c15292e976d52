/*!
# Graph Representations

Two storage backends implement the same query contract:

- [`ArrNeighborhood`] keeps a per-node array of outgoing arcs (sparse,
  "adjacency list"),
- [`RowNeighborhood`] keeps a dense weight row per node ("adjacency matrix").

A backend is combined with a directedness through [`DirectedGraph`] or
[`UndirectedGraph`], yielding the four concrete representations
[`AdjArray`], [`AdjMatrix`], [`AdjArrayUndir`] and [`AdjMatrixUndir`].
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A Neighborhood stores the outgoing arcs of a single node as
/// `(target, weight)` pairs. Enumeration order is part of the contract:
/// insertion order for sparse implementations, increasing target index for
/// dense ones.
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for graphs with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of arcs in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all arcs in the Neighborhood
    fn arcs(&self) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over all targets in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.arcs().map(|(v, _)| v)
    }

    /// Returns the weight of the arc towards `v`, or `None` if there is none.
    /// If parallel arcs exist, the first one in enumeration order wins.
    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.arcs().find(|&(x, _)| x == v).map(|(_, w)| w)
    }

    /// Records an arc towards `v`.
    /// ** Might panic if `v >= n` or `w == INVALID_WEIGHT` **
    fn add_arc(&mut self, v: Node, w: Weight);
}

pub(crate) mod macros {
    /// Implements every trait that is identical for the directed and the
    /// undirected graph struct; only edge insertion differs between the two.
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $dir:ident) => {
            impl<Nbs: Neighborhood, L> GraphType for $struct<Nbs, L> {
                type Dir = $dir;
            }

            impl<Nbs: Neighborhood, L> GraphNodeOrder for $struct<Nbs, L> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.nbs.len() as NumNodes
                }

                fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
                    self.vertices_range()
                }
            }

            impl<Nbs: Neighborhood, L> GraphEdgeOrder for $struct<Nbs, L> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<Nbs: Neighborhood, L> AdjacencyList for $struct<Nbs, L> {
                fn arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
                    self.nbs[u as usize].arcs()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.nbs[u as usize].num_of_neighbors()
                }
            }

            impl<Nbs: Neighborhood, L> AdjacencyTest for $struct<Nbs, L> {
                fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
                    assert!(v < self.number_of_nodes());
                    self.nbs[u as usize].weight_to(v)
                }
            }

            impl<Nbs: Neighborhood, L> GraphNew for $struct<Nbs, L> {
                fn new(n: NumNodes) -> Self {
                    assert!(n > 0);
                    Self {
                        nbs: vec![Nbs::new(n); n as usize],
                        labels: (0..n).map(|_| None).collect(),
                        num_edges: 0,
                    }
                }
            }

            impl<Nbs: Neighborhood, L> VertexLabeling<L> for $struct<Nbs, L> {
                fn set_vertex_label(&mut self, u: Node, label: L) -> Result<()> {
                    self.check_vertex(u)?;
                    self.labels[u as usize] = Some(label);
                    Ok(())
                }

                fn vertex_label(&self, u: Node) -> Option<&L> {
                    self.labels.get(u as usize).and_then(|l| l.as_ref())
                }
            }

            // Pin the label type of the trait constructors to `()` so that
            // `AdjArray::new(5)` works without a turbofish; labeled graphs
            // name their label type and go through the same traits.
            impl<Nbs: Neighborhood> $struct<Nbs, ()> {
                /// Creates an empty unlabeled graph with n singleton nodes.
                /// ** Panics if `n == 0` **
                pub fn new(n: NumNodes) -> Self {
                    <Self as GraphNew>::new(n)
                }

                /// Creates an unlabeled graph from a number of nodes and an
                /// iterator over edges.
                pub fn from_edges(
                    n: NumNodes,
                    edges: impl IntoIterator<Item = impl Into<Edge>>,
                ) -> Result<Self> {
                    <Self as GraphFromScratch>::from_edges(n, edges)
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}

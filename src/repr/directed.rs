/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a
[`Neighborhood`] type, which controls how adjacency information is stored,
and an optional label type for vertex payloads.

## Provided Representations

- [`AdjArray`] — sparse per-node arc arrays.
- [`AdjMatrix`] — dense weight rows.
*/

use crate::repr::macros::impl_common_graph_ops;
use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing only **outgoing arcs**.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `L`: type of the optional per-vertex labels (defaults to none).
#[derive(Clone)]
pub struct DirectedGraph<Nbs: Neighborhood, L = ()> {
    nbs: Vec<Nbs>,
    labels: Vec<Option<L>>,
    num_edges: NumEdges,
}

/// Directed graph using arc arrays (`Vec<(Node, Weight)>`).
pub type AdjArray<L = ()> = DirectedGraph<ArrNeighborhood, L>;

/// Directed graph using dense weight rows.
pub type AdjMatrix<L = ()> = DirectedGraph<RowNeighborhood, L>;

impl_common_graph_ops!(DirectedGraph => Directed);

impl<Nbs: Neighborhood, L> GraphEdgeInsertion for DirectedGraph<Nbs, L> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.nbs[u as usize].add_arc(v, w);
        self.num_edges += 1;

        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    false,
    (GraphNew, AdjacencyList, GraphEdgeInsertion, VertexLabeling)
);

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    false,
    (GraphNew, AdjacencyList, GraphEdgeInsertion, VertexLabeling)
);

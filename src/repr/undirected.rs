use crate::repr::macros::impl_common_graph_ops;
use crate::testing::test_graph_ops;

use super::*;

/// An undirected graph representation.
///
/// Edge insertion records the arc in both endpoint neighborhoods (once for
/// self-loops), so every query sees the symmetric adjacency.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood, L = ()> {
    nbs: Vec<Nbs>,
    labels: Vec<Option<L>>,
    num_edges: NumEdges,
}

/// Undirected graph using arc arrays (`Vec<(Node, Weight)>`).
pub type AdjArrayUndir<L = ()> = UndirectedGraph<ArrNeighborhood, L>;

/// Undirected graph using dense weight rows.
pub type AdjMatrixUndir<L = ()> = UndirectedGraph<RowNeighborhood, L>;

impl_common_graph_ops!(UndirectedGraph => Undirected);

impl<Nbs: Neighborhood, L> GraphEdgeInsertion for UndirectedGraph<Nbs, L> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.nbs[u as usize].add_arc(v, w);
        if u != v {
            self.nbs[v as usize].add_arc(u, w);
        }
        self.num_edges += 1;

        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeInsertion, VertexLabeling)
);

test_graph_ops!(
    test_adj_matrix_undir,
    AdjMatrixUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeInsertion, VertexLabeling)
);

/*!
Minimum spanning trees of connected, undirected, weighted graphs.

Both algorithms demand a connected input: a graph without a spanning tree
makes them fail with [`GraphError::GraphNotConnected`] instead of silently
returning a partial forest. Non-negative weights are assumed (as for
Dijkstra, negative weights are undefined, not rejected).

The trait is only implemented for undirected representations; asking a
directed graph for a spanning tree is a compile error.
*/

use super::*;
use itertools::Itertools;

/// The result of a spanning-tree computation: `V - 1` accepted edges and
/// their weight sum.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// The accepted edges in acceptance order. Prim orients each edge from
    /// its tree parent towards the grown vertex, Kruskal keeps edges
    /// normalized.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges in the tree (`V - 1` for `V` spanned vertices)
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// The sum of all accepted edge weights
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns *true* if the tree contains `edge` in either orientation,
    /// with matching weight.
    pub fn contains(&self, edge: Edge) -> bool {
        self.edges
            .iter()
            .any(|e| *e == edge || *e == edge.reverse())
    }
}

/// Provides minimum-spanning-tree computations on undirected graphs.
pub trait MinimumSpanningTree:
    AdjacencyList + GraphType<Dir = Undirected> + Sized
{
    /// Grows a minimum spanning tree from `start` with Prim's algorithm:
    /// each of `V` rounds selects the cheapest frontier vertex not yet in
    /// the tree (ties by index), records the connecting edge (except for
    /// `start`, which has no parent), and relaxes the best known connecting
    /// weight of its neighbors.
    ///
    /// A round without an eligible vertex means the graph is disconnected —
    /// [`GraphError::GraphNotConnected`].
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 9)]).unwrap();
    /// assert_eq!(g.prim().unwrap().total_weight(), 3);
    /// ```
    fn prim_from(&self, start: Node) -> Result<SpanningTree> {
        self.check_vertex(start)?;

        let n = self.len();
        let mut in_tree = self.vertex_bitset_unset();
        let mut best: Vec<Option<Weight>> = vec![None; n];
        let mut parents: Vec<Node> = vec![INVALID_NODE; n];
        best[start as usize] = Some(0);

        let mut edges = Vec::with_capacity(n - 1);
        let mut total_weight: Weight = 0;

        for _ in 0..n {
            let Some((w, u)) = self
                .vertices()
                .filter(|&v| !in_tree.get_bit(v))
                .filter_map(|v| best[v as usize].map(|b| (b, v)))
                .min()
            else {
                return Err(GraphError::GraphNotConnected);
            };
            in_tree.set_bit(u);

            if parents[u as usize] != INVALID_NODE {
                edges.push(Edge(parents[u as usize], u, w));
                total_weight += w;
            }

            for (v, wv) in self.arcs_of(u) {
                if !in_tree.get_bit(v) && best[v as usize].map_or(true, |b| wv < b) {
                    best[v as usize] = Some(wv);
                    parents[v as usize] = u;
                }
            }
        }

        Ok(SpanningTree {
            edges,
            total_weight,
        })
    }

    /// [`MinimumSpanningTree::prim_from`] rooted at vertex `0`.
    fn prim(&self) -> Result<SpanningTree> {
        self.prim_from(0)
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm: every
    /// stored edge is collected exactly once (self-loops can never be part
    /// of a tree and are skipped), sorted by ascending weight — the sort is
    /// stable, so equal weights keep their enumeration order — and greedily
    /// accepted whenever its endpoints are not yet connected in a
    /// [`DisjointSets`] structure.
    ///
    /// Fewer than `V - 1` acceptable edges mean the graph is disconnected —
    /// [`GraphError::GraphNotConnected`].
    fn kruskal(&self) -> Result<SpanningTree> {
        let n = self.len();

        let mut edges = self
            .edges(true)
            .filter(|e| !e.is_loop())
            .collect_vec();
        edges.sort_by_key(|e| e.2);

        let mut sets = DisjointSets::new(self.number_of_nodes());
        let mut accepted = Vec::with_capacity(n - 1);
        let mut total_weight: Weight = 0;

        for e in edges {
            if sets.union(e.0, e.1) {
                total_weight += e.2;
                accepted.push(e);
                if accepted.len() == n - 1 {
                    break;
                }
            }
        }

        if accepted.len() != n - 1 {
            return Err(GraphError::GraphNotConnected);
        }

        Ok(SpanningTree {
            edges: accepted,
            total_weight,
        })
    }
}

impl<G> MinimumSpanningTree for G where
    G: AdjacencyList + GraphType<Dir = Undirected> + Sized
{
}

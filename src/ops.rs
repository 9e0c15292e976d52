/*!
# Graph Operations

The traits in this module form the contract between the storage backends in
[`repr`](crate::repr) and the algorithms in [`algo`](crate::algo). A graph is
built once through the fallible insertion traits and afterwards only queried;
all query methods are side-effect-free and may be called any number of times.
*/

use itertools::Itertools;

use crate::edge::*;
use crate::error::*;
use crate::node::*;

/// Type-level directedness marker. Which marker a graph carries is fixed by
/// its representation type and decided at construction.
pub trait Direction {
    const IS_DIRECTED: bool;
}

/// Marker type for directed graphs
pub struct Directed;

/// Marker type for undirected graphs
pub struct Undirected;

impl Direction for Directed {
    const IS_DIRECTED: bool = true;
}

impl Direction for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Associates a graph representation with its [`Direction`] marker.
///
/// Algorithms that only make sense for one orientation bound their
/// implementations with `GraphType<Dir = Directed>` (topological sorting) or
/// `GraphType<Dir = Undirected>` (spanning trees), turning misuse into a
/// compile error instead of a runtime one.
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if edge insertion is mirrored
    fn is_undirected() -> bool {
        !Self::Dir::IS_DIRECTED
    }

    /// Returns *true* if edges have an orientation
    fn is_directed() -> bool {
        Self::Dir::IS_DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns a range of all vertices. In contrast to `self.vertices()`, the
    /// range does not borrow self and hence may be used where additional
    /// references of self are needed.
    fn vertices_range(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `u` unchanged if it is a valid vertex of this graph and
    /// [`GraphError::OutOfRange`] otherwise.
    fn check_vertex(&self, u: Node) -> Result<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            Err(GraphError::OutOfRange {
                vertex: u,
                len: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of recorded edges of the graph.
    ///
    /// Mirrored arcs of an undirected graph count as one edge. This counter
    /// only ever increases: edges cannot be removed once inserted.
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the outgoing arcs of a given vertex as
    /// `(target, weight)` pairs, in the enumeration order of the backing
    /// storage (insertion order for arrays, increasing index for matrices).
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u).map(|(v, _)| v)
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.arcs_of(u)
            .map(move |(v, w)| Edge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered;
    /// for undirected graphs this yields every stored edge exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait to query single edges and their weights.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the arc `(u, v)` or `None` if no such arc exists.
    /// If the representation admits parallel arcs, the first recorded one wins.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes.
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self;
}

/// Provides fallible, range-checked edge insertion.
///
/// Insertion is the only mutation a graph supports: vertex count is fixed by
/// the constructor and edges are never removed.
pub trait GraphEdgeInsertion: GraphNew + GraphNodeOrder {
    /// Records the edge `(u, v)` with weight `w` and increments the edge
    /// count. Undirected representations also record the mirrored arc.
    ///
    /// Weights must be representable, i.e. `w != INVALID_WEIGHT`.
    /// Returns [`GraphError::OutOfRange`] if `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()>;

    /// Adds all edges in the collection, stopping at the first failure.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeInsertion> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// Access to the optional, opaque per-vertex payloads of a graph.
///
/// Labels live in a side array indexed by the vertex and do not influence any
/// algorithm; they only resurface in the adjacency-list dump.
pub trait VertexLabeling<L>: GraphNodeOrder {
    /// Stores `label` as the payload of vertex `u`, replacing any previous one.
    /// Returns [`GraphError::OutOfRange`] if `u >= n`.
    fn set_vertex_label(&mut self, u: Node, label: L) -> Result<()>;

    /// Returns the payload of vertex `u`, or `None` if none was stored
    /// (or `u` is out of range).
    fn vertex_label(&self, u: Node) -> Option<&L>;
}

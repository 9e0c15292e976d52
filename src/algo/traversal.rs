/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Lazy traversal iterators (BFS, DFS, with and without predecessor tracking).
- Abstractions (`TraversalState`, `TraversalTree`, `RankFromOrder`) that turn
  traversals into useful structures such as parent arrays or rankings.
- A high-level [`Traversal`] trait that exposes the traversal algorithms
  directly as methods on graph data structures.

A traversal covers exactly the component of its start vertex, each vertex
once; callers wanting full coverage iterate over the unvisited vertices
themselves. The breadth-first frontier is a FIFO queue, so siblings are
visited in arc enumeration order. The depth-first iterator keeps an explicit
stack of `(vertex, arc-cursor)` frames and therefore yields the exact
pre-order of the equivalent recursive descent, without recursing.
*/

use super::*;
use std::collections::VecDeque;

/// Common interface for maintaining and querying visited-states
/// during a traversal.
///
/// This allows traversal algorithms to be parameterized by different
/// set implementations (e.g., `NodeBitSet`, `FxHashSet`) without changing
/// the traversal logic.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// A lazy breadth-first traversal over the component of a start vertex.
///
/// Maintains a FIFO frontier and a set of discovered nodes; a node is marked
/// when it enters the frontier, so it can never be enqueued twice.
/// Parameterized by the type of items yielded (either `Node` or
/// [`PredecessorOfNode`]) and the visited-set implementation.
pub struct BreadthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    frontier: VecDeque<I>,
}

/// A BFS iterator with a caller-chosen visited-set implementation.
pub type BFSWithSet<'a, G, V> = BreadthFirstSearch<'a, G, Node, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode, NodeBitSet>;

impl<'a, G, I, V> BreadthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex of `graph`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_vertex(start)?;

        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);

        Ok(Self {
            graph,
            visited,
            frontier: VecDeque::from([I::new_without_predecessor(start)]),
        })
    }
}

impl<G, I, V> WithGraphRef<G> for BreadthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, I, V> TraversalState<V> for BreadthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, I, V> Iterator for BreadthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.frontier.pop_front()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.contains(&v) {
                self.visited.insert(v);
                self.frontier.push_back(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // everything in the frontier will be yielded, plus at most all
        // undiscovered vertices
        (
            self.frontier.len(),
            Some(self.frontier.len() + self.graph.len() - self.visited.len()),
        )
    }
}

/// A lazy depth-first traversal over the component of a start vertex.
///
/// Keeps an explicit stack of `(vertex, arc-cursor)` frames instead of
/// recursing: the top frame scans for its first not-yet-visited neighbor,
/// descends into it, and is popped once its arcs are exhausted. Nodes are
/// yielded in the pre-order of the equivalent recursion, and a node is
/// marked visited when it is yielded, so cycles cannot loop the iterator.
pub struct DepthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    frames: Vec<(Node, NumNodes)>,
    root: Option<I>,
}

/// A DFS iterator with a caller-chosen visited-set implementation.
pub type DFSWithSet<'a, G, V> = DepthFirstSearch<'a, G, Node, V>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first (recursive pre-order) order from a given starting node.
pub type DFS<'a, G> = DepthFirstSearch<'a, G, Node, NodeBitSet>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> = DepthFirstSearch<'a, G, PredecessorOfNode, NodeBitSet>;

impl<'a, G, I, V> DepthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex of `graph`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_vertex(start)?;

        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);

        Ok(Self {
            graph,
            visited,
            frames: vec![(start, 0)],
            root: Some(I::new_without_predecessor(start)),
        })
    }
}

impl<G, I, V> WithGraphRef<G> for DepthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, I, V> TraversalState<V> for DepthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, I, V> Iterator for DepthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }

        while let Some(frame) = self.frames.last_mut() {
            let (u, cursor) = *frame;

            let mut advanced = cursor;
            let mut descend = None;
            for v in self.graph.neighbors_of(u).skip(cursor as usize) {
                advanced += 1;
                if !self.visited.contains(&v) {
                    descend = Some(v);
                    break;
                }
            }
            frame.1 = advanced;

            match descend {
                Some(v) => {
                    self.visited.insert(v);
                    self.frames.push((v, 0));
                    return Some(I::new_with_predecessor(u, v));
                }
                None => {
                    self.frames.pop();
                }
            }
        }

        None
    }
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, V> RankFromOrder<'a, G> for BreadthFirstSearch<'a, G, Node, V>
where
    G: AdjacencyList,
    V: Set<Node>,
{
}

impl<'a, G, V> RankFromOrder<'a, G> for DepthFirstSearch<'a, G, Node, V>
where
    G: AdjacencyList,
    V: Set<Node>,
{
}

/// Extension trait for traversal iterators that return [`PredecessorOfNode`],
/// enabling extraction of the implied spanning tree structure.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    ///
    /// - For each visited node `v`, `tree[v]` is set to its predecessor.
    /// - Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `tree.len()` must be at least `graph.len()`.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.len()` where
    /// each node is initially set to be its own parent.
    /// Then fills in the traversal tree structure using `parent_array_into`.
    ///
    /// The root (and every unreached node) therefore remains its own parent;
    /// [`parent_path`](crate::algo::parent_path) consumes arrays of this shape.
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }
}

impl<'a, G, V> TraversalTree<'a, G> for BreadthFirstSearch<'a, G, PredecessorOfNode, V>
where
    G: AdjacencyList,
    V: Set<Node>,
{
}

impl<'a, G, V> TraversalTree<'a, G> for DepthFirstSearch<'a, G, PredecessorOfNode, V>
where
    G: AdjacencyList,
    V: Set<Node>,
{
}

/// Provides convenient traversal methods directly on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1, 4), (1, 2, 7)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Result<DFS<'_, Self>> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> Result<BFSWithPredecessor<'_, Self>> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> Result<DFSWithPredecessor<'_, Self>> {
        DFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn example_graph() -> AdjArrayUndir {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        AdjArrayUndir::from_edges(
            6,
            [
                (1, 2, 1),
                (1, 0, 2),
                (4, 3, 3),
                (0, 5, 4),
                (2, 4, 5),
                (5, 4, 6),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bfs_order() {
        let graph = example_graph();

        {
            let order: Vec<Node> = graph.bfs(1).unwrap().collect();
            assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);
        }

        {
            // start inside the cycle, only part of the graph is new
            let order: Vec<Node> = BFS::new(&graph, 3).unwrap().collect();
            assert_eq!(order[0], 3);
            assert_eq!(order.len(), 6);
        }
    }

    #[test]
    fn bfs_on_component_only() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1, 1), (2, 3, 2)]).unwrap();

        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0, 1]);
        assert_eq!(graph.bfs(2).unwrap().collect_vec(), vec![2, 3]);
    }

    #[test]
    fn bfs_single_vertex() {
        let graph = AdjArrayUndir::new(1);
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), vec![0]);
    }

    #[test]
    fn bfs_with_sparse_set() {
        let graph = example_graph();
        let order: Vec<Node> = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 1)
            .unwrap()
            .collect();
        assert_eq!(order, graph.bfs(1).unwrap().collect_vec());
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = example_graph();

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .unwrap()
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn bfs_tree() {
        let graph = example_graph();
        let tree = graph.bfs_with_predecessor(1).unwrap().parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 2, 0]);
    }

    #[test]
    fn dfs_order_matches_recursion() {
        // 0 -> {1, 2}, 1 -> 3, 2 -> 3: recursion visits 0, 1, 3, 2
        let graph =
            AdjArray::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArrayUndir::from_edges(
            6,
            [(1, 2, 1), (1, 0, 1), (4, 3, 1), (0, 5, 1), (5, 4, 1)],
        )
        .unwrap();

        // neighbors of 1 in insertion order: first 2 (dead end), then 0
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), vec![1, 2, 0, 5, 4, 3]);
        assert_eq!(graph.dfs(5).unwrap().collect_vec(), vec![5, 0, 1, 2, 4, 3]);
    }

    #[test]
    fn dfs_on_cycle_terminates() {
        let graph = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn dfs_tree() {
        let graph = AdjArrayUndir::from_edges(
            6,
            [(1, 2, 1), (1, 0, 1), (4, 3, 1), (0, 5, 1), (5, 4, 1)],
        )
        .unwrap();
        let tree = graph.dfs_with_predecessor(1).unwrap().parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 5, 0]);
    }

    #[test]
    fn traversal_rejects_bad_start() {
        let graph = example_graph();
        assert_eq!(
            graph.bfs(6).err(),
            Some(GraphError::OutOfRange { vertex: 6, len: 6 })
        );
        assert_eq!(
            graph.dfs(100).err(),
            Some(GraphError::OutOfRange { vertex: 100, len: 6 })
        );
    }

    #[test]
    fn ranking_covers_graph() {
        let graph = example_graph();
        let ranking = graph.bfs(1).unwrap().ranking().unwrap();
        assert_eq!(ranking.iter().copied().sorted().collect_vec(), (0..6).collect_vec());

        let disconnected = AdjArrayUndir::from_edges(3, [(0, 1, 1)]).unwrap();
        assert!(disconnected.bfs(0).unwrap().ranking().is_none());
    }
}

/*!
Topological ordering of directed acyclic graphs.

Two independent strategies are provided and agree on cycle detection
(though not necessarily on the order of independent vertices):

- [`TopologicalSort::topo_sort_dfs`] explores every vertex depth-first and
  emits reverse post-order; a vertex encountered while still on the current
  exploration path proves a cycle.
- [`TopoSearch`] implements Kahn's indegree method as a lazy iterator;
  [`TopologicalSort::topo_sort_kahn`] collects it and reports a cycle when
  fewer than `V` vertices come out.

Both are only available on directed graphs.
*/

use super::*;
use itertools::Itertools;
use std::collections::VecDeque;

/// Iterator implementing topological ordering over a directed acyclic graph
/// with Kahn's algorithm:
/// - Initializes with all nodes of in-degree 0.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or a cycle is detected.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    pub fn new(graph: &'a G) -> Self {
        let mut in_degs: Vec<NumNodes> = vec![0; graph.len()];
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                // u -> v
                in_degs[v as usize] += 1;
            }
        }

        let queue: VecDeque<Node> = in_degs
            .iter()
            .enumerate()
            .filter_map(|(u, d)| (*d == 0).then_some(u as Node))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    type Item = Node;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration terminates early without
    ///   covering all nodes.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where
    G: AdjacencyList + GraphType<Dir = Directed>
{
}

/// Provides topological sorting directly on directed graph data structures.
pub trait TopologicalSort: AdjacencyList + GraphType<Dir = Directed> + Sized {
    /// Returns a lazy [`TopoSearch`] iterator yielding nodes in a valid
    /// topological order, terminating early on a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Collects [`TopoSearch`] into a total order over **all** vertices.
    ///
    /// Returns [`GraphError::CycleDetected`] if the graph has a directed
    /// cycle; no partial order is returned.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1)]).unwrap();
    /// assert_eq!(g.topo_sort_kahn().unwrap(), vec![0, 1, 2]);
    /// ```
    fn topo_sort_kahn(&self) -> Result<Vec<Node>> {
        let order = self.topo_search().collect_vec();
        if order.len() == self.len() {
            Ok(order)
        } else {
            Err(GraphError::CycleDetected)
        }
    }

    /// Computes a total order over **all** vertices by depth-first
    /// exploration: vertices are explored in index order, finished vertices
    /// are emitted post-order, and the reversed emission is the result.
    /// A marker for "on the current exploration path" detects back edges.
    ///
    /// Returns [`GraphError::CycleDetected`] if the graph has a directed
    /// cycle; no partial order is returned.
    fn topo_sort_dfs(&self) -> Result<Vec<Node>> {
        let n = self.len();
        let mut visited = self.vertex_bitset_unset();
        let mut on_path = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(n);
        let mut frames: Vec<(Node, NumNodes)> = Vec::new();

        for root in self.vertices() {
            if visited.get_bit(root) {
                continue;
            }
            visited.set_bit(root);
            on_path.set_bit(root);
            frames.push((root, 0));

            while let Some(frame) = frames.last_mut() {
                let (u, cursor) = *frame;

                let mut advanced = cursor;
                let mut descend = None;
                for v in self.neighbors_of(u).skip(cursor as usize) {
                    advanced += 1;
                    if on_path.get_bit(v) {
                        return Err(GraphError::CycleDetected);
                    }
                    if !visited.get_bit(v) {
                        descend = Some(v);
                        break;
                    }
                }
                frame.1 = advanced;

                match descend {
                    Some(v) => {
                        visited.set_bit(v);
                        on_path.set_bit(v);
                        frames.push((v, 0));
                    }
                    None => {
                        on_path.clear_bit(u);
                        order.push(u);
                        frames.pop();
                    }
                }
            }
        }

        order.reverse();
        Ok(order)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// Implementation: runs a topological search and checks whether
    /// all nodes were output.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList + GraphType<Dir = Directed> + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_order<G>(graph: &G, order: &[Node])
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        assert_eq!(order.len(), graph.len());
        let mut position = vec![0; graph.len()];
        for (pos, &u) in order.iter().enumerate() {
            position[u as usize] = pos;
        }
        for Edge(u, v, _) in graph.edges(false) {
            assert!(
                position[u as usize] < position[v as usize],
                "edge ({u},{v}) violates the order {order:?}"
            );
        }
    }

    #[test]
    fn diamond_dag() {
        let graph =
            AdjArray::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();

        assert_valid_order(&graph, &graph.topo_sort_dfs().unwrap());
        assert_valid_order(&graph, &graph.topo_sort_kahn().unwrap());
        assert!(graph.is_acyclic());
    }

    #[test]
    fn chain_with_two_sources() {
        let graph = AdjArray::from_edges(
            5,
            [(0, 2, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)],
        )
        .unwrap();

        assert_valid_order(&graph, &graph.topo_sort_dfs().unwrap());
        assert_valid_order(&graph, &graph.topo_sort_kahn().unwrap());
    }

    #[test]
    fn multi_indegree_dag() {
        let graph = AdjMatrix::from_edges(
            5,
            [(0, 3, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)],
        )
        .unwrap();

        assert_valid_order(&graph, &graph.topo_sort_dfs().unwrap());
        assert_valid_order(&graph, &graph.topo_sort_kahn().unwrap());
    }

    #[test]
    fn both_variants_reject_cycles() {
        let ring = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert_eq!(ring.topo_sort_dfs().err(), Some(GraphError::CycleDetected));
        assert_eq!(ring.topo_sort_kahn().err(), Some(GraphError::CycleDetected));
        assert!(!ring.is_acyclic());

        // cycle not reachable from vertex 0
        let tail = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 1, 1)]).unwrap();
        assert_eq!(tail.topo_sort_dfs().err(), Some(GraphError::CycleDetected));
        assert_eq!(tail.topo_sort_kahn().err(), Some(GraphError::CycleDetected));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjArray::from_edges(2, [(0, 1, 1), (1, 1, 1)]).unwrap();
        assert_eq!(graph.topo_sort_dfs().err(), Some(GraphError::CycleDetected));
        assert_eq!(graph.topo_sort_kahn().err(), Some(GraphError::CycleDetected));
    }

    #[test]
    fn single_vertex() {
        let graph = AdjArray::new(1);
        assert_eq!(graph.topo_sort_dfs().unwrap(), vec![0]);
        assert_eq!(graph.topo_sort_kahn().unwrap(), vec![0]);
    }

    #[test]
    fn ranking_from_topo_search() {
        let mut graph = AdjMatrix::from_edges(
            7,
            [(2, 0, 1), (1, 0, 1), (0, 3, 1), (0, 4, 1), (0, 5, 1), (3, 6, 1)],
        )
        .unwrap();

        {
            let ranks = graph.topo_search().ranking().unwrap();
            assert_eq!(*ranks.iter().min().unwrap(), 0);
            assert_eq!(*ranks.iter().max().unwrap(), graph.number_of_nodes() - 1);
            for Edge(u, v, _) in graph.edges(false) {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
        }

        graph.add_edge(6, 2, 1).unwrap(); // introduce cycle
        assert!(graph.topo_search().ranking().is_none());
        assert!(!graph.is_acyclic());
    }
}

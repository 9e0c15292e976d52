/*!
Single-source and all-pairs shortest paths.

Three algorithms share this module:
- [`ShortestPaths::bfs_distances`] treats every edge as unit cost,
- [`ShortestPaths::dijkstra`] handles non-negative weights with the classic
  `O(V^2)` minimum-selection variant (no priority queue — on the dense
  graphs this crate targets, the scan is the simpler and often faster
  choice),
- [`ShortestPaths::floyd_warshall`] computes all pairs in `O(V^3)`.

Unreachable vertices keep the out-of-band `None` distance; an "infinite"
distance never participates in an addition, so no overflow-by-sentinel can
produce a false finite result.
*/

use super::*;
use std::collections::VecDeque;

/// Reconstructs the vertex path from `start` to `target` out of a parent
/// array in the self-parent root convention (as produced by
/// [`TraversalTree::parent_array`] and [`DistanceTree`]).
///
/// Returns the full path including both endpoints, or an empty vector if
/// `target` was never assigned a predecessor (and differs from `start`).
/// The array must stem from a search rooted at `start`.
///
/// ** Panics if `start >= parents.len() || target >= parents.len()` **
pub fn parent_path(parents: &[Node], start: Node, target: Node) -> Vec<Node> {
    assert!((start as usize) < parents.len());

    if parents[target as usize] == target && target != start {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut node = target;
    while node != start {
        node = parents[node as usize];
        path.push(node);
    }

    path.reverse();
    path
}

/// The result of a single-source shortest-path computation: one optional
/// distance and one tree parent per vertex.
#[derive(Debug, Clone)]
pub struct DistanceTree {
    start: Node,
    distances: Vec<Option<Weight>>,
    parents: Vec<Node>,
}

impl DistanceTree {
    fn new(n: usize, start: Node) -> Self {
        let mut distances = vec![None; n];
        distances[start as usize] = Some(0);
        Self {
            start,
            distances,
            parents: (0..n as Node).collect(),
        }
    }

    /// The vertex all distances are measured from
    pub fn start(&self) -> Node {
        self.start
    }

    /// Distance from the start vertex to `u`, or `None` if `u` is unreachable.
    /// ** Panics if `u >= n` **
    pub fn distance(&self, u: Node) -> Option<Weight> {
        self.distances[u as usize]
    }

    /// All distances, indexed by vertex; `None` marks unreachable vertices.
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// The tree parent of each vertex; the start vertex and every
    /// unreachable vertex are their own parent.
    pub fn parents(&self) -> &[Node] {
        &self.parents
    }

    /// The vertex path from the start vertex to `target` (both inclusive),
    /// or an empty vector if `target` is unreachable.
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        parent_path(&self.parents, self.start, target)
    }
}

/// A dense all-pairs distance table with out-of-band "unreachable" entries.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: NumNodes,
    dist: Vec<Option<Weight>>,
}

impl DistanceMatrix {
    /// Returns the number of vertices the matrix spans
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Distance from `i` to `j`, or `None` if `j` cannot be reached from `i`.
    /// ** Panics if `i >= n || j >= n` **
    pub fn distance(&self, i: Node, j: Node) -> Option<Weight> {
        assert!(i < self.n && j < self.n);
        self.dist[i as usize * self.n as usize + j as usize]
    }
}

/// Provides shortest-path computations directly on graph data structures.
pub trait ShortestPaths: AdjacencyList + Sized {
    /// Computes distances from `start` treating **every edge as unit cost**
    /// (breadth-first). Only correct when all weights are meant as one hop.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1, 9), (1, 2, 9)]).unwrap();
    /// let tree = g.bfs_distances(0).unwrap();
    /// assert_eq!(tree.distance(2), Some(2));
    /// ```
    fn bfs_distances(&self, start: Node) -> Result<DistanceTree> {
        self.check_vertex(start)?;

        let mut tree = DistanceTree::new(self.len(), start);
        let mut queue = VecDeque::from([(start, 0)]);

        while let Some((u, d)) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if tree.distances[v as usize].is_none() {
                    tree.distances[v as usize] = Some(d + 1);
                    tree.parents[v as usize] = u;
                    queue.push_back((v, d + 1));
                }
            }
        }

        Ok(tree)
    }

    /// Computes exact distances from `start` for **non-negative** weights
    /// with Dijkstra's algorithm in the `O(V^2)` selection variant:
    /// `V - 1` rounds each pick the unvisited vertex of minimum tentative
    /// distance (ties by index) and relax its outgoing arcs.
    ///
    /// Negative weights are neither detected nor rejected; the result is
    /// undefined for them.
    ///
    /// Returns [`GraphError::OutOfRange`] if `start` is no vertex.
    fn dijkstra(&self, start: Node) -> Result<DistanceTree> {
        self.check_vertex(start)?;

        let n = self.len();
        let mut tree = DistanceTree::new(n, start);
        let mut visited = self.vertex_bitset_unset();

        for _ in 1..n {
            let Some((du, u)) = self
                .vertices()
                .filter(|&v| !visited.get_bit(v))
                .filter_map(|v| tree.distances[v as usize].map(|d| (d, v)))
                .min()
            else {
                // every remaining vertex is unreachable
                break;
            };
            visited.set_bit(u);

            for (v, w) in self.arcs_of(u) {
                if visited.get_bit(v) {
                    continue;
                }
                let through_u = du + w;
                if tree.distances[v as usize].map_or(true, |dv| through_u < dv) {
                    tree.distances[v as usize] = Some(through_u);
                    tree.parents[v as usize] = u;
                }
            }
        }

        Ok(tree)
    }

    /// Computes **all pairs** of distances with the Floyd–Warshall recurrence
    /// in `O(V^3)`, usable with non-negative weights on any representation.
    ///
    /// `dist[i][i]` starts at `0`, every direct arc contributes its weight
    /// (the cheapest one, if parallel arcs exist), and each relaxation round
    /// routes through one more intermediate vertex. Two distances are only
    /// ever added when both are finite.
    fn floyd_warshall(&self) -> DistanceMatrix {
        let n = self.len();
        let mut dist: Vec<Option<Weight>> = vec![None; n * n];

        for u in self.vertices() {
            for (v, w) in self.arcs_of(u) {
                let cell = &mut dist[u as usize * n + v as usize];
                if cell.map_or(true, |c| w < c) {
                    *cell = Some(w);
                }
            }
        }
        for i in 0..n {
            dist[i * n + i] = Some(0);
        }

        for k in 0..n {
            for i in 0..n {
                let Some(dik) = dist[i * n + k] else { continue };
                for j in 0..n {
                    let Some(dkj) = dist[k * n + j] else { continue };
                    let through_k = dik + dkj;
                    if dist[i * n + j].map_or(true, |d| through_k < d) {
                        dist[i * n + j] = Some(through_k);
                    }
                }
            }
        }

        DistanceMatrix {
            n: self.number_of_nodes(),
            dist,
        }
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_distances_layers() {
        let graph = AdjArray::from_edges(
            5,
            [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)],
        )
        .unwrap();

        let tree = graph.bfs_distances(0).unwrap();
        assert_eq!(
            tree.distances(),
            &[Some(0), Some(1), Some(1), Some(2), Some(3)]
        );
        assert_eq!(tree.path_to(4), vec![0, 1, 3, 4]);
    }

    #[test]
    fn bfs_distances_unreachable() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1, 1), (1, 2, 1), (3, 4, 1)]).unwrap();

        let tree = graph.bfs_distances(0).unwrap();
        assert_eq!(
            tree.distances(),
            &[Some(0), Some(1), Some(2), None, None]
        );
        assert!(tree.path_to(3).is_empty());
        assert_eq!(tree.path_to(0), vec![0]);
    }

    #[test]
    fn bfs_distances_single_vertex() {
        let graph = AdjArray::new(1);
        let tree = graph.bfs_distances(0).unwrap();
        assert_eq!(tree.distances(), &[Some(0)]);
        assert_eq!(tree.path_to(0), vec![0]);
    }

    #[test]
    fn dijkstra_weighted_directed() {
        let graph = AdjArray::from_edges(
            4,
            [(0, 1, 2), (0, 2, 5), (1, 2, 1), (1, 3, 3), (2, 3, 2)],
        )
        .unwrap();

        let tree = graph.dijkstra(0).unwrap();
        assert_eq!(
            tree.distances(),
            &[Some(0), Some(2), Some(3), Some(5)]
        );
        assert_eq!(tree.path_to(3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn dijkstra_matrix_agrees_with_list() {
        let edges = [(0, 1, 2), (0, 2, 5), (1, 2, 1), (1, 3, 3), (2, 3, 2)];
        let list = AdjArray::from_edges(4, edges).unwrap();
        let matrix = AdjMatrix::from_edges(4, edges).unwrap();

        assert_eq!(
            list.dijkstra(0).unwrap().distances(),
            matrix.dijkstra(0).unwrap().distances()
        );
    }

    #[test]
    fn dijkstra_unreachable() {
        let graph = AdjArray::from_edges(4, [(0, 1, 3), (1, 2, 2)]).unwrap();

        let tree = graph.dijkstra(0).unwrap();
        assert_eq!(tree.distances(), &[Some(0), Some(3), Some(5), None]);
        assert!(tree.path_to(3).is_empty());
    }

    #[test]
    fn dijkstra_undirected() {
        let graph = AdjArrayUndir::from_edges(
            4,
            [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)],
        )
        .unwrap();

        let tree = graph.dijkstra(0).unwrap();
        assert_eq!(
            tree.distances(),
            &[Some(0), Some(1), Some(3), Some(4)]
        );
    }

    #[test]
    fn dijkstra_prefers_zero_weight_edges() {
        // a zero weight is a legal edge, distinct from "no edge"
        let graph = AdjArray::from_edges(3, [(0, 1, 0), (1, 2, 0), (0, 2, 1)]).unwrap();
        let tree = graph.dijkstra(0).unwrap();
        assert_eq!(tree.distances(), &[Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn dijkstra_rejects_bad_start() {
        let graph = AdjArray::new(2);
        assert_eq!(
            graph.dijkstra(2).err(),
            Some(GraphError::OutOfRange { vertex: 2, len: 2 })
        );
    }

    #[test]
    fn floyd_warshall_directed_cycle() {
        let graph = AdjMatrix::from_edges(
            4,
            [
                (0, 1, 2),
                (0, 2, 5),
                (1, 2, 1),
                (1, 3, 3),
                (2, 3, 2),
                (3, 0, 4),
            ],
        )
        .unwrap();

        let dist = graph.floyd_warshall();
        assert_eq!(dist.distance(0, 0), Some(0));
        assert_eq!(dist.distance(0, 1), Some(2));
        assert_eq!(dist.distance(0, 2), Some(3));
        assert_eq!(dist.distance(0, 3), Some(5));
        assert_eq!(dist.distance(1, 0), Some(7));
        assert_eq!(dist.distance(2, 0), Some(6));
    }

    #[test]
    fn floyd_warshall_unreachable_stays_none() {
        let graph = AdjMatrix::from_edges(4, [(0, 1, 3), (1, 2, 2)]).unwrap();

        let dist = graph.floyd_warshall();
        assert_eq!(dist.distance(0, 2), Some(5));
        assert_eq!(dist.distance(0, 3), None);
        assert_eq!(dist.distance(3, 0), None);
        assert_eq!(dist.distance(3, 3), Some(0));
    }

    #[test]
    fn floyd_warshall_undirected() {
        let graph = AdjMatrixUndir::from_edges(
            4,
            [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)],
        )
        .unwrap();

        let dist = graph.floyd_warshall();
        assert_eq!(dist.distance(0, 2), Some(3));
        assert_eq!(dist.distance(0, 3), Some(4));
        assert_eq!(dist.distance(3, 0), Some(4));
    }

    #[test]
    fn floyd_warshall_single_vertex() {
        let graph = AdjMatrix::new(1);
        assert_eq!(graph.floyd_warshall().distance(0, 0), Some(0));
    }

    #[test]
    fn dijkstra_and_floyd_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5 as NumNodes, 10, 15] {
            for _ in 0..10 {
                let edges = (0..n * 3)
                    .filter_map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(0..50);
                        (u != v).then_some(Edge(u, v, w))
                    })
                    .collect_vec();

                let graph = AdjArray::from_edges(n, edges).unwrap();
                let all_pairs = graph.floyd_warshall();

                for s in 0..n {
                    let tree = graph.dijkstra(s).unwrap();
                    for t in 0..n {
                        assert_eq!(
                            tree.distance(t),
                            all_pairs.distance(s, t),
                            "distance {s} -> {t} differs"
                        );
                    }
                }
            }
        }
    }
}

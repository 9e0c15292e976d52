/// Every graph representation should pass the same contract tests; the
/// invocations live at the bottom of the `repr` files.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, error::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random weighted edges for nodes
            /// `0..n` with at most one edge per node pair
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(1..100);

                        if $undirected {
                            Edge(u, v, w).normalized()
                        } else {
                            Edge(u, v, w)
                        }
                    })
                    .collect_vec();
                edges.sort_unstable_by_key(|e| (e.0, e.1));
                edges.dedup_by_key(|e| (e.0, e.1));

                edges
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.max_degree(), 0);
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut ref_weights: Vec<Vec<Option<Weight>>> =
                            vec![vec![None; n as usize]; n as usize];
                        for &Edge(u, v, w) in &edges {
                            ref_weights[u as usize][v as usize] = Some(w);
                            if $undirected {
                                ref_weights[v as usize][u as usize] = Some(w);
                            }
                        }

                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        for u in 0..n {
                            let expected_deg = ref_weights[u as usize]
                                .iter()
                                .filter(|c| c.is_some())
                                .count();
                            assert_eq!(graph.degree_of(u) as usize, expected_deg);

                            for (v, w) in graph.arcs_of(u) {
                                assert_eq!(ref_weights[u as usize][v as usize], Some(w));
                            }
                            for v in 0..n {
                                assert_eq!(
                                    graph.weight_of(u, v),
                                    ref_weights[u as usize][v as usize]
                                );
                            }
                        }

                        let mut expected_edges = edges.clone();
                        expected_edges.sort_unstable();
                        assert_eq!(graph.ordered_edges($undirected), expected_edges);
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeInsertion) => {
        #[test]
        fn test_edge_insertion_bounds() {
            let mut graph = <$graph>::new(4);

            assert_eq!(
                graph.add_edge(0, 4, 1),
                Err(GraphError::OutOfRange { vertex: 4, len: 4 })
            );
            assert_eq!(
                graph.add_edge(7, 0, 1),
                Err(GraphError::OutOfRange { vertex: 7, len: 4 })
            );
            assert_eq!(graph.number_of_edges(), 0);

            graph.add_edge(0, 1, 5).unwrap();
            graph.add_edge(2, 3, -2).unwrap();
            assert_eq!(graph.number_of_edges(), 2);
            assert_eq!(graph.weight_of(0, 1), Some(5));
            assert_eq!(graph.weight_of(2, 3), Some(-2));

            if $undirected {
                assert_eq!(graph.weight_of(1, 0), Some(5));
            } else {
                assert_eq!(graph.weight_of(1, 0), None);
            }
        }
    };
    ($graph:ident<$undirected:literal>: VertexLabeling) => {
        #[test]
        fn test_vertex_labeling() {
            let mut graph: $graph<&str> = GraphNew::new(3);

            assert_eq!(graph.vertex_label(0), None);

            graph.set_vertex_label(0, "a").unwrap();
            graph.set_vertex_label(2, "c").unwrap();
            assert_eq!(
                graph.set_vertex_label(3, "d"),
                Err(GraphError::OutOfRange { vertex: 3, len: 3 })
            );

            assert_eq!(graph.vertex_label(0), Some(&"a"));
            assert_eq!(graph.vertex_label(1), None);
            assert_eq!(graph.vertex_label(2), Some(&"c"));
            assert_eq!(graph.vertex_label(5), None);

            graph.set_vertex_label(0, "z").unwrap();
            assert_eq!(graph.vertex_label(0), Some(&"z"));
        }
    };
}

pub(crate) use test_graph_ops;

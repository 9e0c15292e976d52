use std::fmt::Display;
use std::io::{Result, Write};

use crate::algo::DistanceMatrix;
use crate::edge::Weight;
use crate::node::{Node, NumNodes};
use crate::ops::*;

/// Cells are right-justified to width 4, row labels to width 3, so the grid
/// stays aligned for up to three-digit indices and weights.
fn write_grid<W, F>(writer: &mut W, n: NumNodes, cell: F) -> Result<()>
where
    W: Write,
    F: Fn(Node, Node) -> Option<Weight>,
{
    write!(writer, "   ")?;
    for j in 0..n {
        write!(writer, "{j:>4}")?;
    }
    writeln!(writer)?;

    for i in 0..n {
        write!(writer, "{i:>3}")?;
        for j in 0..n {
            match cell(i, j) {
                Some(w) => write!(writer, "{w:>4}")?,
                None => write!(writer, "{:>4}", "INF")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Writes the dense weight table of `graph`: one row per vertex, `INF` for
/// absent edges. The diagonal shows the recorded self-loop weight if one
/// exists and the self-distance `0` otherwise.
pub fn write_adj_matrix<G, W>(graph: &G, writer: &mut W) -> Result<()>
where
    G: AdjacencyTest,
    W: Write,
{
    write_grid(writer, graph.number_of_nodes(), |i, j| {
        graph.weight_of(i, j).or_else(|| (i == j).then_some(0))
    })
}

/// Writes an all-pairs distance table in the same grid format as
/// [`write_adj_matrix`]; `INF` marks unreachable pairs.
pub fn write_distance_matrix<W>(matrix: &DistanceMatrix, writer: &mut W) -> Result<()>
where
    W: Write,
{
    write_grid(writer, matrix.number_of_nodes(), |i, j| {
        matrix.distance(i, j)
    })
}

/// Writes one line per vertex: its index, its label in parentheses (if one
/// was stored), and its outgoing arcs as `target(weight)` entries in
/// enumeration order. A vertex without outgoing arcs shows `-`.
pub fn write_adj_list<G, W, L>(graph: &G, writer: &mut W) -> Result<()>
where
    G: AdjacencyList + VertexLabeling<L>,
    L: Display,
    W: Write,
{
    for u in graph.vertices() {
        match graph.vertex_label(u) {
            Some(label) => write!(writer, "{u}({label}):")?,
            None => write!(writer, "{u}:")?,
        }

        if graph.degree_of(u) == 0 {
            write!(writer, " -")?;
        }
        for (v, w) in graph.arcs_of(u) {
            write!(writer, " {v}({w})")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::io::Result;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> Result<()>>(write: F) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn adj_matrix_golden() {
        let mut graph: AdjMatrix<&str> = GraphNew::new(3);
        graph.set_vertex_label(0, "A").unwrap();
        graph.set_vertex_label(1, "B").unwrap();
        graph.set_vertex_label(2, "C").unwrap();
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, 3).unwrap();

        let dump = to_string(|buf| write_adj_matrix(&graph, buf));
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(
            lines,
            vec![
                "      0   1   2",
                "  0   0   5 INF",
                "  1 INF   0   3",
                "  2 INF INF   0",
            ]
        );
    }

    #[test]
    fn adj_matrix_shows_self_loops_and_zero_weights() {
        let mut graph = AdjMatrix::new(2);
        graph.add_edge(0, 0, 7).unwrap();
        graph.add_edge(0, 1, 0).unwrap();

        let dump = to_string(|buf| write_adj_matrix(&graph, buf));
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines[1], "  0   7   0");
        assert_eq!(lines[2], "  1 INF   0");
    }

    #[test]
    fn adj_list_golden() {
        let mut graph: AdjArray<&str> = GraphNew::new(3);
        graph.set_vertex_label(0, "A").unwrap();
        graph.set_vertex_label(1, "B").unwrap();
        graph.set_vertex_label(2, "C").unwrap();
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 2, 3).unwrap();
        graph.add_edge(1, 2, 2).unwrap();

        let dump = to_string(|buf| write_adj_list(&graph, buf));

        assert_eq!(dump, "0(A): 1(5) 2(3)\n1(B): 2(2)\n2(C): -\n");
    }

    #[test]
    fn adj_list_without_labels() {
        let mut graph: AdjArrayUndir<String> = GraphNew::new(2);
        graph.add_edge(0, 1, 4).unwrap();

        let dump = to_string(|buf| write_adj_list(&graph, buf));
        assert_eq!(dump, "0: 1(4)\n1: 0(4)\n");
    }

    #[test]
    fn distance_matrix_dump() {
        use crate::algo::ShortestPaths;

        let graph = AdjMatrix::from_edges(3, [(0, 1, 3), (1, 2, 2)]).unwrap();
        let dist = graph.floyd_warshall();

        let dump = to_string(|buf| write_distance_matrix(&dist, buf));
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(
            lines,
            vec![
                "      0   1   2",
                "  0   0   3   5",
                "  1 INF   0   2",
                "  2 INF INF   0",
            ]
        );
    }
}

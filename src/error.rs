/*!
# Errors

Every failure of this crate is synchronous and propagates to the immediate
caller: nothing is retried, nothing is logged in-library, and no operation
returns a partial result alongside an error. Reporting to a user is the
job of the calling layer.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Result type alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// The failure conditions of graph construction and graph algorithms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index argument falls outside `[0, n)`. Raised at the point
    /// of misuse: insertion time for edges and labels, call time for
    /// algorithm entry points. Always caller-correctable.
    #[error("vertex {vertex} is out of range for a graph with {len} vertices")]
    OutOfRange { vertex: Node, len: NumNodes },

    /// A spanning-tree computation was invoked on a graph with no spanning
    /// tree reaching all vertices. No partial forest is returned.
    #[error("the graph is not connected, so no spanning tree exists")]
    GraphNotConnected,

    /// A topological sort was invoked on a graph containing a directed
    /// cycle. No partial order is returned.
    #[error("the graph contains a directed cycle, so no topological order exists")]
    CycleDetected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GraphError::OutOfRange { vertex: 7, len: 3 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('3'));

        assert!(GraphError::GraphNotConnected.to_string().contains("spanning tree"));
        assert!(GraphError::CycleDetected.to_string().contains("cycle"));
    }
}

use thiserror::Error;

/// Structural error raised by a mutation or a query on a graph.
///
/// These are precondition violations on the caller side and are never
/// recovered from inside the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V> {
    #[error("vertex {0:?} already exists")]
    DuplicateVertex(V),

    #[error("vertex {0:?} does not exist")]
    UnknownVertex(V),

    /// Removal of a vertex that is not in the graph.
    #[error("vertex {0:?} cannot be removed because it does not exist")]
    VertexNotFound(V),

    #[error("edge ({0:?}, {1:?}) already exists")]
    EdgeExists(V, V),

    #[error("edge ({0:?}, {1:?}) does not exist")]
    EdgeNotFound(V, V),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            GraphError::DuplicateVertex(3).to_string(),
            "vertex 3 already exists"
        );
        assert_eq!(
            GraphError::EdgeNotFound("a", "b").to_string(),
            "edge (\"a\", \"b\") does not exist"
        );
    }
}

use thiserror::Error;

/// Everything that can make an input graph unusable. The graph is rejected as a
/// whole; there are no partial results.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input ended before the header line.
    #[error("invalid graph line provided: \"\"")]
    MissingHeader,

    /// Header did not yield a node count and an edge count.
    #[error("invalid graph line provided: \"{0}\"")]
    InvalidHeader(String),

    /// Header declared zero (or a negative number of) nodes.
    #[error("amount of nodes specified is 0")]
    NoNodes,

    #[error("amount of edges is less than 0")]
    NegativeEdges,

    /// Edge line did not yield exactly two integers.
    #[error("invalid graph edge: \"{0}\"")]
    InvalidEdge(String),

    /// Edge line referenced a label outside `1..=n`.
    #[error("invalid graph node: \"{0}\"")]
    InvalidNode(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

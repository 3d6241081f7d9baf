use thiserror::Error;

/// Top-level error type for polystroke.
#[derive(Debug, Error)]
pub enum PolystrokeError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors related to offset operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("displacement has {actual} values but the curve has {expected} points")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors related to strip meshing.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("rail lengths differ: {rail0} vs {rail1}")]
    RailLengthMismatch { rail0: usize, rail1: usize },
}

/// Errors related to reading and writing polyline documents.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xml parse error: {0}")]
    Parse(#[from] xmltree::ParseError),

    #[error("xml write error: {0}")]
    Write(#[from] xmltree::Error),

    #[error("expected root element <poly>, found <{0}>")]
    UnexpectedRoot(String),
}

/// Convenience type alias for results using [`PolystrokeError`].
pub type Result<T> = std::result::Result<T, PolystrokeError>;

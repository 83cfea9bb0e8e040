use thiserror::Error;

/// Errors raised by the hotness pipeline and its input adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VizError {
    /// Style or visibility was requested before stats were computed for the
    /// current edge set. This is a caller ordering bug and aborts the draw cycle.
    #[error("stats have not been computed for the current edge set")]
    UninitializedStats,
    #[error("edge has an empty {0} identifier")]
    EmptyIdentifier(&'static str),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

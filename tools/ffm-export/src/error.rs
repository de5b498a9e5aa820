//! Error types for OBJ parsing and face resolution

/// A single OBJ line could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjParseError {
    #[error("expected {expected} components after '{tag}', found {found}")]
    MissingComponents {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid number '{0}'")]
    InvalidFloat(String),

    #[error("invalid index '{0}'")]
    InvalidIndex(String),

    #[error("face vertex '{0}' is not of the form p/t/n")]
    MalformedFaceVertex(String),

    #[error("face has no vertices")]
    EmptyFace,
}

/// Conversion failed at a specific line of the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ObjParseError,
    },

    #[error("line {line}: {kind} index {index} out of range (have {available})")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: usize,
        available: usize,
    },
}

impl ConvertError {
    /// 1-based line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ConvertError::Parse { line, .. } | ConvertError::IndexOutOfRange { line, .. } => *line,
        }
    }
}

use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("invalid typing: expected 1 or 2 distinct types, found {0}")]
    InvalidTyping(usize),
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("malformed dex entry (line {line}): {reason}")]
    Format { line: usize, reason: String },
    #[error("malformed dex file: {0}")]
    Malformed(String),
    #[error("failed to encode dex: {0}")]
    Encoding(String),
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
}

impl Error {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

use crate::core;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dex(#[from] core::Error),
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),
    #[error("invalid chain length: {0}")]
    InvalidLength(usize),
    #[error("no chain satisfies the given criteria")]
    NoChainFound,
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Dex(core::Error::InvalidTyping(_)) | Self::InvalidLength(_) => Kind::Validation,
            Self::Dex(
                core::Error::UnknownType(_)
                | core::Error::Format { .. }
                | core::Error::Malformed(_)
                | core::Error::Encoding(_),
            )
            | Self::InvalidCriteria(_) => Kind::Format,
            Self::Dex(core::Error::Io(_)) => Kind::Io,
            Self::NoChainFound => Kind::Generation,
        }
    }

    pub fn report(&self) -> Report {
        let template = self.kind().template();

        Report {
            code: template.code(),
            description: template.description(),
            message: self.to_string(),
            http_status_code: template.http_status_code(),
        }
    }
}

/// The condition that caused an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Invalid input when building a typing or a generator.
    Validation,
    /// A dex source or criteria file could not be parsed.
    Format,
    /// The search ran out of candidates.
    Generation,
    Io,
}

impl Kind {
    pub fn template(self) -> Template {
        match self {
            Self::Validation | Self::Format => Template::BadRequest,
            Self::Generation => Template::NoPathFound,
            Self::Io => Template::Internal,
        }
    }
}

/// A public error category, as reported to consumers of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    BadRequest,
    NoPathFound,
    Internal,
}

impl Template {
    pub fn description(self) -> &'static str {
        self.entry().0
    }

    pub fn http_status_code(self) -> u16 {
        self.entry().1
    }

    pub fn code(self) -> u16 {
        self.entry().2
    }

    fn entry(self) -> (&'static str, u16, u16) {
        match self {
            Self::BadRequest => ("BAD REQUEST", 400, 120),
            Self::NoPathFound => ("NO PATH FOUND", 404, 101),
            Self::Internal => ("INTERNAL ERROR", 500, 198),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub code: u16,
    pub description: &'static str,
    pub message: String,
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({}) - {}", self.code, self.description, self.message)
    }
}

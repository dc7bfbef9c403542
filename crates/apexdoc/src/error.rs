use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What kind of documentation entry a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Namespace,
    Class,
    Member,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Namespace => write!(f, "namespace"),
            EntityKind::Class => write!(f, "class"),
            EntityKind::Member => write!(f, "method or property"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApexDocError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("'{0}' has no documentation link")]
    MalformedLink(String),

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reference root '{0}' is missing from the table of contents")]
    MissingReferenceRoot(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to open {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApexDocError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        ApexDocError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Process exit status reported by the binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ApexDocError::NotFound { .. } => 1,
            ApexDocError::InvalidPath { .. }
            | ApexDocError::Read { .. }
            | ApexDocError::Parse { .. }
            | ApexDocError::Json(_)
            | ApexDocError::MissingReferenceRoot(_)
            | ApexDocError::Config(_) => 2,
            ApexDocError::MalformedLink(_) | ApexDocError::Launch { .. } | ApexDocError::Io(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApexDocError>;

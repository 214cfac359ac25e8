use std::path::PathBuf;
use strum_macros::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Resource Not Found: '{name}' (searched {searched})")]
    ResourceNotFound { name: String, searched: PathBuf },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Schema Violation: {0}")]
    SchemaViolation(String),

    #[error("Empty Collection: the asset defines no keyboard layouts")]
    EmptyCollection,
}

/// Coarse classification of a [`LoadError`], used for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoadErrorKind {
    ResourceNotFound,
    Io,
    MalformedJson,
    SchemaViolation,
    EmptyCollection,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::ResourceNotFound { .. } => LoadErrorKind::ResourceNotFound,
            Self::Io(_) => LoadErrorKind::Io,
            Self::MalformedJson(_) => LoadErrorKind::MalformedJson,
            Self::SchemaViolation(_) => LoadErrorKind::SchemaViolation,
            Self::EmptyCollection => LoadErrorKind::EmptyCollection,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match e.classify() {
            Category::Syntax | Category::Eof => Self::MalformedJson(e.to_string()),
            Category::Data => Self::SchemaViolation(e.to_string()),
            Category::Io => Self::Io(e.into()),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

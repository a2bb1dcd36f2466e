use std::path::PathBuf;

/// Outcome of resolving and rendering a dot-path against a document.
///
/// `NotFound` covers an absent key, a traversal step into a non-mapping
/// value, and a path that resolves to an explicit null. It is an expected
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound,
}

/// Failure classes of a single extraction, all absorbed into the fallback
/// policy at the command boundary.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("cannot read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {path}: {source}")]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("cannot serialize resolved value: {0}")]
    Render(#[source] serde_yaml::Error),
    // Reserved for failures outside the classes above so the fallback
    // policy stays total.
    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

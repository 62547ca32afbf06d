use std::path::PathBuf;

use thiserror::Error;

/// Failures of the annotation loading and agreement stages.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("annotation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed annotation file {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("no comparable items for {metric}")]
    InsufficientData { metric: String },

    #[error("label sequences differ in length for {metric}: {left} vs {right}")]
    LengthMismatch {
        metric: String,
        left: usize,
        right: usize,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

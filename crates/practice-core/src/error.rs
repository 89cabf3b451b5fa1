use std::path::PathBuf;

/// Errors produced by core `practice` operations.
#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    #[error(
        "duration must be between {min} and {max} minutes, got {0}",
        min = crate::session::MIN_DURATION_MINUTES,
        max = crate::session::MAX_DURATION_MINUTES
    )]
    InvalidDuration(i64),

    #[error("malformed session line `{line}`: {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("failed to access session log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl PracticeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

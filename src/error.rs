use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while ingesting and scoring an attendance log.
#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("malformed line: '{line}'")]
    MalformedLine { line: String },

    #[error("unknown day of week: '{token}'")]
    UnknownDay { token: String },

    #[error("too many users: at most {max} distinct names are supported")]
    CapacityExceeded { max: usize },

    #[error("cannot read attendance log at {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AttendanceError {
    /// Per-line problems that are logged and skipped rather than aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AttendanceError::MalformedLine { .. } | AttendanceError::UnknownDay { .. }
        )
    }
}

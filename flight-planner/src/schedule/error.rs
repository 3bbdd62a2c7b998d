//! Schedule loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading a flight schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Reading the schedule file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schedule is not a JSON array of flights
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A flight record failed validation
    #[error("invalid schedule: {0}")]
    Invalid(#[from] DomainError),
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the fallible setup paths of the recorder.
///
/// Runtime degradation is handled where it happens and never surfaces
/// here: a failed screenshot is replaced with a placeholder frame, and a
/// video that never stabilizes is dropped from the poll results.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// Config file could not be read
    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON for [`RecorderConfig`](crate::RecorderConfig)
    #[error("invalid config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Recording output directory could not be created
    #[error("failed to create recording directory {}", .path.display())]
    CreateRecordingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Recording session configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::RecorderError;

/// Read-only settings for a recording session, loaded once at startup.
///
/// Serialized field names match the recorder's JSON configuration surface
/// (`debugMode`, `outputDir`, `rawPath`, `videoRenderTimeout`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecorderConfig {
    /// Enable debug-level diagnostics
    pub debug_mode: bool,
    /// Root directory for all recording output
    pub output_dir: PathBuf,
    /// Subdirectory under the output root holding raw frame captures
    pub raw_path: String,
    /// Maximum time to wait for a video to finish rendering, in seconds
    pub video_render_timeout: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        RecorderConfig {
            debug_mode: false,
            output_dir: PathBuf::from("_results_"),
            raw_path: "rawSeleniumVideoGrabs".to_string(),
            video_render_timeout: 5,
        }
    }
}

impl RecorderConfig {
    /// Load configuration from a JSON file.
    ///
    /// Keys absent from the file fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, RecorderError> {
        let raw = fs::read_to_string(path).map_err(|source| RecorderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: RecorderConfig =
            serde_json::from_str(&raw).map_err(|source| RecorderError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded recorder config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

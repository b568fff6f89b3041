//! Screenshot capture with a placeholder fallback

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::browser::BrowserHandle;

/// 1x1 transparent PNG written in place of frames that could not be captured
const NOT_AVAILABLE_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

static NOT_AVAILABLE_PNG: LazyLock<Vec<u8>> = LazyLock::new(|| {
    STANDARD
        .decode(NOT_AVAILABLE_PNG_B64)
        .expect("bundled placeholder image is valid base64")
});

/// The placeholder frame substituted when a capture fails
pub fn placeholder_png() -> &'static [u8] {
    &NOT_AVAILABLE_PNG
}

/// Anything that can save a PNG screenshot to a destination path.
///
/// Implemented for [`fantoccini::Client`]; tests substitute their own.
#[async_trait]
pub trait ScreenshotCapture: Send + Sync {
    async fn save_screenshot(&self, path: &Path) -> Result<()>;
}

#[async_trait]
impl ScreenshotCapture for fantoccini::Client {
    async fn save_screenshot(&self, path: &Path) -> Result<()> {
        let png = self.screenshot().await?;
        tokio::fs::write(path, png).await?;
        Ok(())
    }
}

/// Capture one frame per handle into its recording directory.
///
/// Frames are named `{frameNr:04}.png`, prefixed with `{name}-` for
/// multiremote targets. The counter only advances on success; a failed
/// capture writes the bundled placeholder image to the same path instead,
/// so a later successful capture reuses the failed frame's index. A
/// failure on one handle never blocks the remaining handles.
pub async fn take_screenshot(browsers: &mut [BrowserHandle]) {
    for b in browsers.iter_mut() {
        let frame_file = if b.name == "browser" {
            format!("{:04}.png", b.frame_nr)
        } else {
            format!("{}-{:04}.png", b.name, b.frame_nr)
        };
        let file_path = b.recording_path.join(&frame_file);

        match b.driver.save_screenshot(&file_path).await {
            Ok(()) => b.frame_nr += 1,
            Err(e) => {
                debug!("Screenshot not available for {}: {}", b.name, e);
                if let Err(write_err) = tokio::fs::write(&file_path, placeholder_png()).await {
                    debug!(
                        "Failed to write placeholder frame {}: {}",
                        file_path.display(),
                        write_err
                    );
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

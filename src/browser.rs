//! Browser handles: session enumeration and per-test attribute assignment

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::capture::ScreenshotCapture;
use crate::config::RecorderConfig;
use crate::errors::RecorderError;
use crate::filename;

/// WebDriver capabilities relevant to recording
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Capabilities {
    /// Browser name as reported by the driver (e.g. "chrome")
    pub browser_name: String,
    /// Optional device classification (e.g. "iPhone X"), folded into the
    /// browser label when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

/// One controllable browser target within a test session
pub struct TargetInstance {
    /// Capabilities the driver negotiated for this target
    pub capabilities: Capabilities,
    /// Control handle used to capture screenshots
    pub driver: Arc<dyn ScreenshotCapture>,
}

/// A test session: a single browser, or a multiremote composite driving
/// several named targets at once.
pub enum TestSession {
    Single(TargetInstance),
    /// Logical name to target, in declaration order
    Multiremote(Vec<(String, TargetInstance)>),
}

/// In-memory capture state for one browser target.
///
/// Enumeration creates the handle with its derived fields empty;
/// [`set_browser_attributes`] fills them in at the start of each test
/// case. The frame counter only ever moves forward after that reset.
pub struct BrowserHandle {
    /// Logical name: `"browser"` for single sessions, the mapping key otherwise
    pub name: String,
    /// Whether this handle belongs to a multiremote session
    pub multiremote: bool,
    /// Capabilities of the underlying target
    pub capabilities: Capabilities,
    /// Control handle used to capture screenshots
    pub driver: Arc<dyn ScreenshotCapture>,
    /// Human-readable browser label, e.g. `CHROME-mobile-iPhone-X`
    pub browser_label: String,
    /// Filesystem-safe per-test identifier
    pub test_name: String,
    /// Directory receiving this handle's frames
    pub recording_path: PathBuf,
    /// Index of the next frame, zero-padded into frame filenames
    pub frame_nr: u32,
}

impl BrowserHandle {
    fn new(name: &str, multiremote: bool, target: TargetInstance) -> Self {
        BrowserHandle {
            name: name.to_string(),
            multiremote,
            capabilities: target.capabilities,
            driver: target.driver,
            browser_label: String::new(),
            test_name: String::new(),
            recording_path: PathBuf::new(),
            frame_nr: 0,
        }
    }
}

/// Enumerate the browsers of a session into a fresh list of handles.
///
/// A single session yields exactly one handle named `"browser"`. A
/// multiremote session yields one handle per target in declaration order;
/// a multiremote session with no targets yields no handles. Infallible.
pub fn get_browsers(session: TestSession) -> Vec<BrowserHandle> {
    match session {
        TestSession::Single(target) => vec![BrowserHandle::new("browser", false, target)],
        TestSession::Multiremote(targets) => targets
            .into_iter()
            .map(|(name, target)| BrowserHandle::new(&name, true, target))
            .collect(),
    }
}

/// Assign per-test attributes to every handle: derive the browser label,
/// synthesize the test name, reset the frame counter and create the
/// recording directory (recursively, idempotently).
///
/// On `Ok` every handle has an existing recording directory under
/// `outputDir/rawPath/{testName}`.
pub fn set_browser_attributes(
    browsers: &mut [BrowserHandle],
    config: &RecorderConfig,
    full_name: &str,
) -> Result<(), RecorderError> {
    for b in browsers.iter_mut() {
        let mut label = b.capabilities.browser_name.to_uppercase();
        if b.multiremote {
            label.push('-');
            label.push_str(&b.name);
        }
        if let Some(device) = &b.capabilities.device_type
            && !device.is_empty()
        {
            label.push('-');
            label.push_str(&device.replace(' ', "-"));
        }
        b.browser_label = label;
    }

    for b in browsers.iter_mut() {
        b.test_name = filename::generate_filename(&b.browser_label, full_name);
        b.frame_nr = 0;
        b.recording_path = config.output_dir.join(&config.raw_path).join(&b.test_name);

        fs::create_dir_all(&b.recording_path).map_err(|source| {
            RecorderError::CreateRecordingDir {
                path: b.recording_path.clone(),
                source,
            }
        })?;

        debug!(
            "Recording frames for {} into {}",
            b.browser_label,
            b.recording_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

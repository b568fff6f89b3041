//! # framecap
#![allow(clippy::uninlined_format_args)]
//!
//! Recording utilities for browser-test video capture.
//!
//! A test runner drives one or more browsers through a test case while an
//! external recorder turns captured frames into a video. This crate covers
//! the plumbing around that pipeline: enumerating the browsers of a
//! session into capture handles, deriving filesystem-safe per-test output
//! names, grabbing sequentially numbered screenshot frames (with a
//! placeholder image when a browser cannot deliver one), and polling the
//! filesystem until the externally rendered videos stabilize.
//!
//! Browser automation itself, video encoding and test-runner integration
//! are owned by external collaborators and out of scope.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use framecap::{
//!     Capabilities, RecorderConfig, TargetInstance, TestSession,
//!     get_browsers, set_browser_attributes, take_screenshot, wait_for_videos,
//! };
//!
//! # async fn example(client: fantoccini::Client) -> anyhow::Result<()> {
//! let config = RecorderConfig::default();
//!
//! // One handle per browser in the session, "browser" for single sessions
//! let session = TestSession::Single(TargetInstance {
//!     capabilities: Capabilities {
//!         browser_name: "chrome".to_string(),
//!         device_type: None,
//!     },
//!     driver: Arc::new(client),
//! });
//! let mut browsers = get_browsers(session);
//!
//! // Per-test setup: labels, output names, recording directories
//! set_browser_attributes(&mut browsers, &config, "Login Test should succeed")?;
//!
//! // One frame per call; failures fall back to a placeholder image
//! take_screenshot(&mut browsers).await;
//!
//! // Block until the external recorder's videos stop growing
//! let videos = vec![config.output_dir.join("Login-Test.mp4")];
//! let ready = wait_for_videos(&config, &videos).await;
//! # let _ = ready;
//! # Ok(())
//! # }
//! ```
//!
//! ## Degradation policy
//!
//! Misbehaving collaborators never abort a run: a failed screenshot is
//! replaced by a bundled "not available" frame, and a video that never
//! appears or never stabilizes within the timeout budget is dropped from
//! the [`wait_for_videos`] result rather than raised as an error.

/// Browser handles, session enumeration and attribute assignment
pub mod browser;

/// Screenshot capture with placeholder fallback
pub mod capture;

/// Recording session configuration
pub mod config;

/// Typed errors for the fallible setup paths
pub mod errors;

/// Filesystem-safe recording filename synthesis
pub mod filename;

/// Tracing subscriber setup
pub mod logging;

/// Polling for externally rendered video files
pub mod video;

pub use browser::{
    BrowserHandle, Capabilities, TargetInstance, TestSession, get_browsers, set_browser_attributes,
};
pub use capture::{ScreenshotCapture, take_screenshot};
pub use config::RecorderConfig;
pub use errors::RecorderError;
pub use filename::generate_filename;
pub use video::wait_for_videos;

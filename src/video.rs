//! Polling for externally rendered video files

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::config::RecorderConfig;

/// Interval between poll steps
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Size of the empty/header-only container the recorder writes before any
/// real content arrives; a file at or below this size is not yet a video.
const MIN_VIDEO_SIZE: u64 = 48;

/// Wait for externally rendered videos to appear and stabilize on disk.
///
/// Each path gets a budget of `10 * videoRenderTimeout` steps of 100 ms,
/// spent in two phases: first waiting for the file to exist, then sampling
/// its size until it exceeds [`MIN_VIDEO_SIZE`] and stops changing between
/// consecutive samples. The recorder gives no completion signal, so the
/// size plateau is the only readiness indicator available.
///
/// Returns the paths that became ready within budget, in input order;
/// stragglers are silently omitted.
pub async fn wait_for_videos(config: &RecorderConfig, videos: &[PathBuf]) -> Vec<PathBuf> {
    let max_waiting = 10 * config.video_render_timeout;
    let mut ready_videos = Vec::new();

    info!("Max waiting time: {}s", config.video_render_timeout);

    for video in videos {
        info!("--- Video {} ---", video.display());

        if !wait_for_existence(video, max_waiting).await {
            continue;
        }
        if wait_for_stable_size(video, max_waiting).await {
            ready_videos.push(video.clone());
        }
    }

    ready_videos
}

/// Phase one: poll until the file exists or the step budget runs out.
async fn wait_for_existence(video: &Path, max_waiting: u64) -> bool {
    let mut step = 0u64;
    loop {
        sleep(POLL_INTERVAL).await;
        if step % 10 == 0 {
            info!("Waiting for video to exist: {}s", step / 10);
        }
        if video.exists() {
            return true;
        }
        step += 1;
        if step >= max_waiting {
            return false;
        }
    }
}

/// Phase two: poll until the file size plateaus above the header threshold.
///
/// Ready means the size exceeds [`MIN_VIDEO_SIZE`] and matches the
/// immediately preceding sample; a size exactly at the threshold, or any
/// size change, keeps polling.
async fn wait_for_stable_size(video: &Path, max_waiting: u64) -> bool {
    let mut last_size = 0u64;
    let mut step = 0u64;

    while step < max_waiting {
        let size = tokio::fs::metadata(video)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if size > MIN_VIDEO_SIZE && size == last_size {
            return true;
        }
        last_size = size;

        sleep(POLL_INTERVAL).await;
        if step % 10 == 0 {
            info!("Waiting for video to be ready: {}s", step / 10);
        }
        step += 1;
    }

    false
}

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

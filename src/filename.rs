//! Filesystem-safe recording filename synthesis

use chrono::Local;

/// Longest filename we will produce; beyond this the middle is discarded
/// to stay clear of filesystem path-length limits.
const MAX_FILENAME_LEN: usize = 250;

/// Characters never allowed in a recording filename
const FORBIDDEN: &[char] = &[
    '/', '\\', '?', '%', '*', ':', '\'', '|', '"', '<', '>', '(', ')',
];

/// Build a filesystem-safe identifier for one browser's recording of one
/// test case: `{testName}--{browserLabel}--{timestamp}` with whitespace
/// runs hyphenated and a millisecond-precision timestamp.
///
/// The timestamp segment depends on the wall clock, so the output is not
/// reproducible across calls; callers should treat it as opaque.
pub fn generate_filename(browser_label: &str, full_name: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d--%H-%M-%S-%3f").to_string();
    let test_name = full_name.split_whitespace().collect::<Vec<_>>().join("-");

    let encoded = urlencoding::encode(&format!("{}--{}--{}", test_name, browser_label, timestamp))
        .into_owned();

    // Drop percent-escape triples outright, turn periods into hyphens and
    // strip anything a filesystem might object to. What survives is ASCII.
    let mut filename = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => {
                chars.next();
                chars.next();
            }
            '.' => filename.push('-'),
            c if FORBIDDEN.contains(&c) => {}
            c => filename.push(c),
        }
    }

    if filename.len() > MAX_FILENAME_LEN {
        // Keep the test-name prefix and the timestamp suffix recognizable
        let trunc = (MAX_FILENAME_LEN - 2) / 2;
        filename = format!(
            "{}--{}",
            &filename[..trunc],
            &filename[filename.len() - trunc..]
        );
    }

    filename
}

#[cfg(test)]
#[path = "filename_test.rs"]
mod filename_test;

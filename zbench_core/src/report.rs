//! Report line formatting.
//!
//! Every line the harness prints is built here, so the exact text can be
//! tested without running a codec. Sizes are floor-divided to whole
//! kilobytes and all floats use two decimal places.

use std::time::Duration;

/// Whole kilobytes, truncated (never rounded).
pub fn size_kb(bytes: usize) -> usize {
    bytes / 1024
}

/// Original size divided by compressed size. Values below 1.0 mean the
/// codec expanded the input.
pub fn coefficient(original: usize, compressed: usize) -> f64 {
    original as f64 / compressed as f64
}

/// Mean seconds per iteration of a timed loop.
pub fn average_secs(total: Duration, repeats: u32) -> f64 {
    total.as_secs_f64() / f64::from(repeats)
}

pub fn original_size_line(original: usize) -> String {
    format!("Original size: {}kb", size_kb(original))
}

pub fn ratio_line(label: &str, original: usize, compressed: usize) -> String {
    format!(
        "{} compressed size: {}kb; compression coefficient: {:.2}",
        label,
        size_kb(compressed),
        coefficient(original, compressed)
    )
}

pub fn compression_time_line(label: &str, avg_secs: f64) -> String {
    format!("{} average compression time: {:.2}s", label, avg_secs)
}

pub fn decompression_time_line(label: &str, avg_secs: f64) -> String {
    format!("{} average decompression time: {:.2}s", label, avg_secs)
}

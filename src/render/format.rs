use std::time::Duration;

/// Format a duration as `m:ss` (unpadded minutes, zero-padded seconds).
/// Sub-second remainders are truncated, so 75_999 ms renders as `1:15`.
pub fn format_time(d: Duration) -> String {
    let total_secs = d.as_secs();
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

use std::time::Duration;

/// Format a playhead position or track length for transport display.
///
/// Renders `M:SS` with zero-padded seconds; minutes are shown even when
/// zero. Unknown lengths render as `0:00`.
pub fn format_timestamp(duration: Option<Duration>) -> String {
    let Some(duration) = duration else {
        return "0:00".to_string();
    };

    let total_secs = duration.as_secs();
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

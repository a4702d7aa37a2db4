//! Display formatting utilities
//!
//! Provides functions for rendering the call countdown and for fitting
//! candidate topics into list rows.

/// Format seconds as an `m:ss` clock with zero-padded seconds
///
/// # Examples
/// ```
/// use talkmatch::util::units::format_clock;
///
/// assert_eq!(format_clock(300), "5:00");
/// assert_eq!(format_clock(61), "1:01");
/// assert_eq!(format_clock(9), "0:09");
/// ```
pub fn format_clock(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Truncate text to at most `max` characters, appending an ellipsis when cut
///
/// # Examples
/// ```
/// use talkmatch::util::units::ellipsize;
///
/// assert_eq!(ellipsize("short", 10), "short");
/// assert_eq!(ellipsize("a longer line of text", 10), "a longer …");
/// ```
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

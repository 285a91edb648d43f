//! Display formatting for addresses and wave times.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Render a wave time as `2022-12-02 16:53:20 UTC`.
pub fn wave_time(timestamp: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.unix_timestamp().to_string())
}

/// Placeholder shown for a wave whose time could not be represented.
pub const UNKNOWN_TIME: &str = "unknown";

/// Render an optional wave time, falling back to [`UNKNOWN_TIME`].
pub fn record_time(timestamp: Option<OffsetDateTime>) -> String {
    timestamp.map_or_else(|| UNKNOWN_TIME.to_owned(), wave_time)
}

/// Shorten `0x1234567890abcdef...` to `0x1234…cdef` for compact display.
///
/// Strings too short to elide are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

//! Display helpers shared by the entity views.

/// Length of a `yyyy-mm-dd` date.
pub const DATE_LEN: usize = "yyyy-mm-dd".len();

/// Truncates a timestamp to its date part.
///
/// Shorter inputs are returned unchanged.
pub fn date_prefix(timestamp: &str) -> &str {
    timestamp
        .char_indices()
        .nth(DATE_LEN)
        .map_or(timestamp, |(end, _)| &timestamp[..end])
}

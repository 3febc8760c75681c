//! Feed-rate unit conversions
//!
//! The canonical-motion protocol reports feed rates in machine units per
//! minute; accumulated segments store units per second so playback timing
//! needs no further conversion. The factor lives here so the contract is
//! stated exactly once.

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Convert a per-minute feed rate to per-second.
pub fn per_minute_to_per_second(feed_per_minute: f64) -> f64 {
    feed_per_minute / SECONDS_PER_MINUTE
}

/// Convert a per-second feed rate back to per-minute.
pub fn per_second_to_per_minute(feed_per_second: f64) -> f64 {
    feed_per_second * SECONDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_minute_to_per_second() {
        assert_eq!(per_minute_to_per_second(120.0), 2.0);
        assert_eq!(per_minute_to_per_second(60.0), 1.0);
        assert_eq!(per_minute_to_per_second(0.0), 0.0);
    }

    #[test]
    fn test_round_trip() {
        let feed = 1234.5;
        assert_eq!(per_second_to_per_minute(per_minute_to_per_second(feed)), feed);
    }
}

//! Duration parsing
//!
//! Accepts the three formats a user can pass to `--duration`: plain
//! (possibly fractional) minutes, `MM:SS`, and `HH:MM:SS`.

use std::fmt;

use chrono::TimeDelta;

use crate::error::{CountdownError, Result};

/// Length of a countdown used when no usable duration was given
pub const DEFAULT_DURATION_SECS: f64 = 300.0;

/// A non-negative span of elapsed time, stored in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimerDuration {
    seconds: f64,
}

impl TimerDuration {
    /// Build a duration from seconds. Negative or non-finite input is rejected.
    pub fn from_secs_f64(seconds: f64) -> Option<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            // normalizes -0.0
            Some(Self { seconds: seconds.max(0.0) })
        } else {
            None
        }
    }

    pub fn from_minutes(minutes: f64) -> Option<Self> {
        Self::from_secs_f64(minutes * 60.0)
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.seconds
    }

    pub fn as_minutes(&self) -> f64 {
        self.seconds / 60.0
    }

    /// Convert to a chrono delta with millisecond precision, if it fits
    pub fn to_chrono(&self) -> Option<TimeDelta> {
        let millis = (self.seconds * 1000.0).round();
        if millis >= i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_milliseconds(millis as i64)
    }
}

impl Default for TimerDuration {
    fn default() -> Self {
        Self { seconds: DEFAULT_DURATION_SECS }
    }
}

/// Renders as decimal minutes, the first format `parse_duration` accepts
impl fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_minutes())
    }
}

/// Parse a user-supplied duration string.
///
/// Formats are tried in order and the first match wins:
/// - `"5"` or `"5.5"`: minutes, fractions allowed
/// - `"5:30"`: minutes and seconds
/// - `"1:30:45"`: hours, minutes and seconds
///
/// Colon-separated components must be non-negative integers. They are not
/// range-checked, so `"5:75"` is 375 seconds.
pub fn parse_duration(input: &str) -> Result<TimerDuration> {
    let trimmed = input.trim();

    if let Some(duration) = parse_minutes(trimmed) {
        return Ok(duration);
    }

    if trimmed.contains(':') {
        let parts: Vec<&str> = trimmed.split(':').collect();
        let parsed = match parts.as_slice() {
            [minutes, seconds] => parse_components(&[minutes, seconds], &[60.0, 1.0]),
            [hours, minutes, seconds] => {
                parse_components(&[hours, minutes, seconds], &[3600.0, 60.0, 1.0])
            }
            _ => None,
        };
        if let Some(duration) = parsed {
            return Ok(duration);
        }
    }

    Err(CountdownError::InvalidFormat(input.to_string()))
}

fn parse_minutes(input: &str) -> Option<TimerDuration> {
    let minutes: f64 = input.parse().ok()?;
    TimerDuration::from_minutes(minutes)
}

fn parse_components(parts: &[&str], weights: &[f64]) -> Option<TimerDuration> {
    let mut seconds = 0.0;
    for (part, weight) in parts.iter().zip(weights) {
        let value: u64 = part.parse().ok()?;
        seconds += value as f64 * weight;
    }
    TimerDuration::from_secs_f64(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(input: &str) -> f64 {
        parse_duration(input).unwrap().as_secs_f64()
    }

    #[test]
    fn test_plain_minutes() {
        assert_eq!(secs("5"), 300.0);
        assert_eq!(secs("5.5"), 330.0);
        assert_eq!(secs(" 10 "), 600.0);
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(secs("5:30"), 330.0);
        assert_eq!(secs("0:45"), 45.0);
        assert_eq!(secs("5:75"), 375.0);
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(secs("1:30:45"), 5445.0);
        assert_eq!(secs("0:00:00"), 0.0);
    }

    #[test]
    fn test_garbage_is_invalid_format() {
        let err = parse_duration("garbage").unwrap_err();
        assert_eq!(err, CountdownError::InvalidFormat("garbage".to_string()));
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        for input in ["-5", "-0.5", "inf", "NaN", "5:-3", "-1:00:00"] {
            assert!(parse_duration(input).is_err(), "accepted {input}");
        }
    }

    #[test]
    fn test_colon_components_must_be_integers() {
        for input in ["5.5:30", "1:2:3:4", "5:", ":30", "a:b:c"] {
            assert!(parse_duration(input).is_err(), "accepted {input}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for seconds in [0.0, 1.0, 59.5, 300.0, 330.0, 5445.0, 12345.678] {
            let duration = TimerDuration::from_secs_f64(seconds).unwrap();
            let reparsed = parse_duration(&duration.to_string()).unwrap();
            assert!((reparsed.as_secs_f64() - seconds).abs() < 1e-9);
        }
    }

    #[test]
    fn test_to_chrono() {
        let duration = parse_duration("5.5").unwrap();
        assert_eq!(duration.to_chrono(), Some(TimeDelta::seconds(330)));
        let huge = TimerDuration::from_secs_f64(1e300).unwrap();
        assert_eq!(huge.to_chrono(), None);
    }

    #[test]
    fn test_default_is_five_minutes() {
        assert_eq!(TimerDuration::default().as_secs_f64(), 300.0);
    }
}

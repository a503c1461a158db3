//! Target instant resolution

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::duration::{parse_duration, TimerDuration};
use crate::error::{CountdownError, Result};

/// Where the target instant came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TargetSource {
    /// Next occurrence of an explicit `--time`
    TimeOfDay { time: NaiveTime },
    /// `now + --duration`
    Duration { seconds: f64 },
    /// Neither input was usable, so the default duration applies
    Default { seconds: f64 },
}

/// The absolute point in time a run counts down to. Fixed once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetInstant {
    at: DateTime<Local>,
    source: TargetSource,
}

impl TargetInstant {
    pub fn new(at: DateTime<Local>, source: TargetSource) -> Self {
        Self { at, source }
    }

    /// Target `duration` after `now`, or `None` if that is past the calendar's range
    pub fn after(now: DateTime<Local>, duration: TimerDuration) -> Option<Self> {
        let at = now.checked_add_signed(duration.to_chrono()?)?;
        Some(Self::new(at, TargetSource::Duration { seconds: duration.as_secs_f64() }))
    }

    pub fn at(&self) -> DateTime<Local> {
        self.at
    }

    pub fn source(&self) -> &TargetSource {
        &self.source
    }
}

/// Parse `HH:MM` or `HH:MM:SS`
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    let format = match trimmed.split(':').count() {
        3 => "%H:%M:%S",
        _ => "%H:%M",
    };
    NaiveTime::parse_from_str(trimmed, format)
        .map_err(|_| CountdownError::InvalidTimeOfDay(input.to_string()))
}

/// The first moment after `now` whose time-of-day is `time`: today if that
/// is still ahead, otherwise tomorrow.
pub fn next_occurrence(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        today + TimeDelta::days(1)
    }
}

/// The first instant after `now` at which a clock in `tz` reads `time`.
///
/// A time repeated by a DST fall-back yields whichever of its two instants
/// comes next. Returns `None` when the next occurrence falls in a DST gap.
pub fn next_instant<Tz: TimeZone>(tz: &Tz, time: NaiveTime, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let local_now = now.naive_local();
    let candidates = [local_now.date().and_time(time), next_occurrence(time, local_now)];

    for naive in candidates {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(at) if at > *now => return Some(at),
            LocalResult::Ambiguous(a, b) => {
                let (first, second) = if a <= b { (a, b) } else { (b, a) };
                if first > *now {
                    return Some(first);
                }
                if second > *now {
                    return Some(second);
                }
            }
            LocalResult::None if naive > local_now => return None,
            _ => {}
        }
    }
    None
}

/// Resolve the CLI inputs into exactly one target instant.
///
/// `time` and `duration` are mutually exclusive. An unparseable value of
/// either is logged and replaced by the default five-minute duration.
pub fn resolve_target(
    time: Option<&str>,
    duration: Option<&str>,
    now: DateTime<Local>,
) -> Result<TargetInstant> {
    match (time, duration) {
        (Some(_), Some(_)) => Err(CountdownError::ConflictingTargets),
        (Some(time), None) => match resolve_time_of_day(time, now) {
            Ok(target) => {
                info!("Counting down to {}", target.at().format("%Y-%m-%d %H:%M:%S"));
                Ok(target)
            }
            Err(e) => {
                warn!("{}. Using default duration.", e);
                Ok(default_target(now))
            }
        },
        (None, Some(duration)) => match resolve_duration(duration, now) {
            Ok(target) => {
                info!("Counting down to {}", target.at().format("%Y-%m-%d %H:%M:%S"));
                Ok(target)
            }
            Err(e) => {
                warn!("{}. Using default duration (5 minutes).", e);
                Ok(default_target(now))
            }
        },
        (None, None) => {
            debug!("No target given, using default duration");
            Ok(default_target(now))
        }
    }
}

fn resolve_time_of_day(input: &str, now: DateTime<Local>) -> Result<TargetInstant> {
    let time = parse_time_of_day(input)?;
    // Times skipped by a DST change cannot be counted down to
    let at = next_instant(&Local, time, &now)
        .ok_or_else(|| CountdownError::InvalidTimeOfDay(input.to_string()))?;
    Ok(TargetInstant::new(at, TargetSource::TimeOfDay { time }))
}

fn resolve_duration(input: &str, now: DateTime<Local>) -> Result<TargetInstant> {
    let duration = parse_duration(input)?;
    TargetInstant::after(now, duration).ok_or_else(|| CountdownError::InvalidFormat(input.to_string()))
}

fn default_target(now: DateTime<Local>) -> TargetInstant {
    let duration = TimerDuration::default();
    let at = duration
        .to_chrono()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(now);
    TargetInstant::new(at, TargetSource::Default { seconds: duration.as_secs_f64() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use chrono_tz::America::New_York;

    fn new_york(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<chrono_tz::Tz> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&New_York)
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(
            parse_time_of_day("14:30").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day("09:05:07").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 7).unwrap()
        );
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("12:00:00:00").is_err());
    }

    #[test]
    fn test_next_occurrence_later_today() {
        let now = naive(2024, 3, 10, 9, 0, 0);
        let time = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert_eq!(next_occurrence(time, now), naive(2024, 3, 10, 17, 0, 0));
    }

    #[test]
    fn test_next_occurrence_rolls_over_to_tomorrow() {
        let now = naive(2024, 3, 10, 23, 50, 0);
        let time = NaiveTime::from_hms_opt(0, 10, 0).unwrap();
        assert_eq!(next_occurrence(time, now), naive(2024, 3, 11, 0, 10, 0));
    }

    #[test]
    fn test_next_occurrence_equal_to_now_is_tomorrow() {
        let now = naive(2024, 12, 31, 12, 0, 0);
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(next_occurrence(time, now), naive(2025, 1, 1, 12, 0, 0));
    }

    #[test]
    fn test_conflicting_inputs_are_rejected() {
        let result = resolve_target(Some("12:00"), Some("5"), Local::now());
        assert_eq!(result, Err(CountdownError::ConflictingTargets));
    }

    #[test]
    fn test_duration_target() {
        let now = Local::now();
        let target = resolve_target(None, Some("1:30:45"), now).unwrap();
        assert_eq!(target.at() - now, TimeDelta::seconds(5445));
        assert_eq!(target.source(), &TargetSource::Duration { seconds: 5445.0 });
    }

    #[test]
    fn test_bad_duration_falls_back_to_default() {
        let now = Local::now();
        let target = resolve_target(None, Some("soon"), now).unwrap();
        assert_eq!(target.at() - now, TimeDelta::seconds(300));
        assert_eq!(target.source(), &TargetSource::Default { seconds: 300.0 });
    }

    #[test]
    fn test_bad_time_falls_back_to_default() {
        let now = Local::now();
        let target = resolve_target(Some("lunchtime"), None, now).unwrap();
        assert_eq!(target.at() - now, TimeDelta::seconds(300));
    }

    #[test]
    fn test_no_inputs_use_default() {
        let now = Local::now();
        let target = resolve_target(None, None, now).unwrap();
        assert_eq!(target.at() - now, TimeDelta::seconds(300));
    }

    #[test]
    fn test_time_target_is_in_the_future() {
        let now = Local::now();
        let target = resolve_target(Some("00:00"), None, now).unwrap();
        assert!(target.at() > now);
        assert!(target.at() - now <= TimeDelta::days(1) + TimeDelta::hours(1));
    }

    #[test]
    fn test_out_of_range_duration_falls_back_to_default() {
        let now = Local::now();
        let target = resolve_target(None, Some("1e300"), now).unwrap();
        assert_eq!(target.source(), &TargetSource::Default { seconds: 300.0 });
    }

    #[test]
    fn test_default_target_matches_default_duration() {
        let now = Local::now();
        let target = default_target(now);
        assert_eq!(Some(target.at() - now), TimerDuration::default().to_chrono());
    }

    #[test]
    fn test_next_instant_plain_day() {
        // 10:00 EDT
        let now = new_york(2025, 7, 1, 14, 0);
        assert_eq!(next_instant(&New_York, hm(11, 0), &now), Some(new_york(2025, 7, 1, 15, 0)));
        assert_eq!(next_instant(&New_York, hm(9, 0), &now), Some(new_york(2025, 7, 2, 13, 0)));
    }

    #[test]
    fn test_repeated_hour_takes_first_pass() {
        // 01:30 EDT, before clocks fall back at 02:00 EDT
        let now = new_york(2025, 11, 2, 5, 30);
        let target = next_instant(&New_York, hm(1, 45), &now).unwrap();
        assert_eq!(target, new_york(2025, 11, 2, 5, 45));
        assert_eq!(target - now, TimeDelta::minutes(15));
    }

    #[test]
    fn test_repeated_hour_takes_second_pass_once_first_is_gone() {
        // 01:50 EDT: 01:45 EDT has passed but 01:45 EST is still ahead
        let now = new_york(2025, 11, 2, 5, 50);
        assert_eq!(next_instant(&New_York, hm(1, 45), &now), Some(new_york(2025, 11, 2, 6, 45)));

        // 01:30 EST, during the second pass
        let now = new_york(2025, 11, 2, 6, 30);
        assert_eq!(next_instant(&New_York, hm(1, 45), &now), Some(new_york(2025, 11, 2, 6, 45)));
        assert_eq!(next_instant(&New_York, hm(1, 15), &now), Some(new_york(2025, 11, 3, 6, 15)));
    }

    #[test]
    fn test_skipped_hour_has_no_instant() {
        // 01:00 EST on spring-forward day; 02:30 does not exist
        let now = new_york(2025, 3, 9, 6, 0);
        assert_eq!(next_instant(&New_York, hm(2, 30), &now), None);
    }

    #[test]
    fn test_skipped_hour_already_passed_rolls_to_tomorrow() {
        // 12:00 EDT on spring-forward day
        let now = new_york(2025, 3, 9, 16, 0);
        assert_eq!(next_instant(&New_York, hm(2, 30), &now), Some(new_york(2025, 3, 10, 6, 30)));
    }
}

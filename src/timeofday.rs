//! Time-of-day conversions for the prediction flow
//!
//! The model consumes the wake-up time as seconds since midnight and
//! produces a wakefulness duration in seconds; bedtime arithmetic wraps
//! across midnight.

use chrono::{NaiveTime, TimeDelta, Timelike};

/// Seconds elapsed since midnight, from hour and minute only.
///
/// The seconds component of the time is deliberately discarded; the model
/// was trained on minute-resolution wake times.
pub fn wake_seconds(time: NaiveTime) -> u32 {
    time.hour() * 3600 + time.minute() * 60
}

/// Subtract a wakefulness duration from the wake-up time.
///
/// Fractional seconds are rounded to the nearest whole second. Subtraction
/// wraps across midnight, so an early wake time with a long duration lands
/// on the previous evening.
pub fn bedtime_from(wake_time: NaiveTime, awake_seconds: f64) -> NaiveTime {
    let seconds = awake_seconds.round() as i64;
    wake_time - TimeDelta::seconds(seconds)
}

/// Format a bedtime for display (hour:minute)
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_wake_seconds_default_wake_time() {
        assert_eq!(wake_seconds(hms(7, 0, 0)), 25200);
    }

    #[test]
    fn test_wake_seconds_ignores_seconds_component() {
        assert_eq!(wake_seconds(hms(7, 0, 59)), 25200);
        assert_eq!(wake_seconds(hms(23, 45, 12)), 23 * 3600 + 45 * 60);
    }

    #[test]
    fn test_wake_seconds_midnight() {
        assert_eq!(wake_seconds(hms(0, 0, 0)), 0);
    }

    #[test]
    fn test_bedtime_same_day() {
        // 22:00 minus 2 hours
        assert_eq!(bedtime_from(hms(22, 0, 0), 7200.0), hms(20, 0, 0));
    }

    #[test]
    fn test_bedtime_wraps_across_midnight() {
        // 07:00 minus 8 hours lands on 23:00 the previous evening
        assert_eq!(bedtime_from(hms(7, 0, 0), 28800.0), hms(23, 0, 0));
    }

    #[test]
    fn test_bedtime_rounds_fractional_seconds() {
        assert_eq!(bedtime_from(hms(7, 0, 0), 28799.6), hms(23, 0, 0));
        assert_eq!(bedtime_from(hms(7, 0, 0), 28800.4), hms(23, 0, 0));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(hms(23, 0, 0)), "23:00");
        assert_eq!(format_time(hms(6, 5, 0)), "06:05");
    }
}

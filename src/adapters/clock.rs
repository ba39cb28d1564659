use crate::domain::model::{CurrentMoment, MinuteOfDay};
use crate::domain::ports::Clock;
use chrono::{DateTime, Datelike, Duration, Local, Offset, Timelike, Utc};

/// Offset in minutes applied when the environment reports no usable
/// local-UTC offset. UTC-8, Pacific Standard Time.
///
/// Known limitation: a machine genuinely running on UTC reports a zero
/// offset too and cannot be told apart from one where the lookup is
/// unsupported, so it also gets Pacific time.
pub const PACIFIC_FALLBACK_OFFSET_MIN: i64 = -480;

/// Wall clock normalized to the Pacific reference offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> CurrentMoment {
        let reported_offset_min = i64::from(Local::now().offset().fix().local_minus_utc()) / 60;
        moment_with_offset(Utc::now(), reported_offset_min)
    }
}

/// Total: every instant and offset maps to a moment.
fn moment_with_offset(utc: DateTime<Utc>, reported_offset_min: i64) -> CurrentMoment {
    let offset_min = if reported_offset_min == 0 {
        PACIFIC_FALLBACK_OFFSET_MIN
    } else {
        reported_offset_min
    };
    let shifted = utc + Duration::minutes(offset_min);

    CurrentMoment {
        day_of_week: shifted.weekday().num_days_from_sunday() as u8,
        minute: MinuteOfDay::from_hm(shifted.hour() as u16, shifted.minute() as u16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zero_offset_falls_back_to_pacific() {
        // Wed 2024-06-12 02:30 UTC is Tue 18:30 Pacific
        let utc = Utc.with_ymd_and_hms(2024, 6, 12, 2, 30, 0).unwrap();
        let moment = moment_with_offset(utc, 0);
        assert_eq!(moment.day_of_week, 2);
        assert_eq!(moment.minute, MinuteOfDay::from_hm(18, 30));
    }

    #[test]
    fn test_reported_offset_is_used() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 12, 2, 30, 0).unwrap();
        let moment = moment_with_offset(utc, -420); // PDT
        assert_eq!(moment.day_of_week, 2);
        assert_eq!(moment.minute, MinuteOfDay::from_hm(19, 30));
    }

    #[test]
    fn test_shift_can_cross_the_week_boundary() {
        // Sun 00:10 UTC shifted back lands on Saturday
        let utc = Utc.with_ymd_and_hms(2024, 6, 9, 0, 10, 0).unwrap();
        let moment = moment_with_offset(utc, 0);
        assert_eq!(moment.day_of_week, 6);
        assert_eq!(moment.minute, MinuteOfDay::from_hm(16, 10));
    }
}

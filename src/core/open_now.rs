use crate::domain::model::{CurrentMoment, PermitRecord};

/// Returns the subset of `records` whose opening window contains `moment`,
/// preserving input order. Pure; the input is untouched.
pub fn open_now(records: &[PermitRecord], moment: CurrentMoment) -> Vec<PermitRecord> {
    records
        .iter()
        .filter(|record| is_open_at(record, moment))
        .cloned()
        .collect()
}

/// Day gate first: a record only applies on its own `dayorder`. Within the
/// day, start is inclusive and end is exclusive, uniformly.
fn is_open_at(record: &PermitRecord, moment: CurrentMoment) -> bool {
    if record.dayorder != moment.day_of_week {
        return false;
    }

    let now = moment.minute;
    if record.start24 == record.end24 {
        // open around the clock that day
        return true;
    }
    if record.start24 > record.end24 {
        // window spans midnight; closed only inside [end, start)
        now < record.end24 || now >= record.start24
    } else {
        record.start24 <= now && now < record.end24
    }
}

/// Stable ascending sort on the vendor name, case-insensitively. Ties keep
/// their original relative order.
pub fn sort_by_applicant(records: &mut [PermitRecord]) {
    records.sort_by(|a, b| {
        a.applicant
            .to_lowercase()
            .cmp(&b.applicant.to_lowercase())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MinuteOfDay;

    fn record(name: &str, dayorder: u8, start: &str, end: &str) -> PermitRecord {
        PermitRecord {
            applicant: name.to_string(),
            location: format!("{} St", name),
            dayorder,
            start24: MinuteOfDay::parse(start).unwrap(),
            end24: MinuteOfDay::parse(end).unwrap(),
        }
    }

    fn at(day: u8, clock: &str) -> CurrentMoment {
        CurrentMoment {
            day_of_week: day,
            minute: MinuteOfDay::parse(clock).unwrap(),
        }
    }

    #[test]
    fn test_around_the_clock_window_matches_any_time() {
        let records = vec![record("AllDay", 2, "00:00", "00:00")];
        for clock in ["00:00", "03:17", "12:00", "23:59"] {
            assert_eq!(open_now(&records, at(2, clock)).len(), 1, "at {clock}");
        }
    }

    #[test]
    fn test_day_gate_excludes_other_days() {
        let records = vec![record("AllDay", 2, "00:00", "00:00")];
        assert!(open_now(&records, at(3, "12:00")).is_empty());
        assert!(open_now(&records, at(0, "12:00")).is_empty());
    }

    #[test]
    fn test_same_day_window_boundaries() {
        let records = vec![record("Lunch", 5, "10:00", "14:00")];
        assert!(open_now(&records, at(5, "09:59")).is_empty());
        assert_eq!(open_now(&records, at(5, "10:00")).len(), 1); // start inclusive
        assert_eq!(open_now(&records, at(5, "13:59")).len(), 1);
        assert!(open_now(&records, at(5, "14:00")).is_empty()); // end exclusive
    }

    #[test]
    fn test_overnight_window_late_start() {
        // Tuesday 23:30 against a 22:00-06:00 Tuesday window
        let records = vec![record("NightOwl", 2, "22:00", "06:00")];
        assert_eq!(open_now(&records, at(2, "23:30")).len(), 1);
    }

    #[test]
    fn test_overnight_window_morning_tail_and_closed_gap() {
        let records = vec![record("NightOwl", 2, "22:00", "06:00")];
        assert_eq!(open_now(&records, at(2, "05:59")).len(), 1);
        assert!(open_now(&records, at(2, "06:00")).is_empty()); // end exclusive
        assert!(open_now(&records, at(2, "12:00")).is_empty()); // inside [end, start)
        assert!(open_now(&records, at(2, "21:59")).is_empty());
        assert_eq!(open_now(&records, at(2, "22:00")).len(), 1); // start inclusive
    }

    #[test]
    fn test_filter_preserves_input_order_and_input() {
        let records = vec![
            record("Zed", 1, "08:00", "20:00"),
            record("Amy", 1, "00:00", "23:00"),
            record("Mia", 2, "08:00", "20:00"),
        ];
        let open = open_now(&records, at(1, "12:00"));
        let names: Vec<&str> = open.iter().map(|r| r.applicant.as_str()).collect();
        assert_eq!(names, ["Zed", "Amy"]);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut records = vec![
            record("banana cart", 1, "08:00", "20:00"),
            record("Apple Cart", 1, "08:00", "20:00"),
            record("APPLE CART", 1, "09:00", "21:00"),
        ];
        sort_by_applicant(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.applicant.as_str()).collect();
        // the two equal-key apples keep their original relative order
        assert_eq!(names, ["Apple Cart", "APPLE CART", "banana cart"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = vec![
            record("charlie", 1, "08:00", "20:00"),
            record("Bravo", 1, "08:00", "20:00"),
            record("alpha", 1, "08:00", "20:00"),
        ];
        sort_by_applicant(&mut once);
        let mut twice = once.clone();
        sort_by_applicant(&mut twice);
        assert_eq!(once, twice);
    }
}

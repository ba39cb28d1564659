use std::fmt;

/// Minutes since midnight, `0..1440`. The single clock representation used
/// everywhere past the ingestion boundary; the wire's `"HH:MM"` strings and
/// bare-hour integers are converted into this when permits are deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const PER_DAY: u16 = 24 * 60;

    pub fn new(minutes: u16) -> Option<Self> {
        (minutes < Self::PER_DAY).then_some(Self(minutes))
    }

    /// Infallible constructor for components already in range, e.g. values
    /// coming out of a calendar library.
    pub fn from_hm(hour: u16, minute: u16) -> Self {
        Self((hour % 24) * 60 + (minute % 60))
    }

    /// Accepts `"HH:MM"`, `"H:MM"` and bare-hour forms (`"9"`); the permit
    /// dataset carries all three.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((h, m)) => {
                let hour: u16 = h.parse().ok()?;
                let minute: u16 = m.parse().ok()?;
                if hour > 23 || minute > 59 {
                    return None;
                }
                Some(Self(hour * 60 + minute))
            }
            None => {
                let hour: u16 = s.parse().ok()?;
                (hour < 24).then_some(Self(hour * 60))
            }
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// One row of the mobile food permit schedule: a vendor's opening window
/// for a single day of the week. A vendor with hours on several days shows
/// up as several records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitRecord {
    pub applicant: String,
    pub location: String,
    /// 0 = Sunday .. 6 = Saturday, the dataset's convention.
    pub dayorder: u8,
    pub start24: MinuteOfDay,
    pub end24: MinuteOfDay,
}

/// The current instant shifted to the Pacific reference offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentMoment {
    /// 0 = Sunday .. 6 = Saturday, matching `PermitRecord::dayorder`.
    pub day_of_week: u8,
    pub minute: MinuteOfDay,
}

/// A normalized reply to the pagination prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageReply {
    More,
    Stop,
    Invalid,
}

impl PageReply {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" => PageReply::More,
            "n" => PageReply::Stop,
            _ => PageReply::Invalid,
        }
    }
}

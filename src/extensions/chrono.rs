use crate::core::types::DayOfWeek;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

pub trait WeekdayExt {
    fn to_day_of_week(self) -> DayOfWeek;
}

impl WeekdayExt for Weekday {
    fn to_day_of_week(self) -> DayOfWeek {
        match self {
            Weekday::Mon => DayOfWeek::Mon,
            Weekday::Tue => DayOfWeek::Tue,
            Weekday::Wed => DayOfWeek::Wed,
            Weekday::Thu => DayOfWeek::Thu,
            Weekday::Fri => DayOfWeek::Fri,
            Weekday::Sat => DayOfWeek::Sat,
            Weekday::Sun => DayOfWeek::Sun,
        }
    }
}

pub trait DayOfWeekExt {
    fn to_weekday(self) -> Weekday;
}

impl DayOfWeekExt for DayOfWeek {
    fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Mon => Weekday::Mon,
            DayOfWeek::Tue => Weekday::Tue,
            DayOfWeek::Wed => Weekday::Wed,
            DayOfWeek::Thu => Weekday::Thu,
            DayOfWeek::Fri => Weekday::Fri,
            DayOfWeek::Sat => Weekday::Sat,
            DayOfWeek::Sun => Weekday::Sun,
        }
    }
}

/// Calendar-boundary helpers used by the month grid and the rule engine.
pub trait NaiveDateExt {
    fn start_of_month(self) -> NaiveDate;
    fn end_of_month(self) -> NaiveDate;
    /// First day of the week containing `self`, for a grid starting on `week_start`.
    fn start_of_week(self, week_start: Weekday) -> NaiveDate;
    /// Last day of the week containing `self`, for a grid starting on `week_start`.
    fn end_of_week(self, week_start: Weekday) -> NaiveDate;
    fn is_saturday(self) -> bool;
    fn is_sunday(self) -> bool;
}

impl NaiveDateExt for NaiveDate {
    fn start_of_month(self) -> NaiveDate {
        self.with_day(1).unwrap()
    }

    fn end_of_month(self) -> NaiveDate {
        self.start_of_month() + Months::new(1) - Duration::days(1)
    }

    fn start_of_week(self, week_start: Weekday) -> NaiveDate {
        self - Duration::days(self.weekday().days_since(week_start) as i64)
    }

    fn end_of_week(self, week_start: Weekday) -> NaiveDate {
        self.start_of_week(week_start) + Duration::days(6)
    }

    fn is_saturday(self) -> bool {
        self.weekday() == Weekday::Sat
    }

    fn is_sunday(self) -> bool {
        self.weekday() == Weekday::Sun
    }
}

/// Inclusive day-by-day iteration over `[start, end]`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

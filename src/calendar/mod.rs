use crate::extensions::chrono::{NaiveDateExt, days_inclusive};
use chrono::{Datelike, Months, NaiveDate, Weekday};


/// One rendered month: a label plus 4 to 6 week rows of 7 days each,
/// padded with the neighboring months' days to full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month_label: String,
    pub week_rows: Vec<Vec<NaiveDate>>,
}

impl MonthGrid {
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.week_rows.first().and_then(|row| row.first()).copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.week_rows.last().and_then(|row| row.last()).copied()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => first <= day && day <= last,
            _ => false,
        }
    }
}

/// Pure date-math builder for the month view. Navigation works on calendar
/// months, never on visible grid rows; keying off the last rendered row is
/// exactly the off-by-one-week bug this avoids.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGrid {
    anchor: NaiveDate,
    week_start: Weekday,
}

impl CalendarGrid {
    /// Default: grid weeks run Sunday through Saturday.
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            week_start: Weekday::Sun,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn build(&self) -> MonthGrid {
        let first = self.anchor.start_of_month().start_of_week(self.week_start);
        let last = self.anchor.end_of_month().end_of_week(self.week_start);

        let days: Vec<NaiveDate> = days_inclusive(first, last).collect();
        let week_rows = days.chunks(7).map(|week| week.to_vec()).collect();

        MonthGrid {
            month_label: self.anchor.format("%B %Y").to_string(),
            week_rows,
        }
    }

    /// First day of the month after `anchor`'s month.
    pub fn next_month(anchor: NaiveDate) -> NaiveDate {
        anchor.start_of_month() + Months::new(1)
    }

    /// First day of the month before `anchor`'s month.
    pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
        anchor.start_of_month() - Months::new(1)
    }

    /// Anchor for jumping back to the current month.
    pub fn month_of(day: NaiveDate) -> NaiveDate {
        day.start_of_month()
    }

    pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }
}

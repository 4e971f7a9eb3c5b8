
use crate::core::aliases::AvailabilityMap;
use crate::core::models::{DayAvailability, Season};
use crate::core::types::{BookingMode, Property, SelectionState};
use crate::extensions::chrono::days_inclusive;
use chrono::NaiveDate;

use super::EvalContext;

pub(super) fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2099-01-01 is a Thursday; Saturdays fall on Jan 3/10/17/24/31.
pub(super) fn today() -> NaiveDate {
    ymd(2099, 1, 1)
}

/// Owned availability + season data a test can mutate before borrowing it
/// into an `EvalContext`.
pub(super) struct Fixture {
    pub property: Property,
    pub mode: BookingMode,
    pub state: SelectionState,
    pub range_start: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub allow_saturdays: bool,
    pub availability: AvailabilityMap,
    pub seasons: Vec<Season>,
}

impl Fixture {
    /// Every day of Jan and Feb 2099 open with 8 spots.
    pub fn new(property: Property) -> Self {
        let mut availability = AvailabilityMap::new();
        for day in days_inclusive(ymd(2099, 1, 1), ymd(2099, 2, 28)) {
            availability.insert(day, DayAvailability::open(day, 8));
        }
        Self {
            property,
            mode: BookingMode::Day,
            state: SelectionState::SetStart,
            range_start: None,
            max: None,
            allow_saturdays: false,
            availability,
            seasons: Vec::new(),
        }
    }

    pub fn tahoe() -> Self {
        Self::new(Property::Tahoe)
    }

    pub fn clear_lake() -> Self {
        Self::new(Property::ClearLake)
    }

    pub fn set_day(&mut self, record: DayAvailability) {
        self.availability.insert(record.date, record);
    }

    pub fn picking_end_from(&mut self, start: NaiveDate) {
        self.state = SelectionState::SetEnd;
        self.range_start = Some(start);
    }

    pub fn ctx(&self) -> EvalContext<'_> {
        EvalContext {
            min: today(),
            max: self.max,
            range_start: self.range_start,
            state: self.state,
            property: self.property,
            today: today(),
            mode: self.mode,
            availability: &self.availability,
            seasons: &self.seasons,
            allow_saturdays: self.allow_saturdays,
        }
    }
}

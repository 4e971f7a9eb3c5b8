use crate::core::types::Property;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable per-day snapshot produced by an `AvailabilitySource`. The rule
/// engine only reads these; a refreshed snapshot replaces the map wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub is_blacked_out: bool,
    pub has_buyout: bool,
    pub day_bookings_count: u32,
    pub spots_available: u32,
    pub can_book_day: bool,
    pub can_book_buyout: bool,
    pub has_checkin: bool,
    pub has_checkout: bool,
    pub is_changeover_day: bool,
}

impl DayAvailability {
    /// A fully open day with `spots` shared spots.
    pub fn open(date: NaiveDate, spots: u32) -> Self {
        Self {
            date,
            is_blacked_out: false,
            has_buyout: false,
            day_bookings_count: 0,
            spots_available: spots,
            can_book_day: true,
            can_book_buyout: true,
            has_checkin: false,
            has_checkout: false,
            is_changeover_day: false,
        }
    }

    pub fn blacked_out(date: NaiveDate) -> Self {
        Self {
            is_blacked_out: true,
            can_book_day: false,
            can_book_buyout: false,
            ..Self::open(date, 0)
        }
    }

    pub fn with_buyout(mut self) -> Self {
        self.has_buyout = true;
        self.can_book_day = false;
        self.can_book_buyout = false;
        self
    }

    pub fn with_bookings(mut self, count: u32) -> Self {
        self.day_bookings_count = count;
        if count > 0 {
            self.can_book_buyout = false;
        }
        self
    }

    pub fn with_spots(mut self, spots: u32) -> Self {
        self.spots_available = spots;
        self
    }

    pub fn with_checkin(mut self) -> Self {
        self.has_checkin = true;
        self.is_changeover_day = self.has_checkout;
        self
    }

    pub fn with_checkout(mut self) -> Self {
        self.has_checkout = true;
        self.is_changeover_day = self.has_checkin;
        self
    }
}

impl fmt::Display for DayAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DayAvailability(date={}, blackout={}, buyout={}, bookings={}, spots={}, checkin={}, checkout={})",
            self.date.format("%Y-%m-%d"),
            self.is_blacked_out,
            self.has_buyout,
            self.day_bookings_count,
            self.spots_available,
            self.has_checkin,
            self.has_checkout
        )
    }
}

/// Date-bounded booking policy window for a property: how long a stay may be
/// and how far ahead it may be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub property: Property,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub max_nights: i64,
    pub advance_booking_days: Option<i64>,
}

impl Season {
    pub fn new(
        property: Property,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
        max_nights: i64,
    ) -> Self {
        Self {
            property,
            starts_on,
            ends_on,
            max_nights,
            advance_booking_days: None,
        }
    }

    pub fn with_advance_booking_days(mut self, days: i64) -> Self {
        self.advance_booking_days = Some(days);
        self
    }

    /// Inclusive on both boundary days.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.starts_on <= day && day <= self.ends_on
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Season(property={}, {}..{}, max_nights={}, advance_days={:?})",
            self.property,
            self.starts_on.format("%Y-%m-%d"),
            self.ends_on.format("%Y-%m-%d"),
            self.max_nights,
            self.advance_booking_days
        )
    }
}

use crate::core::aliases::AvailabilityMap;
use crate::core::models::{DayAvailability, Season};
use crate::core::types::{BookingMode, Property, ReasonCode, SelectionState};
use crate::extensions::chrono::{NaiveDateExt, days_inclusive};
use chrono::{Duration, NaiveDate};

#[cfg(test)]
mod tests;

/// Everything the rule engine needs to judge one candidate day. Borrowed
/// snapshot semantics: the engine never mutates, caches, or re-fetches any of
/// this; the caller rebuilds the context when its snapshot changes.
#[derive(Debug, Clone)]
pub struct EvalContext<'a> {
    /// Earliest selectable day, usually "today".
    pub min: NaiveDate,
    /// Latest selectable day, when the caller bounds the window.
    pub max: Option<NaiveDate>,
    /// Start of the tentative range while an end pick is pending.
    pub range_start: Option<NaiveDate>,
    pub state: SelectionState,
    pub property: Property,
    pub today: NaiveDate,
    pub mode: BookingMode,
    pub availability: &'a AvailabilityMap,
    pub seasons: &'a [Season],
    /// Administrative override lifting the Tahoe Saturday rules.
    pub allow_saturdays: bool,
}

/// Selectability verdict for one day. Painting decisions belong to the
/// caller; the engine only tags why a day is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Enabled,
    Disabled(ReasonCode),
}

impl Verdict {
    pub fn is_disabled(self) -> bool {
        matches!(self, Verdict::Disabled(_))
    }

    pub fn reason(self) -> Option<ReasonCode> {
        match self {
            Verdict::Enabled => None,
            Verdict::Disabled(reason) => Some(reason),
        }
    }
}

/// Season covering `day` for this property, if any.
pub fn find_season_for_date<'a>(
    seasons: &'a [Season],
    property: Property,
    day: NaiveDate,
) -> Option<&'a Season> {
    seasons
        .iter()
        .find(|s| s.property == property && s.covers(day))
}

/// Max stay length in effect for a stay starting on `day`, falling back to
/// the property default when no season covers it.
pub fn max_nights_for(seasons: &[Season], property: Property, day: NaiveDate) -> i64 {
    find_season_for_date(seasons, property, day)
        .map(|s| s.max_nights)
        .unwrap_or_else(|| property.default_max_nights())
}

/// Ordered rule evaluation, first match wins. `is_disabled` and
/// `unavailability_reason` are both views over this single precedence list so
/// selectability and diagnostics can never disagree.
pub fn evaluate(day: NaiveDate, ctx: &EvalContext<'_>) -> Verdict {
    if day < ctx.min {
        return Verdict::Disabled(ReasonCode::PastDate);
    }

    if let Some(max) = ctx.max {
        if day > max {
            return Verdict::Disabled(ReasonCode::BeyondMax);
        }
    }

    if let Some(season) = find_season_for_date(ctx.seasons, ctx.property, day) {
        if let Some(advance_days) = season.advance_booking_days {
            if day > ctx.today + Duration::days(advance_days) {
                return Verdict::Disabled(ReasonCode::SeasonClosed);
            }
        }
    }

    // A Saturday pick outside SetEnd would become a Saturday check-in.
    if ctx.property.restricts_saturdays()
        && day.is_saturday()
        && !ctx.state.is_picking_end()
        && !ctx.allow_saturdays
    {
        return Verdict::Disabled(ReasonCode::SaturdayRestricted);
    }

    if ctx.state.is_picking_end() {
        if let Some(start) = ctx.range_start {
            return match end_date_violation(day, start, ctx) {
                Some(reason) => Verdict::Disabled(reason),
                None => Verdict::Enabled,
            };
        }
    }

    match ctx.availability.get(&day) {
        // Unknown day: the snapshot is authoritative, so fail closed.
        None => Verdict::Disabled(ReasonCode::Unavailable),
        Some(record) => match start_day_conflict(record, ctx.mode) {
            Some(reason) => Verdict::Disabled(reason),
            None => Verdict::Enabled,
        },
    }
}

pub fn is_disabled(day: NaiveDate, ctx: &EvalContext<'_>) -> bool {
    evaluate(day, ctx).is_disabled()
}

/// Diagnostic tag for a non-selectable day. Never errors; an enabled day or
/// any otherwise unclassified state resolves to `Unavailable`.
pub fn unavailability_reason(day: NaiveDate, ctx: &EvalContext<'_>) -> ReasonCode {
    evaluate(day, ctx).reason().unwrap_or(ReasonCode::Unavailable)
}

/// Can `day` close a range starting at `range_start`?
pub fn is_valid_end_date(
    day: NaiveDate,
    range_start: NaiveDate,
    ctx: &EvalContext<'_>,
) -> bool {
    end_date_violation(day, range_start, ctx).is_none()
}

/// Full-range validation used by the commit step and hover preview: the start
/// day must itself be bookable and `end` must be a valid end date for it.
pub fn is_range_valid(start: NaiveDate, end: NaiveDate, ctx: &EvalContext<'_>) -> bool {
    range_violation(start, end, ctx).is_none()
}

pub fn range_violation(
    start: NaiveDate,
    end: NaiveDate,
    ctx: &EvalContext<'_>,
) -> Option<ReasonCode> {
    match ctx.availability.get(&start) {
        None => return Some(ReasonCode::Unavailable),
        Some(record) => {
            if let Some(reason) = start_day_conflict(record, ctx.mode) {
                return Some(reason);
            }
        }
    }
    end_date_violation(end, start, ctx)
}

/// End-date rules in spec order: stay length, Saturday checkout, per-night
/// span availability, weekend inclusion.
fn end_date_violation(
    day: NaiveDate,
    range_start: NaiveDate,
    ctx: &EvalContext<'_>,
) -> Option<ReasonCode> {
    let nights = (day - range_start).num_days();
    let max_nights = max_nights_for(ctx.seasons, ctx.property, range_start);
    if nights < 1 || nights > max_nights {
        return Some(ReasonCode::MinMaxNights);
    }

    if ctx.property.restricts_saturdays() && day.is_saturday() && !ctx.allow_saturdays {
        return Some(ReasonCode::SaturdayRestricted);
    }

    // Every occupied night needs capacity. The checkout day itself is exempt:
    // checkout happens in the morning, so that night is not ours.
    for night in days_inclusive(range_start, day - Duration::days(1)) {
        match ctx.availability.get(&night) {
            None => return Some(ReasonCode::Unavailable),
            Some(record) => {
                if let Some(reason) = night_conflict(record, ctx.mode) {
                    return Some(reason);
                }
            }
        }
    }

    if ctx.property.restricts_saturdays()
        && !ctx.allow_saturdays
        && span_breaks_weekend_rule(range_start, day)
    {
        return Some(ReasonCode::WeekendRuleViolation);
    }

    None
}

/// Tahoe weekend inclusion: a span touching a Saturday must run through the
/// following Sunday.
fn span_breaks_weekend_rule(start: NaiveDate, end: NaiveDate) -> bool {
    days_inclusive(start, end).any(|d| d.is_saturday() && d + Duration::days(1) > end)
}

/// Conflicts for picking `record.date` as a new check-in day.
///
/// Same-day turnaround: a day whose only conflict is a booking checking out
/// that morning is still a valid check-in day. This is the one deliberate
/// relaxation of the occupancy rules.
fn start_day_conflict(record: &DayAvailability, mode: BookingMode) -> Option<ReasonCode> {
    if record.is_blacked_out {
        return Some(ReasonCode::Blackout);
    }

    match mode {
        BookingMode::Buyout => {
            if record.day_bookings_count > 0 {
                return Some(ReasonCode::FullyBooked);
            }
            if record.has_buyout && !record.has_checkout {
                return Some(ReasonCode::FullyBooked);
            }
        }
        BookingMode::Day => {
            if record.has_buyout && !record.has_checkout {
                return Some(ReasonCode::FullyBooked);
            }
            if record.spots_available == 0 {
                return Some(ReasonCode::FullyBooked);
            }
        }
    }

    None
}

/// Conflicts for occupying the night of `record.date` inside a span. A
/// buyout checking out that morning frees the night for the new stay.
fn night_conflict(record: &DayAvailability, mode: BookingMode) -> Option<ReasonCode> {
    if record.is_blacked_out {
        return Some(ReasonCode::Blackout);
    }

    match mode {
        BookingMode::Buyout => {
            if record.day_bookings_count > 0 {
                return Some(ReasonCode::FullyBooked);
            }
            if record.has_buyout && !record.has_checkout {
                return Some(ReasonCode::FullyBooked);
            }
        }
        BookingMode::Day => {
            if record.has_buyout && !record.has_checkout {
                return Some(ReasonCode::FullyBooked);
            }
            if record.spots_available == 0 {
                return Some(ReasonCode::NotEnoughSpots);
            }
        }
    }

    None
}

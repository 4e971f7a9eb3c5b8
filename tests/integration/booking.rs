use clubstay::core::models::{DayAvailability, Season};
use clubstay::core::source::{MemoryAvailability, MemorySeasons};
use clubstay::core::types::{BookingMode, Property, ReasonCode, SelectionState};
use clubstay::extensions::chrono::days_inclusive;

use crate::common::{
    build_session, make_temp_dir, open_winter, read_log_contents, write_config_with,
    write_valid_config, ymd,
};

#[test]
fn clear_lake_day_cycle_commits_and_logs() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let mut session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Day,
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;

    let t1 = session.pick(ymd(2099, 1, 5));
    assert_eq!(t1.state, SelectionState::SetEnd);

    let t2 = session.pick(ymd(2099, 1, 12));
    assert!(t2.committed, "a week at Clear Lake should commit");
    assert_eq!(session.range().nights(), Some(7));

    let log = read_log_contents(&dir).expect("session should have written a log file");
    assert!(log.contains("Range committed"), "log was:\n{log}");
    Ok(())
}

#[test]
fn tahoe_saturday_checkin_is_blocked() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let mut session = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;

    // Jan 3 2099 is a Saturday.
    assert_eq!(session.reason(ymd(2099, 1, 3)), ReasonCode::SaturdayRestricted);
    let t = session.pick(ymd(2099, 1, 3));
    assert_eq!(t.state, SelectionState::SetStart);
    assert!(!t.committed);
    Ok(())
}

#[test]
fn tahoe_friday_to_sunday_spans_the_weekend() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let mut session = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;

    // Friday check-in, Sunday checkout: the Saturday night is included, which
    // satisfies the weekend rule.
    session.pick(ymd(2099, 1, 2));
    assert_eq!(session.preview(ymd(2099, 1, 4)), Some(ymd(2099, 1, 4)));
    let t = session.pick(ymd(2099, 1, 4));
    assert!(t.committed);
    Ok(())
}

#[test]
fn tahoe_saturday_checkout_is_rejected() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let mut session = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;

    session.pick(ymd(2099, 1, 2));
    assert_eq!(session.preview(ymd(2099, 1, 3)), None);
    let t = session.pick(ymd(2099, 1, 3));
    assert!(!t.committed);
    assert_eq!(t.state, SelectionState::SetEnd);
    assert_eq!(session.range().start, Some(ymd(2099, 1, 2)));
    Ok(())
}

#[test]
fn allow_saturdays_lifts_the_tahoe_rules() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_config_with(&dir, "ALLOW_SATURDAYS", "true");
    let mut session = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;

    assert!(!session.is_disabled(ymd(2099, 1, 3)));
    session.pick(ymd(2099, 1, 3));
    let t = session.pick(ymd(2099, 1, 5));
    assert!(t.committed, "Saturday check-in should commit under the override");
    Ok(())
}

#[test]
fn buyout_is_blocked_by_shared_bookings_on_any_night() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let mut source = MemoryAvailability::new();
    for day in days_inclusive(ymd(2098, 11, 1), ymd(2099, 3, 31)) {
        let record = if day == ymd(2099, 1, 6) {
            DayAvailability::open(day, 6).with_bookings(1)
        } else {
            DayAvailability::open(day, 6)
        };
        source.insert(Property::ClearLake, record);
    }

    let mut session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Buyout,
        source,
        MemorySeasons::new(),
    )?;

    session.pick(ymd(2099, 1, 5));
    // Jan 6 is occupied, so a stay over that night cannot take the whole place.
    let t = session.pick(ymd(2099, 1, 8));
    assert!(!t.committed);
    // Checking out on the booked morning itself is fine.
    let t = session.pick(ymd(2099, 1, 6));
    assert!(t.committed);
    Ok(())
}

#[test]
fn season_max_nights_overrides_the_property_default() -> anyhow::Result<()> {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let seasons = MemorySeasons::new().with_season(Season::new(
        Property::Tahoe,
        ymd(2099, 1, 1),
        ymd(2099, 2, 28),
        2,
    ));
    let mut session = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        seasons,
    )?;

    // Monday check-in; three nights exceed the winter cap of two.
    session.pick(ymd(2099, 1, 5));
    assert_eq!(session.reason(ymd(2099, 1, 8)), ReasonCode::MinMaxNights);
    assert!(!session.pick(ymd(2099, 1, 8)).committed);
    assert!(session.pick(ymd(2099, 1, 7)).committed);
    Ok(())
}

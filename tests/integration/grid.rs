use chrono::Duration;
use clubstay::calendar::CalendarGrid;
use clubstay::core::source::MemorySeasons;
use clubstay::core::types::{BookingMode, Property, ReasonCode};

use crate::common::{build_session, make_temp_dir, open_winter, write_valid_config, ymd};

#[test]
fn february_2099_fits_exactly_four_rows() {
    // Feb 1 2099 is a Sunday and February has 28 days.
    let grid = CalendarGrid::new(ymd(2099, 2, 14)).build();
    assert_eq!(grid.month_label, "February 2099");
    assert_eq!(grid.week_rows.len(), 4);
    assert_eq!(grid.first_day(), Some(ymd(2099, 2, 1)));
    assert_eq!(grid.last_day(), Some(ymd(2099, 2, 28)));
}

#[test]
fn session_navigation_keeps_full_contiguous_weeks() -> anyhow::Result<()> {
    let dir = make_temp_dir("grid");
    write_valid_config(&dir);
    let mut session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Day,
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;

    for _ in 0..3 {
        let grid = session.grid();
        let flat: Vec<_> = grid.week_rows.iter().flatten().copied().collect();
        assert_eq!(flat.len() % 7, 0);
        for pair in flat.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert!(grid.contains(session.anchor()));
        session.next_month()?;
    }
    assert_eq!(session.anchor(), ymd(2099, 4, 1));
    Ok(())
}

#[test]
fn overflow_days_from_the_prior_month_stay_in_the_past() -> anyhow::Result<()> {
    let dir = make_temp_dir("grid");
    write_valid_config(&dir);
    let session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Day,
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;

    // The January grid opens on Dec 28, before today; those cells paint as
    // past even though the snapshot covers them.
    let grid = session.grid();
    assert_eq!(grid.first_day(), Some(ymd(2098, 12, 28)));
    assert_eq!(session.reason(ymd(2098, 12, 28)), ReasonCode::PastDate);
    Ok(())
}

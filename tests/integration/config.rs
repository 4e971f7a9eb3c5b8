use chrono::{Datelike, Weekday};
use clubstay::config::{Config, ConfigKey};
use clubstay::core::source::MemorySeasons;
use clubstay::core::types::{BookingMode, Property};

use crate::common::{
    build_session, make_temp_dir, open_winter, read_log_contents, write_config_with,
    write_valid_config, ymd,
};

#[test]
fn week_start_setting_shapes_the_grid() -> anyhow::Result<()> {
    let dir = make_temp_dir("config");
    write_config_with(&dir, "WEEK_START", "mon");
    let session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Day,
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;

    let grid = session.grid();
    for row in &grid.week_rows {
        assert_eq!(row[0].weekday(), Weekday::Mon);
    }
    assert_eq!(grid.first_day(), Some(ymd(2098, 12, 29)));
    Ok(())
}

#[test]
fn disabled_file_logging_writes_no_log() -> anyhow::Result<()> {
    let dir = make_temp_dir("config");
    write_config_with(&dir, "FILE_LOGGING_ENABLED", "False");
    let mut session = build_session(
        &dir,
        Property::ClearLake,
        BookingMode::Day,
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;

    session.pick(ymd(2099, 1, 5));
    session.pick(ymd(2099, 1, 8));
    assert!(read_log_contents(&dir).is_none());
    Ok(())
}

#[test]
fn edited_config_round_trips_through_disk() -> anyhow::Result<()> {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let mut config = Config::load_from(dir.join("config.json"))?;
    config.set_key(ConfigKey::DefaultProperty, "clearlake")?;
    config.set_key(ConfigKey::DefaultMode, "buyout")?;

    let reloaded = Config::load_from(dir.join("config.json"))?;
    assert_eq!(reloaded.default_property(), Property::ClearLake);
    assert_eq!(reloaded.default_mode(), BookingMode::Buyout);

    // The reloaded defaults drive the session mount.
    let session = build_session(
        &dir,
        reloaded.default_property(),
        reloaded.default_mode(),
        open_winter(Property::ClearLake, 6),
        MemorySeasons::new(),
    )?;
    assert_eq!(session.property(), Property::ClearLake);
    assert_eq!(session.mode(), BookingMode::Buyout);
    Ok(())
}

#[test]
fn saturday_override_flows_from_config_to_rules() -> anyhow::Result<()> {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let strict = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;
    assert!(strict.is_disabled(ymd(2099, 1, 3)));

    write_config_with(&dir, "ALLOW_SATURDAYS", "True");
    let relaxed = build_session(
        &dir,
        Property::Tahoe,
        BookingMode::Day,
        open_winter(Property::Tahoe, 4),
        MemorySeasons::new(),
    )?;
    assert!(!relaxed.is_disabled(ymd(2099, 1, 3)));
    Ok(())
}

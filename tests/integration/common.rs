use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use clubstay::config::Config;
use clubstay::core::models::DayAvailability;
use clubstay::core::source::{MemoryAvailability, MemorySeasons};
use clubstay::core::types::{BookingMode, Property};
use clubstay::extensions::chrono::days_inclusive;
use clubstay::logging::Logger;
use clubstay::session::CalendarSession;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_valid_config(dir: &PathBuf) {
    let cfg = r#"{
      "week_start": { "value": "SUN", "description": "First day of the week" },
      "allow_saturdays": { "value": "False", "description": "Lift Saturday rules" },
      "default_property": { "value": "tahoe", "description": "Property" },
      "default_mode": { "value": "day", "description": "Booking mode" },
      "file_logging_enabled": { "value": "True", "description": "File logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_config_with(dir: &PathBuf, key: &str, value: &str) {
    write_valid_config(dir);
    let mut cfg = Config::load_from(dir.join("config.json")).expect("config should load");
    cfg.set(key, value).expect("config edit should succeed");
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn today() -> NaiveDate {
    ymd(2099, 1, 1)
}

/// Every day of the winter window around `today()` open with `spots` each.
pub fn open_winter(property: Property, spots: u32) -> MemoryAvailability {
    let mut source = MemoryAvailability::new();
    for day in days_inclusive(ymd(2098, 11, 1), ymd(2099, 3, 31)) {
        source.insert(property, DayAvailability::open(day, spots));
    }
    source
}

/// Mount a session the way a hosting application would: config from disk,
/// logger pointed at the directory's logs/ folder.
pub fn build_session(
    dir: &PathBuf,
    property: Property,
    mode: BookingMode,
    source: MemoryAvailability,
    seasons: MemorySeasons,
) -> anyhow::Result<CalendarSession> {
    let config = Config::load_from(dir.join("config.json"))?;
    let logger = Logger::new();
    logger.set_log_dir(dir.join("logs"));
    logger.set_file_logging_enabled(config.file_logging_enabled());

    let session = CalendarSession::open(
        property,
        mode,
        today(),
        config.picker(),
        Box::new(source),
        Box::new(seasons),
        logger,
    )?;
    Ok(session)
}

pub fn read_log_contents(dir: &PathBuf) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

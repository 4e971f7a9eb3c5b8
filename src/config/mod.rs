pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    AllowSaturdaysConfigItem, BookingModeConfigItem, ConfigItem, FileLoggingConfigItem,
    PropertyConfigItem, WeekStartConfigItem,
};
use crate::core::types::{BookingMode, DayOfWeek, Property};
use crate::errors::{Error, Result};
use crate::extensions::chrono::DayOfWeekExt;
use crate::extensions::enums::valid_csv;
use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    WeekStart,
    AllowSaturdays,
    DefaultProperty,
    DefaultMode,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub week_start: WeekStartConfigItem,
    #[serde(default)]
    pub allow_saturdays: AllowSaturdaysConfigItem,
    #[serde(default)]
    pub default_property: PropertyConfigItem,
    #[serde(default)]
    pub default_mode: BookingModeConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// Engine-facing slice of the configuration: what the state machine and grid
/// need per session, passed by value so the engine stays free of file and
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub week_start: DayOfWeek,
    pub allow_saturdays: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            week_start: DayOfWeek::Sun,
            allow_saturdays: false,
        }
    }
}

impl PickerConfig {
    pub fn week_start_weekday(&self) -> Weekday {
        self.week_start.to_weekday()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_default() -> Result<Self> {
        Self::load_from("config.json")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn week_start(&self) -> DayOfWeek {
        *self.data.week_start.get_value()
    }
    pub fn allow_saturdays(&self) -> bool {
        self.data.allow_saturdays.get_value().0
    }
    pub fn default_property(&self) -> Property {
        *self.data.default_property.get_value()
    }
    pub fn default_mode(&self) -> BookingMode {
        *self.data.default_mode.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn picker(&self) -> PickerConfig {
        PickerConfig {
            week_start: self.week_start(),
            allow_saturdays: self.allow_saturdays(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        let mut rows = Vec::new();
        for key in ConfigKey::iter() {
            match key {
                ConfigKey::WeekStart => rows.push((
                    key.to_string(),
                    self.data.week_start.description().to_string(),
                    self.data.week_start.get_value().to_string(),
                )),
                ConfigKey::AllowSaturdays => rows.push((
                    key.to_string(),
                    self.data.allow_saturdays.description().to_string(),
                    self.data.allow_saturdays.get_value().to_string(),
                )),
                ConfigKey::DefaultProperty => rows.push((
                    key.to_string(),
                    self.data.default_property.description().to_string(),
                    self.data.default_property.get_value().to_string(),
                )),
                ConfigKey::DefaultMode => rows.push((
                    key.to_string(),
                    self.data.default_mode.description().to_string(),
                    self.data.default_mode.get_value().to_string(),
                )),
                ConfigKey::FileLoggingEnabled => rows.push((
                    key.to_string(),
                    self.data.file_logging_enabled.description().to_string(),
                    self.data.file_logging_enabled.get_value().to_string(),
                )),
            }
        }
        ConfigRows(rows)
    }

    pub fn set_by_index(&mut self, index: usize, new_value: &str) -> Result<()> {
        let key = ConfigKey::iter()
            .nth(index)
            .ok_or_else(|| Error::Config(format!("Invalid ID: {index}")))?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (old, res) = match key {
            ConfigKey::WeekStart => {
                let old = self.data.week_start.get_value().to_string();
                let res = self.edit(|cfg| cfg.week_start.set_value(new_value));
                (old, res)
            }
            ConfigKey::AllowSaturdays => {
                let old = self.data.allow_saturdays.get_value().to_string();
                let res = self.edit(|cfg| cfg.allow_saturdays.set_value(new_value));
                (old, res)
            }
            ConfigKey::DefaultProperty => {
                let old = self.data.default_property.get_value().to_string();
                let res = self.edit(|cfg| cfg.default_property.set_value(new_value));
                (old, res)
            }
            ConfigKey::DefaultMode => {
                let old = self.data.default_mode.get_value().to_string();
                let res = self.edit(|cfg| cfg.default_mode.set_value(new_value));
                (old, res)
            }
            ConfigKey::FileLoggingEnabled => {
                let old = self.data.file_logging_enabled.get_value().to_string();
                let res = self.edit(|cfg| cfg.file_logging_enabled.set_value(new_value));
                (old, res)
            }
        };

        if res.is_ok() {
            let new_val = match key {
                ConfigKey::WeekStart => self.data.week_start.get_value().to_string(),
                ConfigKey::AllowSaturdays => self.data.allow_saturdays.get_value().to_string(),
                ConfigKey::DefaultProperty => self.data.default_property.get_value().to_string(),
                ConfigKey::DefaultMode => self.data.default_mode.get_value().to_string(),
                ConfigKey::FileLoggingEnabled => {
                    self.data.file_logging_enabled.get_value().to_string()
                }
            };
            // stash for caller to log
            self.last_change = Some((key.to_string(), old, new_val));
        }

        res
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        use std::str::FromStr;
        let key = ConfigKey::from_str(key_str).map_err(|_| {
            Error::Config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}

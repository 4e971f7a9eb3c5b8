use crate::core::types::{BookingMode, Bool, DayOfWeek, Property};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStartConfigItem {
    pub value: DayOfWeek,
    pub description: String,
}

impl Default for WeekStartConfigItem {
    fn default() -> Self {
        Self {
            value: DayOfWeek::Sun,
            description: "First day of the week in the calendar grid.".into(),
        }
    }
}

impl ConfigItem<DayOfWeek> for WeekStartConfigItem {
    fn get_value(&self) -> &DayOfWeek {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = DayOfWeek::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowSaturdaysConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for AllowSaturdaysConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Lift the Tahoe Saturday check-in/checkout restrictions.".into(),
        }
    }
}

impl ConfigItem<Bool> for AllowSaturdaysConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfigItem {
    pub value: Property,
    pub description: String,
}

impl Default for PropertyConfigItem {
    fn default() -> Self {
        Self {
            value: Property::Tahoe,
            description: "Property a new calendar session opens on.".into(),
        }
    }
}

impl ConfigItem<Property> for PropertyConfigItem {
    fn get_value(&self) -> &Property {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Property::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingModeConfigItem {
    pub value: BookingMode,
    pub description: String,
}

impl Default for BookingModeConfigItem {
    fn default() -> Self {
        Self {
            value: BookingMode::Day,
            description: "Booking mode a new calendar session opens in.".into(),
        }
    }
}

impl ConfigItem<BookingMode> for BookingModeConfigItem {
    fn get_value(&self) -> &BookingMode {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = BookingMode::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

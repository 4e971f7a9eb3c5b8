use crate::core::models::DayAvailability;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Snapshot handed to the rule engine: one record per visible calendar day.
/// A day absent from the map is treated as unavailable.
pub type AvailabilityMap = HashMap<NaiveDate, DayAvailability>;

use std::collections::{BTreeMap, HashMap};

use crate::core::aliases::AvailabilityMap;
use crate::core::models::{DayAvailability, Season};
use crate::core::types::Property;
use crate::errors::Result;
use chrono::NaiveDate;

/// External collaborator producing per-day availability facts. The engine
/// assumes the returned map covers every day it will be asked to evaluate;
/// absent days are conservatively treated as unavailable.
pub trait AvailabilitySource {
    fn fetch(&self, start: NaiveDate, end: NaiveDate, property: Property)
    -> Result<AvailabilityMap>;
}

/// External collaborator feeding the season table.
pub trait SeasonSource {
    fn list(&self, property: Property) -> Vec<Season>;
}

/// In-memory availability store keyed per property; the default source for
/// tests and for callers that assemble snapshots themselves.
#[derive(Debug, Default)]
pub struct MemoryAvailability {
    days: HashMap<Property, BTreeMap<NaiveDate, DayAvailability>>,
}

impl MemoryAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: Property, record: DayAvailability) {
        self.days
            .entry(property)
            .or_default()
            .insert(record.date, record);
    }

    pub fn insert_all(
        &mut self,
        property: Property,
        records: impl IntoIterator<Item = DayAvailability>,
    ) {
        for record in records {
            self.insert(property, record);
        }
    }

    pub fn len(&self, property: Property) -> usize {
        self.days.get(&property).map_or(0, |m| m.len())
    }

    pub fn is_empty(&self, property: Property) -> bool {
        self.len(property) == 0
    }
}

impl AvailabilitySource for MemoryAvailability {
    fn fetch(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        property: Property,
    ) -> Result<AvailabilityMap> {
        let mut map = AvailabilityMap::new();
        if let Some(days) = self.days.get(&property) {
            for (date, record) in days.range(start..=end) {
                map.insert(*date, record.clone());
            }
        }
        Ok(map)
    }
}

/// In-memory season table.
#[derive(Debug, Default)]
pub struct MemorySeasons {
    seasons: Vec<Season>,
}

impl MemorySeasons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, season: Season) {
        self.seasons.push(season);
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.insert(season);
        self
    }
}

impl SeasonSource for MemorySeasons {
    fn list(&self, property: Property) -> Vec<Season> {
        self.seasons
            .iter()
            .filter(|s| s.property == property)
            .cloned()
            .collect()
    }
}

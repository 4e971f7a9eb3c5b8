use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Club properties. Each carries its own booking policy quirks: Tahoe has the
/// Saturday check-in/checkout restrictions and the weekend-inclusion rule,
/// Clear Lake books per-person spots instead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Property {
    #[strum(serialize = "tahoe", to_string = "tahoe")]
    Tahoe,
    #[strum(serialize = "clearlake", serialize = "clear-lake", to_string = "clearlake")]
    ClearLake,
}

impl Property {
    /// Max stay length when no season covers the night in question.
    pub fn default_max_nights(self) -> i64 {
        match self {
            Property::Tahoe => 4,
            Property::ClearLake => 30,
        }
    }

    /// Whether Saturday check-ins/checkouts are restricted at this property.
    pub fn restricts_saturdays(self) -> bool {
        matches!(self, Property::Tahoe)
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported property: '{}'. Valid properties: {}",
                s.trim(),
                valid_csv::<Property>()
            ))
        })
    }
}

/// Per-person shared bookings vs. whole-property exclusive bookings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    #[strum(serialize = "day", to_string = "day")]
    Day,
    #[strum(serialize = "buyout", to_string = "buyout")]
    Buyout,
}

impl BookingMode {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported booking mode: '{}'. Valid modes: {}",
                s.trim(),
                valid_csv::<BookingMode>()
            ))
        })
    }
}

/// Which end of the range the next pick affects. `Reset` is transient and
/// behaves as `SetStart` everywhere rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SelectionState {
    #[strum(serialize = "set-start", to_string = "set-start")]
    SetStart,
    #[strum(serialize = "set-end", to_string = "set-end")]
    SetEnd,
    #[strum(serialize = "reset", to_string = "reset")]
    Reset,
}

impl SelectionState {
    /// Collapse the transient `Reset` alias.
    pub fn effective(self) -> SelectionState {
        match self {
            SelectionState::Reset => SelectionState::SetStart,
            other => other,
        }
    }

    pub fn is_picking_end(self) -> bool {
        self.effective() == SelectionState::SetEnd
    }
}

/// Why a day is not selectable; used for tooltips and diagnostics, never for
/// control flow inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum ReasonCode {
    PastDate,
    BeyondMax,
    SeasonClosed,
    Blackout,
    FullyBooked,
    NotEnoughSpots,
    SaturdayRestricted,
    WeekendRuleViolation,
    MinMaxNights,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(
        serialize = "mon",
        serialize = "monday",
        serialize = "mon.",
        serialize = "m",
        to_string = "MON"
    )]
    Mon,
    #[strum(
        serialize = "tue",
        serialize = "tuesday",
        serialize = "tue.",
        serialize = "t",
        to_string = "TUE"
    )]
    Tue,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        serialize = "w",
        to_string = "WED"
    )]
    Wed,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        serialize = "th",
        to_string = "THU"
    )]
    Thu,
    #[strum(
        serialize = "fri",
        serialize = "friday",
        serialize = "fri.",
        serialize = "f",
        to_string = "FRI"
    )]
    Fri,
    #[strum(
        serialize = "sat",
        serialize = "saturday",
        serialize = "sat.",
        serialize = "sa",
        to_string = "SAT"
    )]
    Sat,
    #[strum(
        serialize = "sun",
        serialize = "sunday",
        serialize = "sun.",
        serialize = "su",
        to_string = "SUN"
    )]
    Sun,
}

impl DayOfWeek {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<DayOfWeek>()
            ))
        })
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DayOfWeek, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DayOfWeek::try_from(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d", to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%m-%d-%Y", to_string = "%m-%d-%Y")]
    MdYDash,
    #[strum(serialize = "%Y/%m/%d", to_string = "%Y/%m/%d")]
    YmdSlash,
    #[strum(serialize = "%m/%d/%Y", to_string = "%m/%d/%Y")]
    MdYSlash,
    #[strum(serialize = "%m-%d", to_string = "%m-%d")]
    MdDash,
    #[strum(serialize = "%m/%d", to_string = "%m/%d")]
    MdSlash,
}

#[derive(Debug, Clone)]
struct DateParseSpec {
    input: String,
    date_format: DateFormat,
}

impl DateFormat {
    fn build_parse_spec(self, input: &str) -> DateParseSpec {
        let current_year = Local::now().date_naive().year();
        match self {
            DateFormat::YmdDash | DateFormat::YmdSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::YmdDash,
            },
            DateFormat::MdYDash | DateFormat::MdYSlash => DateParseSpec {
                input: input.to_owned(),
                date_format: DateFormat::MdYDash,
            },
            DateFormat::MdDash | DateFormat::MdSlash => DateParseSpec {
                input: format!("{current_year}-{input}"),
                date_format: DateFormat::YmdDash,
            },
        }
    }
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }
    fn error_message(input: &str) -> String {
        format!("'{}'. {}", input, Self::usage())
    }

    /// Boundary parse. Everything past this point works with already-parsed
    /// `NaiveDate` values; an unparseable string never reaches the engine.
    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();

        for f in DateFormat::iter() {
            let spec = f.build_parse_spec(&input);
            if let Ok(date) = NaiveDate::parse_from_str(&spec.input, spec.date_format.as_ref()) {
                return Ok(Date(date));
            }
        }

        Err(Error::InvalidDateInput(Self::error_message(&input)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Tentative or committed stay range. Both ends optional; when both are set
/// the constructor and the state machine guarantee `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn closed(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::Domain(format!(
                "Range end {} precedes start {}.",
                end, start
            )));
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Stay length; only meaningful for a complete range.
    pub fn nights(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_days()),
            _ => None,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(s), Some(e)) => s <= day && day <= e,
            (Some(s), None) => s == day,
            _ => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_end = |d: &Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        write!(f, "{}..{}", fmt_end(&self.start), fmt_end(&self.end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::types::Property;

/// Domain-specific error set for the booking calendar engine.
///
/// "Date not selectable" is never an error; the rule engine reports that as
/// a normal disabled verdict. Errors here are malformed input at the crate
/// boundary and collaborator failures.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Boundary -------------------------------------------------
    /// Unparseable date string reaching the engine boundary.
    #[error("Invalid date input: {0}")]
    InvalidDateInput(String),

    /// Lex/semantic problems in other caller-supplied text (modes, days, ...).
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Collaborators ------------------------------------------------------
    /// An availability source failed to produce a snapshot.
    #[error("Availability source error for {property} ({start}..{end}): {message}")]
    Availability {
        property: Property,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
        message: String,
    },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Specific missing config item.
    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (log files, config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config/snapshot decode, encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a date-input error from any displayable value.
    pub fn invalid_date<S: Into<String>>(msg: S) -> Self {
        Error::InvalidDateInput(msg.into())
    }
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or_else(|| Error::ConfigItemMissing { item })
}

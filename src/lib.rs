pub mod availability;
pub mod calendar;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod selection;
pub mod session;

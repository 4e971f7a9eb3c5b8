pub mod aliases;
pub mod models;
pub mod source;
pub mod types;

//! Configuration loading.
//!
//! Two sources: the opening-hours JSON document describing the business,
//! and environment variables describing how the server runs.

mod error;
mod file;
mod server;

pub use error::ConfigError;
pub use file::{ClosedDayConfig, IntervalConfig, OpeningHoursConfig, ScheduleConfig, weekday_key};
pub use server::{DEFAULT_ADDR, DEFAULT_CONFIG_PATH, DEFAULT_STATIC_DIR, ServerConfig};

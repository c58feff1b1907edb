pub mod brands;
pub mod catalog;
pub mod config;
pub mod error;
pub mod log;
pub mod progress;
pub mod report;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod telemetry;
pub mod types;

pub use error::{ClosyError, Result};
pub use session::Session;

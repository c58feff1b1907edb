pub mod config;
pub mod progress;
pub mod report;
pub mod response;
pub mod scoring;

pub mod api;
pub mod circuit;
pub mod config;
pub mod telemetry;

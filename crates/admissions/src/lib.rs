//! Allocation engine and roster workflows for undergraduate major admissions.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

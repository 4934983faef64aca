//! Core library for the hair wellness quiz funnel: answer normalization,
//! styling risk analysis, diagnostic scoring, and the submissions surface
//! consumed by the HTTP service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

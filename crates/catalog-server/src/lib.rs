//! # Catalog Server Library
//!
//! Dependency injection wiring, telemetry setup and startup utilities
//! for the catalog server binary.

pub mod di;
pub mod startup;
pub mod telemetry;

//! parsercfc-api
//!
//! Shared, dependency-light types for the `parsercfc` tools: the resolved
//! scan configuration, and the error types that cross the boundary between
//! the scanning core, the collaborator protocol, and the CLI driver.
//!
//! This crate intentionally knows nothing about tokenizing C, running a
//! worker pool, or spawning processes — it is the contract the other crates
//! in the workspace agree on.

pub mod config;
pub mod errors;

pub use config::{CliOverrides, EnvSnapshot, ScanConfig};
pub use errors::{DriverError, DriverResult, FileError, FileErrorKind};

//! Runtime configuration for the demo binaries.

pub mod row;

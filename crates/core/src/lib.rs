//! Shared types and constants for the BlueCart database probe.

pub mod error;
pub mod fixture;
pub mod types;

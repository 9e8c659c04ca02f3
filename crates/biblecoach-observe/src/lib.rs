//! Tracing setup for the Bible Coach binaries.

pub mod tracing_setup;

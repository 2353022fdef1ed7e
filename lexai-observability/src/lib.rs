//! # lexai-observability
//!
//! Tracing subscriber setup and the span macros used across the pipeline.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};

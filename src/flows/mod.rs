//! Flows module - Commands that combine the scan passes
//!
//! Provides:
//! - generate: Write, check or print the project structure document

pub mod generate;

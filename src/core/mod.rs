//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Scan policy (path filter, counted and displayed file rules)
//! - Report data model
//! - Markdown rendering and fixed report text
//! - Path normalization utilities
//! - Errors and common utilities

pub mod error;
pub mod model;
pub mod paths;
pub mod policy;
pub mod render;
pub mod template;
pub mod util;

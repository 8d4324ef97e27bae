//! Utility functions for string formatting and manipulation.

pub mod format;

pub use format::{format_count, format_date, format_datetime, format_optional, truncate_string};

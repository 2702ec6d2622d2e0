//! Terminal output formatting
//!
//! String-building utilities for the text driver.

pub mod formatters;

//!
//! Utility functions.
//!

pub mod args;
pub mod ordered_map;

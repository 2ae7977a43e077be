//! Foundation types shared across the crate.

pub mod error;

//! Hint markup fragments.

pub mod builder;

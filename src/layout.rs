//! Host layout model: block capabilities and ancestry resolution.

pub mod model;
pub mod resolver;

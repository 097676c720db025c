//! Small presentation utilities.

pub mod money;

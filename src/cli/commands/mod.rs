//! CLI command implementations

pub mod allocate;
pub mod goals;
pub mod predict;

//! Entity type definitions

pub mod allocation;
pub mod part;

pub use allocation::{AllocationMethod, AllocationRecord, ApportionmentResult, GoalMeasure};
pub use part::{Category, PartRecord, PredictionMethod};

//! Core module - calculation engines and supporting types

pub mod allocation;
pub mod diagnostic;
pub mod dispatch;
pub mod dormant;
pub mod goal;
pub mod overstress;
pub mod prediction;
pub mod tables;

pub use allocation::{allocate, allocation_goal, foo_weight};
pub use diagnostic::{has_errors, Diagnostic, Severity};
pub use dispatch::calculate;
pub use dormant::calculate_dormant;
pub use goal::{convert_goal, from_hazard_rate_goal, from_mtbf_goal, from_reliability_goal};
pub use overstress::check_overstress;
pub use tables::{pick, pick_by_breaks, LimitRow, StressLimits, TableError};

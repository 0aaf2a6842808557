//! Allocation record and apportionment result types
//!
//! An `AllocationRecord` describes one child item receiving a share of a
//! parent reliability goal. The engine fills an `ApportionmentResult` per
//! child; it never walks the hardware tree itself, so sibling aggregates
//! (AGREE subsystem counts, FOO cumulative weight) arrive as inputs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Apportionment algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMethod {
    /// Equal apportionment across all included children.
    #[default]
    Equal,
    /// AGREE method: weights by importance and unit counts.
    Agree,
    /// ARINC method: weights by observed hazard-rate fractions.
    Arinc,
    /// Feasibility of objectives: scored intricacy/state-of-art/time/environment.
    Foo,
}

impl std::fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationMethod::Equal => write!(f, "equal"),
            AllocationMethod::Agree => write!(f, "agree"),
            AllocationMethod::Arinc => write!(f, "arinc"),
            AllocationMethod::Foo => write!(f, "foo"),
        }
    }
}

impl FromStr for AllocationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" => Ok(AllocationMethod::Equal),
            "agree" => Ok(AllocationMethod::Agree),
            "arinc" => Ok(AllocationMethod::Arinc),
            "foo" | "feasibility" => Ok(AllocationMethod::Foo),
            _ => Err(format!("Unknown allocation method: {}", s)),
        }
    }
}

/// Which measure the parent goal is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalMeasure {
    #[default]
    Reliability,
    HazardRate,
    Mtbf,
}

impl std::fmt::Display for GoalMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalMeasure::Reliability => write!(f, "reliability"),
            GoalMeasure::HazardRate => write!(f, "hazard-rate"),
            GoalMeasure::Mtbf => write!(f, "mtbf"),
        }
    }
}

impl FromStr for GoalMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reliability" | "r" => Ok(GoalMeasure::Reliability),
            "hazard-rate" | "hazard_rate" | "lambda" => Ok(GoalMeasure::HazardRate),
            "mtbf" => Ok(GoalMeasure::Mtbf),
            _ => Err(format!("Unknown goal measure: {}", s)),
        }
    }
}

fn default_included() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_one_u32() -> u32 {
    1
}

fn default_duty_cycle() -> f64 {
    100.0
}

/// One child item in an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationRecord {
    pub hardware_id: i32,
    /// Excluded children keep their current rates and receive no share.
    #[serde(default = "default_included")]
    pub included: bool,
    pub mission_time: f64,
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle: f64,
    /// AGREE: subsystems in the parent.
    #[serde(default = "default_one_u32")]
    pub n_sub_systems: u32,
    /// AGREE: elements in this subsystem.
    #[serde(default = "default_one_u32")]
    pub n_sub_elements: u32,
    /// AGREE importance / ARINC hazard-rate fraction / Equal 1-over-n.
    #[serde(default = "default_one")]
    pub weight_factor: f64,
    /// FOO scores, each nominally 1 to 10.
    #[serde(default = "default_one_u32")]
    pub int_factor: u32,
    #[serde(default = "default_one_u32")]
    pub soa_factor: u32,
    #[serde(default = "default_one_u32")]
    pub op_time_factor: u32,
    #[serde(default = "default_one_u32")]
    pub env_factor: u32,
    pub goal_measure: GoalMeasure,
    pub reliability_goal: f64,
    pub hazard_rate_goal: f64,
    pub mtbf_goal: f64,
}

impl Default for AllocationRecord {
    fn default() -> Self {
        AllocationRecord {
            hardware_id: 0,
            included: true,
            mission_time: 0.0,
            duty_cycle: default_duty_cycle(),
            n_sub_systems: 1,
            n_sub_elements: 1,
            weight_factor: 1.0,
            int_factor: 1,
            soa_factor: 1,
            op_time_factor: 1,
            env_factor: 1,
            goal_measure: GoalMeasure::default(),
            reliability_goal: 0.0,
            hazard_rate_goal: 0.0,
            mtbf_goal: 0.0,
        }
    }
}

/// Allocation outputs for one child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ApportionmentResult {
    pub weight_factor: f64,
    pub percent_weight_factor: f64,
    pub hazard_rate_alloc: f64,
    pub mtbf_alloc: f64,
    pub reliability_alloc: f64,
}

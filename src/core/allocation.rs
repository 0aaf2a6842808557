//! Reliability apportionment
//!
//! Distributes a parent goal across child items with one of four
//! algorithms:
//!
//! ```text
//! Equal  R_i    = R_goal^w                    w = 1 / n children
//! AGREE  MTBF_i = (n_sys * w * t * d) / (n_el * -ln R_goal)
//! ARINC  lam_i  = w * lam_goal                w = observed rate fraction
//! FOO    lam_i  = (score_i / sum scores) * lam_goal
//! ```
//!
//! The engine allocates one child at a time; sibling aggregates (the
//! Equal/AGREE weights, the FOO cumulative score) are supplied by the
//! caller, which walks the hardware tree. ARINC and FOO read the parent
//! goal as a hazard rate, the other methods as a reliability.

use crate::core::diagnostic::Diagnostic;
use crate::entities::{AllocationMethod, AllocationRecord, ApportionmentResult, GoalMeasure};

/// The parent goal value an allocation method expects.
pub fn allocation_goal(method: AllocationMethod, record: &AllocationRecord) -> f64 {
    match method {
        AllocationMethod::Arinc | AllocationMethod::Foo => record.hazard_rate_goal,
        AllocationMethod::Equal | AllocationMethod::Agree => match record.goal_measure {
            GoalMeasure::Reliability => record.reliability_goal,
            GoalMeasure::HazardRate => record.hazard_rate_goal,
            GoalMeasure::Mtbf => record.mtbf_goal,
        },
    }
}

fn zeroed(message: String, record: &AllocationRecord, diagnostics: &mut Vec<Diagnostic>) -> ApportionmentResult {
    diagnostics.push(Diagnostic::error(message, record.hardware_id));
    ApportionmentResult::default()
}

fn equal(
    parent_goal: f64,
    record: &AllocationRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> ApportionmentResult {
    if parent_goal <= 0.0 || parent_goal >= 1.0 {
        return zeroed(
            format!(
                "cannot allocate a reliability goal of {} across equal children",
                parent_goal
            ),
            record,
            diagnostics,
        );
    }
    if record.mission_time <= 0.0 {
        return zeroed(
            format!("mission time {} is not positive", record.mission_time),
            record,
            diagnostics,
        );
    }
    let reliability_alloc = parent_goal.powf(record.weight_factor);
    let hazard_rate_alloc = -reliability_alloc.ln() / record.mission_time;
    ApportionmentResult {
        weight_factor: record.weight_factor,
        percent_weight_factor: record.weight_factor,
        hazard_rate_alloc,
        mtbf_alloc: 1.0 / hazard_rate_alloc,
        reliability_alloc,
    }
}

fn agree(
    parent_goal: f64,
    record: &AllocationRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> ApportionmentResult {
    if parent_goal <= 0.0 || parent_goal >= 1.0 {
        return zeroed(
            format!("cannot AGREE-allocate a reliability goal of {}", parent_goal),
            record,
            diagnostics,
        );
    }
    if record.mission_time <= 0.0 || record.n_sub_elements == 0 {
        return zeroed(
            format!(
                "mission time {} and subsystem element count {} must be positive",
                record.mission_time, record.n_sub_elements
            ),
            record,
            diagnostics,
        );
    }
    let operating_time = record.mission_time * record.duty_cycle / 100.0;
    let mtbf_alloc = (f64::from(record.n_sub_systems) * record.weight_factor * operating_time)
        / (f64::from(record.n_sub_elements) * -parent_goal.ln());
    let hazard_rate_alloc = 1.0 / mtbf_alloc;
    ApportionmentResult {
        weight_factor: record.weight_factor,
        percent_weight_factor: record.weight_factor,
        hazard_rate_alloc,
        mtbf_alloc,
        reliability_alloc: (-hazard_rate_alloc * operating_time).exp(),
    }
}

fn arinc(
    parent_goal: f64,
    record: &AllocationRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> ApportionmentResult {
    if parent_goal <= 0.0 {
        return zeroed(
            format!("ARINC requires a positive hazard rate goal, got {}", parent_goal),
            record,
            diagnostics,
        );
    }
    let hazard_rate_alloc = record.weight_factor * parent_goal;
    if hazard_rate_alloc <= 0.0 {
        return zeroed(
            format!(
                "weight factor {} allocates a non-positive hazard rate",
                record.weight_factor
            ),
            record,
            diagnostics,
        );
    }
    ApportionmentResult {
        weight_factor: record.weight_factor,
        percent_weight_factor: record.weight_factor,
        hazard_rate_alloc,
        mtbf_alloc: 1.0 / hazard_rate_alloc,
        reliability_alloc: (-hazard_rate_alloc * record.mission_time).exp(),
    }
}

fn feasibility_of_objectives(
    parent_goal: f64,
    cumulative_weight: f64,
    record: &AllocationRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> ApportionmentResult {
    if parent_goal <= 0.0 {
        return zeroed(
            format!("FOO requires a positive hazard rate goal, got {}", parent_goal),
            record,
            diagnostics,
        );
    }
    if cumulative_weight <= 0.0 {
        return zeroed(
            format!(
                "FOO requires a positive cumulative weight, got {}",
                cumulative_weight
            ),
            record,
            diagnostics,
        );
    }
    for (name, score) in [
        ("intricacy", record.int_factor),
        ("state of the art", record.soa_factor),
        ("operating time", record.op_time_factor),
        ("environment", record.env_factor),
    ] {
        if !(1..=10).contains(&score) {
            diagnostics.push(Diagnostic::warning(
                format!("the {} factor {} is outside 1..=10", name, score),
                record.hardware_id,
            ));
        }
    }
    let weight_factor = f64::from(
        record.int_factor * record.soa_factor * record.op_time_factor * record.env_factor,
    );
    let percent_weight_factor = weight_factor / cumulative_weight;
    let hazard_rate_alloc = percent_weight_factor * parent_goal;
    ApportionmentResult {
        weight_factor,
        percent_weight_factor,
        hazard_rate_alloc,
        mtbf_alloc: 1.0 / hazard_rate_alloc,
        reliability_alloc: (-hazard_rate_alloc * record.mission_time).exp(),
    }
}

/// Allocate the parent goal onto one child record.
///
/// `cumulative_weight` is the caller-computed sum of FOO weights over all
/// included siblings; the other methods ignore it.
pub fn allocate(
    method: AllocationMethod,
    parent_goal: f64,
    cumulative_weight: f64,
    record: &AllocationRecord,
) -> (ApportionmentResult, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    if !record.included {
        return (ApportionmentResult::default(), diagnostics);
    }
    let result = match method {
        AllocationMethod::Equal => equal(parent_goal, record, &mut diagnostics),
        AllocationMethod::Agree => agree(parent_goal, record, &mut diagnostics),
        AllocationMethod::Arinc => arinc(parent_goal, record, &mut diagnostics),
        AllocationMethod::Foo => {
            feasibility_of_objectives(parent_goal, cumulative_weight, record, &mut diagnostics)
        }
    };
    (result, diagnostics)
}

/// FOO weight of one record, for the caller's cumulative pre-pass.
pub fn foo_weight(record: &AllocationRecord) -> f64 {
    if record.included {
        f64::from(record.int_factor * record.soa_factor * record.op_time_factor * record.env_factor)
    } else {
        0.0
    }
}

//! Reliability goal conversion
//!
//! A goal can be stated as a mission reliability, a hazard rate (failures
//! per hour), or an MTBF (hours); the other two forms follow from the
//! exponential life model:
//!
//! ```text
//! R = exp(-t / MTBF)        MTBF = -t / ln R        lambda = 1 / MTBF
//! ```
//!
//! Out-of-domain inputs (R outside (0, 1), non-positive rate, MTBF, or
//! mission time) zero the derived values and raise an ERROR diagnostic.

use crate::core::diagnostic::{Diagnostic, Severity};
use crate::entities::GoalMeasure;

fn domain_error(message: String, diagnostics: &mut Vec<Diagnostic>) -> (f64, f64) {
    diagnostics.push(Diagnostic::raw(Severity::Error, message));
    (0.0, 0.0)
}

/// Derive (MTBF, hazard rate) from a reliability goal over `mission_time`
/// hours.
pub fn from_reliability_goal(
    mission_time: f64,
    reliability: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> (f64, f64) {
    if mission_time <= 0.0 {
        return domain_error(
            format!("mission time {} is not positive", mission_time),
            diagnostics,
        );
    }
    if reliability <= 0.0 || reliability >= 1.0 {
        return domain_error(
            format!(
                "reliability goal {} is outside the open interval (0, 1)",
                reliability
            ),
            diagnostics,
        );
    }
    let mtbf = -mission_time / reliability.ln();
    (mtbf, 1.0 / mtbf)
}

/// Derive (MTBF, reliability) from a hazard rate goal in failures per
/// hour.
pub fn from_hazard_rate_goal(
    mission_time: f64,
    hazard_rate: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> (f64, f64) {
    if mission_time <= 0.0 {
        return domain_error(
            format!("mission time {} is not positive", mission_time),
            diagnostics,
        );
    }
    if hazard_rate <= 0.0 {
        return domain_error(
            format!("hazard rate goal {} is not positive", hazard_rate),
            diagnostics,
        );
    }
    let mtbf = 1.0 / hazard_rate;
    (mtbf, (-mission_time / mtbf).exp())
}

/// Derive (hazard rate, reliability) from an MTBF goal in hours.
pub fn from_mtbf_goal(
    mission_time: f64,
    mtbf: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> (f64, f64) {
    if mission_time <= 0.0 {
        return domain_error(
            format!("mission time {} is not positive", mission_time),
            diagnostics,
        );
    }
    if mtbf <= 0.0 {
        return domain_error(format!("MTBF goal {} is not positive", mtbf), diagnostics);
    }
    (1.0 / mtbf, (-mission_time / mtbf).exp())
}

/// Complete (reliability, hazard rate, MTBF) triple for a goal stated in
/// any one measure.
pub fn convert_goal(
    measure: GoalMeasure,
    mission_time: f64,
    value: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> (f64, f64, f64) {
    match measure {
        GoalMeasure::Reliability => {
            let (mtbf, hazard_rate) = from_reliability_goal(mission_time, value, diagnostics);
            (value, hazard_rate, mtbf)
        }
        GoalMeasure::HazardRate => {
            let (mtbf, reliability) = from_hazard_rate_goal(mission_time, value, diagnostics);
            (reliability, value, mtbf)
        }
        GoalMeasure::Mtbf => {
            let (hazard_rate, reliability) = from_mtbf_goal(mission_time, value, diagnostics);
            (reliability, hazard_rate, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reliability_goal_conversion() {
        let mut diags = Vec::new();
        let (mtbf, hazard_rate) = from_reliability_goal(100.0, 0.99732259, &mut diags);
        assert!(diags.is_empty());
        assert!((mtbf - 37299.50574704313).abs() < 1.0e-6);
        assert!((hazard_rate - 2.6810006727214444e-05).abs() < 1.0e-15);
    }

    #[test]
    fn hazard_rate_goal_conversion() {
        let mut diags = Vec::new();
        let (mtbf, reliability) = from_hazard_rate_goal(100.0, 0.001, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(mtbf, 1000.0);
        assert!((reliability - 0.9048374180359595).abs() < 1.0e-12);
    }

    #[test]
    fn mtbf_goal_conversion() {
        let mut diags = Vec::new();
        let (hazard_rate, reliability) = from_mtbf_goal(100.0, 1000.0, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(hazard_rate, 0.001);
        assert!((reliability - 0.9048374180359595).abs() < 1.0e-12);
    }

    #[test]
    fn reliability_round_trips_through_mtbf() {
        let mut diags = Vec::new();
        let r = 0.999935;
        let (mtbf, _) = from_reliability_goal(100.0, r, &mut diags);
        let (_, back) = from_mtbf_goal(100.0, mtbf, &mut diags);
        assert!(diags.is_empty());
        assert!((back - r).abs() < 1.0e-9);
    }

    #[test]
    fn domain_violations_zero_and_error() {
        let mut diags = Vec::new();
        assert_eq!(from_reliability_goal(100.0, 1.2, &mut diags), (0.0, 0.0));
        assert_eq!(from_reliability_goal(-1.0, 0.9, &mut diags), (0.0, 0.0));
        assert_eq!(from_hazard_rate_goal(100.0, 0.0, &mut diags), (0.0, 0.0));
        assert_eq!(from_mtbf_goal(100.0, -5.0, &mut diags), (0.0, 0.0));
        assert_eq!(diags.len(), 4);
        assert!(diags.iter().all(Diagnostic::is_error));
    }

    #[test]
    fn convert_goal_fills_the_triple() {
        let mut diags = Vec::new();
        let (r, hr, mtbf) = convert_goal(GoalMeasure::HazardRate, 100.0, 0.001, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(hr, 0.001);
        assert_eq!(mtbf, 1000.0);
        assert!((r - 0.9048374180359595).abs() < 1.0e-12);
    }
}

//! Hazard rate method dispatcher
//!
//! Entry point for a single hardware record: derive electrical stress
//! ratios, run the category calculator selected by
//! `hazard_rate_method_id`, then apply the uniform duty cycle, quantity,
//! and adjustment factor scaling:
//!
//! ```text
//! hr = (hr_category + add_adj) * (duty_cycle / 100) * mult_adj * quantity
//! ```
//!
//! Every failure mode is reported through the returned diagnostics; the
//! record always comes back with numeric outputs.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::{
    capacitor, connection, meter, miscellaneous, relay, resistor, switch,
};
use crate::entities::{Category, PartRecord, PredictionMethod};

/// Divide operating by rated, substituting 1.0 when the rated figure is
/// zero. The substitution is reported so derating reviews notice the
/// missing rating.
fn stress_ratio(
    operating: f64,
    rated: f64,
    quantity: &str,
    part: &PartRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> f64 {
    if rated == 0.0 {
        diagnostics.push(Diagnostic::warning(
            format!(
                "rated {} is 0.0, using a {} ratio of 1.0 when calculating {}",
                quantity, quantity, part.category
            ),
            part.hardware_id,
        ));
        1.0
    } else {
        operating / rated
    }
}

/// Run the full prediction for one record, mutating it in place.
pub fn calculate(part: &mut PartRecord) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    part.current_ratio = stress_ratio(
        part.current_operating,
        part.current_rated,
        "current",
        part,
        &mut diagnostics,
    );
    part.power_ratio = stress_ratio(
        part.power_operating,
        part.power_rated,
        "power",
        part,
        &mut diagnostics,
    );
    part.voltage_ratio = stress_ratio(
        part.voltage_operating(),
        part.voltage_rated,
        "voltage",
        part,
        &mut diagnostics,
    );

    match PredictionMethod::from_id(part.hazard_rate_method_id) {
        Some(PredictionMethod::PartsCount) => match part.category {
            Category::Resistor => resistor::part_count(part, &mut diagnostics),
            Category::Capacitor => capacitor::part_count(part, &mut diagnostics),
            Category::Relay => relay::part_count(part, &mut diagnostics),
            Category::Switch => switch::part_count(part, &mut diagnostics),
            Category::Connection => connection::part_count(part, &mut diagnostics),
            Category::Meter => meter::part_count(part, &mut diagnostics),
            Category::Miscellaneous => miscellaneous::part_count(part, &mut diagnostics),
        },
        Some(PredictionMethod::PartsStress) => match part.category {
            Category::Resistor => resistor::part_stress(part, &mut diagnostics),
            Category::Capacitor => capacitor::part_stress(part, &mut diagnostics),
            Category::Relay => relay::part_stress(part, &mut diagnostics),
            Category::Switch => switch::part_stress(part, &mut diagnostics),
            Category::Connection => connection::part_stress(part, &mut diagnostics),
            Category::Meter => meter::part_stress(part, &mut diagnostics),
            Category::Miscellaneous => miscellaneous::part_stress(part, &mut diagnostics),
        },
        None => {
            diagnostics.push(Diagnostic::error(
                format!(
                    "no hazard rate method with ID {} when calculating {}",
                    part.hazard_rate_method_id, part.category
                ),
                part.hardware_id,
            ));
            part.hazard_rate_active = 0.0;
            return diagnostics;
        }
    }

    // Configuration oddities are advisory; the record is scaled as-given.
    if part.mult_adj_factor <= 0.0 {
        diagnostics.push(Diagnostic::warning(
            "the multiplicative adjustment factor is <= 0.0".to_string(),
            part.hardware_id,
        ));
    }
    if part.duty_cycle <= 0.0 {
        diagnostics.push(Diagnostic::warning(
            "the duty cycle is <= 0.0".to_string(),
            part.hardware_id,
        ));
    }
    if part.quantity < 1 {
        diagnostics.push(Diagnostic::warning(
            "the quantity is < 1".to_string(),
            part.hardware_id,
        ));
    }

    part.hazard_rate_active = (part.hazard_rate_active + part.add_adj_factor)
        * (part.duty_cycle / 100.0)
        * part.mult_adj_factor
        * f64::from(part.quantity);

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostic::has_errors;

    fn toggle_switch() -> PartRecord {
        PartRecord {
            hardware_id: 12,
            category: Category::Switch,
            subcategory_id: 1,
            quality_id: 1,
            environment_active_id: 1,
            hazard_rate_method_id: 1,
            current_rated: 1.0,
            power_rated: 1.0,
            voltage_rated: 1.0,
            ..PartRecord::default()
        }
    }

    #[test]
    fn identity_scaling_preserves_category_output() {
        let mut part = toggle_switch();
        let diags = calculate(&mut part);
        assert!(diags.is_empty());
        assert_eq!(part.hazard_rate_active, 0.001);
    }

    #[test]
    fn scaling_applies_all_factors() {
        let mut part = toggle_switch();
        part.add_adj_factor = 0.009;
        part.duty_cycle = 50.0;
        part.mult_adj_factor = 2.0;
        part.quantity = 3;
        let diags = calculate(&mut part);
        assert!(diags.is_empty());
        assert!((part.hazard_rate_active - 0.03).abs() < 1.0e-12);
    }

    #[test]
    fn zero_rated_values_substitute_unity_ratios() {
        let mut part = toggle_switch();
        part.current_rated = 0.0;
        part.power_rated = 0.0;
        part.voltage_rated = 0.0;
        let diags = calculate(&mut part);
        assert_eq!(diags.len(), 3);
        assert!(!has_errors(&diags));
        assert_eq!(part.current_ratio, 1.0);
        assert_eq!(part.power_ratio, 1.0);
        assert_eq!(part.voltage_ratio, 1.0);
    }

    #[test]
    fn advisory_warnings_do_not_block_scaling() {
        let mut part = toggle_switch();
        part.duty_cycle = 0.0;
        part.mult_adj_factor = 0.0;
        part.quantity = 0;
        let diags = calculate(&mut part);
        assert_eq!(diags.len(), 3);
        assert!(!has_errors(&diags));
        assert_eq!(part.hazard_rate_active, 0.0);
    }

    #[test]
    fn unknown_method_errors() {
        let mut part = toggle_switch();
        part.hazard_rate_method_id = 3;
        let diags = calculate(&mut part);
        assert!(has_errors(&diags));
        assert_eq!(part.hazard_rate_active, 0.0);
    }

    #[test]
    fn stress_method_routes_to_stress_model() {
        let mut part = toggle_switch();
        part.hazard_rate_method_id = 2;
        part.quality_id = 2;
        part.technology_id = 1;
        part.n_cycles = 1.0;
        let diags = calculate(&mut part);
        assert!(diags.is_empty());
        // 0.034 * piL at zero current ratio (exp(0) = 1).
        assert!((part.hazard_rate_active - 0.034).abs() < 1.0e-12);
    }
}

//! Miscellaneous part prediction models (MIL-HDBK-217F sections 18-22)
//!
//! Subcategories: 1 quartz crystal, 2 electronic filter, 3 fuse, 4
//! incandescent lamp.
//!
//! ```text
//! crystal  hr = 0.013 * f^0.23 * piQ * piE     (f in MHz)
//! filter   hr = lambda_b * piQ * piE
//! fuse     hr = lambda_b * piE
//! lamp     hr = 0.074 * Vr^1.29 * piU * piA * piE
//! ```
//!
//! The lamp utilization factor piU is banded on duty cycle: under 10%
//! illuminated 0.10, 10-90% 0.72, above 0.90 full 1.0.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_CRYSTAL: EnvRow = [
    0.032, 0.096, 0.32, 0.19, 0.51, 0.38, 0.54, 0.70, 0.90, 0.74, 0.016, 0.42, 1.0, 16.0,
];
static PART_COUNT_LAMBDA_B_FILTER: EnvRow = [
    0.022, 0.044, 0.13, 0.088, 0.20, 0.15, 0.20, 0.24, 0.29, 0.24, 0.018, 0.15, 0.33, 2.6,
];
static PART_COUNT_LAMBDA_B_FUSE: EnvRow = [
    0.01, 0.02, 0.06, 0.05, 0.11, 0.09, 0.12, 0.15, 0.18, 0.16, 0.009, 0.1, 0.21, 2.3,
];
static PART_COUNT_LAMBDA_B_LAMP: [EnvRow; 2] = [
    [
        3.9, 7.8, 12.0, 12.0, 16.0, 16.0, 16.0, 19.0, 23.0, 19.0, 2.7, 16.0, 23.0, 100.0,
    ],
    [
        13.0, 26.0, 38.0, 38.0, 51.0, 51.0, 51.0, 64.0, 77.0, 64.0, 9.0, 51.0, 77.0, 350.0,
    ],
];

static PI_E_CRYSTAL: EnvRow = [
    1.0, 3.0, 10.0, 6.0, 16.0, 12.0, 17.0, 22.0, 28.0, 23.0, 0.5, 13.0, 32.0, 500.0,
];
static PI_E_FILTER: EnvRow = [
    1.0, 2.0, 6.0, 4.0, 9.0, 7.0, 9.0, 11.0, 13.0, 11.0, 0.8, 7.0, 15.0, 120.0,
];
static PI_E_FUSE: EnvRow = [
    1.0, 2.0, 8.0, 5.0, 11.0, 9.0, 12.0, 15.0, 18.0, 16.0, 0.9, 10.0, 21.0, 230.0,
];
static PI_E_LAMP: EnvRow = [
    1.0, 2.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0, 6.0, 5.0, 0.7, 4.0, 6.0, 27.0,
];

static LAMBDA_B_FILTER: [f64; 4] = [0.022, 0.12, 0.12, 0.27];
static PI_A_LAMP: [f64; 2] = [1.0, 3.3];

fn utilization_factor(duty_cycle: f64) -> f64 {
    if duty_cycle < 10.0 {
        0.10
    } else if duty_cycle < 90.0 {
        0.72
    } else {
        1.0
    }
}

fn part_count_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    let row: &EnvRow = match part.subcategory_id {
        1 => &PART_COUNT_LAMBDA_B_CRYSTAL,
        2 => &PART_COUNT_LAMBDA_B_FILTER,
        3 => &PART_COUNT_LAMBDA_B_FUSE,
        4 => part
            .application_id
            .checked_sub(1)
            .and_then(|i| PART_COUNT_LAMBDA_B_LAMP.get(i as usize))
            .ok_or(TableError::IndexOutOfRange {
                table: "miscellaneous lambda_b application",
                index: part.application_id,
            })?,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "miscellaneous lambda_b subcategory",
                index: part.subcategory_id,
            })
        }
    };
    pick(
        "miscellaneous lambda_b environment",
        row,
        part.environment_active_id,
    )
}

fn part_count_pi_q(part: &PartRecord) -> Result<f64, TableError> {
    match part.subcategory_id {
        1 => pick("miscellaneous piQ", &[1.0, 2.1], part.quality_id),
        2 => pick("miscellaneous piQ", &[1.0, 2.9], part.quality_id),
        // Fuses and lamps carry no quality grade.
        3 | 4 => Ok(1.0),
        _ => Err(TableError::IndexOutOfRange {
            table: "miscellaneous piQ subcategory",
            index: part.subcategory_id,
        }),
    }
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(part_count_lambda_b(part), "Base hazard rate", part, diagnostics);
    let pi_q = resolve_factor(part_count_pi_q(part), "piQ", part, diagnostics);
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.hazard_rate_active = lambda_b * pi_q;
}

pub fn part_stress(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    match part.subcategory_id {
        1 => {
            let lambda_b = 0.013 * part.frequency_operating.powf(0.23);
            let pi_q = resolve_factor(
                pick("miscellaneous piQ", &[1.0, 3.4], part.quality_id),
                "piQ",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("miscellaneous piE", &PI_E_CRYSTAL, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_q = pi_q;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_q * pi_e;
        }
        2 => {
            let lambda_b = resolve_factor(
                pick("miscellaneous lambda_b type", &LAMBDA_B_FILTER, part.type_id),
                "Base hazard rate",
                part,
                diagnostics,
            );
            let pi_q = resolve_factor(
                pick("miscellaneous piQ", &[1.0, 2.9], part.quality_id),
                "piQ",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("miscellaneous piE", &PI_E_FILTER, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_q = pi_q;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_q * pi_e;
        }
        3 => {
            let lambda_b = 0.010;
            let pi_e = resolve_factor(
                pick("miscellaneous piE", &PI_E_FUSE, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_e;
        }
        4 => {
            let lambda_b = 0.074 * part.voltage_rated.powf(1.29);
            let pi_u = utilization_factor(part.duty_cycle);
            let pi_a = resolve_factor(
                pick("miscellaneous piA", &PI_A_LAMP, part.application_id),
                "piA",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("miscellaneous piE", &PI_E_LAMP, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_u = pi_u;
            part.pi_a = pi_a;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_u * pi_a * pi_e;
        }
        _ => {
            diagnostics.push(Diagnostic::error(
                format!(
                    "Base hazard rate is 0.0 when calculating {} (no model for subcategory {})",
                    part.category, part.subcategory_id
                ),
                part.hardware_id,
            ));
            part.lambda_b = 0.0;
            part.hazard_rate_active = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    fn misc(subcategory_id: u32) -> PartRecord {
        PartRecord {
            hardware_id: 10,
            category: Category::Miscellaneous,
            subcategory_id,
            type_id: 1,
            quality_id: 1,
            application_id: 1,
            environment_active_id: 1,
            ..PartRecord::default()
        }
    }

    #[test]
    fn part_count_all_subcategories() {
        for (subcat, expected) in [(1, 0.032), (2, 0.022), (3, 0.01), (4, 3.9)] {
            let mut part = misc(subcat);
            let mut diags = Vec::new();
            part_count(&mut part, &mut diags);
            assert!(diags.is_empty());
            assert_eq!(part.hazard_rate_active, expected);
        }
    }

    #[test]
    fn stress_crystal_scales_with_frequency() {
        let mut part = misc(1);
        part.frequency_operating = 25.0;
        part.quality_id = 2;
        part.environment_active_id = 5;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert!((part.lambda_b - 0.027256466540108452).abs() < 1.0e-9);
        assert_eq!(part.pi_q, 3.4);
        assert_eq!(part.pi_e, 16.0);
        assert!((part.hazard_rate_active - 1.4827517797818998).abs() < 1.0e-6);
    }

    #[test]
    fn stress_filter_chain() {
        let mut part = misc(2);
        part.type_id = 4;
        part.quality_id = 2;
        part.environment_active_id = 2;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert!((part.hazard_rate_active - 0.27 * 2.9 * 2.0).abs() < 1.0e-12);
    }

    #[test]
    fn stress_fuse_has_no_quality_factor() {
        let mut part = misc(3);
        part.environment_active_id = 3;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert!((part.hazard_rate_active - 0.08).abs() < 1.0e-12);
        assert_eq!(part.pi_q, 0.0);
    }

    #[test]
    fn stress_lamp_chain() {
        let mut part = misc(4);
        part.voltage_rated = 12.0;
        part.duty_cycle = 50.0;
        part.application_id = 2;
        part.environment_active_id = 3;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.pi_u, 0.72);
        assert_eq!(part.pi_a, 3.3);
        assert!((part.hazard_rate_active - 13.011974938989638).abs() < 1.0e-9);
    }

    #[test]
    fn utilization_bands() {
        assert_eq!(utilization_factor(5.0), 0.10);
        assert_eq!(utilization_factor(10.0), 0.72);
        assert_eq!(utilization_factor(95.0), 1.0);
    }
}

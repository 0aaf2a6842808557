//! Meter prediction models (MIL-HDBK-217F section 12 and 18)
//!
//! Subcategory 1 covers elapsed time meters (AC, inverter driven,
//! commutator DC), subcategory 2 panel meters.
//!
//! ```text
//! hr = lambda_b * piT * piE             (elapsed time)
//! hr = lambda_b * piA * piF * piQ * piE (panel)
//! ```
//!
//! piT is banded on the ratio of operating to rated temperature.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_1: [EnvRow; 3] = [
    [
        10.0, 20.0, 120.0, 70.0, 180.0, 50.0, 80.0, 160.0, 250.0, 260.0, 5.0, 140.0, 380.0, 0.0,
    ],
    [
        15.0, 30.0, 180.0, 105.0, 270.0, 75.0, 120.0, 240.0, 375.0, 390.0, 7.5, 210.0, 570.0, 0.0,
    ],
    [
        40.0, 80.0, 480.0, 280.0, 720.0, 200.0, 320.0, 640.0, 1000.0, 1040.0, 20.0, 560.0, 1520.0,
        0.0,
    ],
];
static PART_COUNT_LAMBDA_B_2: [EnvRow; 2] = [
    [
        0.09, 0.36, 2.3, 1.1, 3.2, 2.5, 3.8, 5.2, 6.6, 5.4, 0.099, 5.4, 0.0, 0.0,
    ],
    [
        0.15, 0.81, 2.8, 1.8, 5.4, 4.3, 6.4, 8.9, 11.0, 9.2, 0.17, 9.2, 0.0, 0.0,
    ],
];

static STRESS_LAMBDA_B_1: [f64; 3] = [20.0, 30.0, 80.0];
static PI_E_1: EnvRow = [
    1.0, 2.0, 12.0, 7.0, 18.0, 5.0, 8.0, 16.0, 25.0, 26.0, 0.5, 14.0, 38.0, 0.0,
];
static PI_E_2: EnvRow = [
    1.0, 4.0, 25.0, 12.0, 35.0, 28.0, 42.0, 58.0, 73.0, 60.0, 1.1, 60.0, 0.0, 0.0,
];

static PI_A: [f64; 2] = [1.0, 1.7];
static PI_F: [f64; 3] = [1.0, 1.0, 2.8];
static STRESS_PI_Q_2: [f64; 2] = [1.0, 3.4];

/// Temperature stress factor for elapsed time meters, banded on the
/// operating to rated temperature ratio.
fn temperature_stress_factor(
    temperature_active: f64,
    temperature_rated_max: f64,
) -> Result<f64, TableError> {
    if temperature_rated_max <= 0.0 {
        return Err(TableError::ValueOutOfRange {
            table: "meter rated temperature",
            value: temperature_rated_max,
        });
    }
    let ratio = temperature_active / temperature_rated_max;
    Ok(if ratio <= 0.5 {
        0.5
    } else if ratio <= 0.6 {
        0.6
    } else if ratio <= 0.8 {
        0.8
    } else {
        1.0
    })
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    // Elapsed time meter rows are keyed by type, panel rows by application.
    let (rows, row_index): (&[EnvRow], u32) = match part.subcategory_id {
        1 => (&PART_COUNT_LAMBDA_B_1, part.type_id),
        2 => (&PART_COUNT_LAMBDA_B_2, part.application_id),
        _ => (&[], 0),
    };
    let lambda_b = resolve_factor(
        row_index
            .checked_sub(1)
            .and_then(|i| rows.get(i as usize))
            .ok_or(TableError::IndexOutOfRange {
                table: "meter lambda_b row",
                index: row_index,
            })
            .and_then(|row| pick("meter lambda_b environment", row, part.environment_active_id)),
        "Base hazard rate",
        part,
        diagnostics,
    );
    let pi_q = resolve_factor(
        match part.subcategory_id {
            1 => pick("meter piQ", &[1.0, 1.0], part.quality_id),
            2 => pick("meter piQ", &[1.0, 3.4], part.quality_id),
            _ => Err(TableError::IndexOutOfRange {
                table: "meter piQ subcategory",
                index: part.subcategory_id,
            }),
        },
        "piQ",
        part,
        diagnostics,
    );
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.hazard_rate_active = lambda_b * pi_q;
}

pub fn part_stress(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    match part.subcategory_id {
        1 => {
            let lambda_b = resolve_factor(
                pick("meter lambda_b type", &STRESS_LAMBDA_B_1, part.type_id),
                "Base hazard rate",
                part,
                diagnostics,
            );
            let pi_t = resolve_factor(
                temperature_stress_factor(part.temperature_active, part.temperature_rated_max),
                "piT",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("meter piE", &PI_E_1, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_t = pi_t;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_t * pi_e;
        }
        2 => {
            let lambda_b = 0.090;
            let pi_a = resolve_factor(
                pick("meter piA", &PI_A, part.application_id),
                "piA",
                part,
                diagnostics,
            );
            let pi_f = resolve_factor(
                pick("meter piF", &PI_F, part.type_id),
                "piF",
                part,
                diagnostics,
            );
            let pi_q = resolve_factor(
                pick("meter piQ", &STRESS_PI_Q_2, part.quality_id),
                "piQ",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("meter piE", &PI_E_2, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_a = pi_a;
            part.pi_f = pi_f;
            part.pi_q = pi_q;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_a * pi_f * pi_q * pi_e;
        }
        _ => {
            diagnostics.push(Diagnostic::error(
                format!(
                    "Base hazard rate is 0.0 when calculating {} (no meter model for subcategory {})",
                    part.category, part.subcategory_id
                ),
                part.hardware_id,
            ));
            part.lambda_b = 0.0;
            part.hazard_rate_active = 0.0;
        }
    }
}

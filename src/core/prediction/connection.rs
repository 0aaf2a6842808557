//! Connection prediction models (MIL-HDBK-217F sections 15, 16, and 17)
//!
//! Subcategories: 1 circular/rack-and-panel, 2 printed wiring board edge
//! connector, 3 IC socket, 4 plated through hole, 5 non-PTH terminations
//! (reflow, hand solder, weld, crimp, clip, wrap).
//!
//! Mated connectors run hotter than ambient; the insert temperature is
//! raised by a contact self-heating term before the base hazard rate is
//! evaluated:
//!
//! ```text
//! delta_T  = K_gauge * i^1.85
//! lambda_b = f0 * exp(f1 / (T + delta_T + 273) + ((T + delta_T + 273) / f2)^f3)
//! ```
//!
//! Plated through holes use the wave/hand solder split:
//! `hr = lambda_b * (N1 * piC + N2 * (piC + 13)) * piQ * piE`.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_1_1: EnvRow = [
    0.011, 0.14, 0.11, 0.069, 0.20, 0.058, 0.098, 0.23, 0.34, 0.37, 0.0054, 0.16, 0.42, 6.8,
];
static PART_COUNT_LAMBDA_B_1_2: EnvRow = [
    0.012, 0.015, 0.13, 0.075, 0.21, 0.06, 0.1, 0.22, 0.32, 0.38, 0.0061, 0.18, 0.54, 7.3,
];
static PART_COUNT_LAMBDA_B_2: EnvRow = [
    0.0054, 0.021, 0.055, 0.035, 0.10, 0.059, 0.11, 0.085, 0.16, 0.19, 0.0027, 0.078, 0.21, 3.4,
];
static PART_COUNT_LAMBDA_B_3: EnvRow = [
    0.0019, 0.0058, 0.027, 0.012, 0.035, 0.015, 0.023, 0.021, 0.025, 0.048, 0.00097, 0.027, 0.070,
    1.3,
];
static PART_COUNT_LAMBDA_B_4: EnvRow = [
    0.053, 0.11, 0.37, 0.69, 0.27, 0.27, 0.43, 0.85, 1.5, 1.0, 0.027, 0.53, 1.4, 27.0,
];
static PART_COUNT_LAMBDA_B_5: [EnvRow; 7] = [
    [
        0.00012, 0.00024, 0.00084, 0.00048, 0.0013, 0.00048, 0.00072, 0.00072, 0.00096, 0.0019,
        0.00005, 0.0011, 0.0029, 0.050,
    ],
    [
        0.00026, 0.00052, 0.0018, 0.0010, 0.0029, 0.0010, 0.0016, 0.0016, 0.0021, 0.0042, 0.00013,
        0.0023, 0.0062, 0.11,
    ],
    [
        0.0026, 0.0052, 0.018, 0.010, 0.029, 0.010, 0.016, 0.016, 0.021, 0.042, 0.0013, 0.023,
        0.062, 1.1,
    ],
    [
        0.000069, 0.000138, 0.000483, 0.000276, 0.000759, 0.000276, 0.000414, 0.000414, 0.000552,
        0.001104, 0.000035, 0.000621, 0.001656, 0.02898,
    ],
    [
        0.000050, 0.000100, 0.000350, 0.000200, 0.000550, 0.000200, 0.000300, 0.000300, 0.000400,
        0.000800, 0.000025, 0.000450, 0.001200, 0.021000,
    ],
    [
        0.00014, 0.00028, 0.00096, 0.00056, 0.0015, 0.00056, 0.00084, 0.00084, 0.0011, 0.0022,
        0.00007, 0.0013, 0.0034, 0.059,
    ],
    [
        0.000026, 0.000052, 0.000182, 0.000104, 0.000286, 0.000104, 0.000156, 0.000156, 0.000208,
        0.000416, 0.000013, 0.000234, 0.000624, 0.01092,
    ],
];

static PART_COUNT_PI_Q: [f64; 2] = [1.0, 2.0];

static PI_E_MATED_MIL: EnvRow = [
    1.0, 1.0, 8.0, 5.0, 13.0, 3.0, 5.0, 8.0, 12.0, 19.0, 0.5, 10.0, 27.0, 490.0,
];
static PI_E_MATED_COMMERCIAL: EnvRow = [
    2.0, 5.0, 21.0, 10.0, 27.0, 12.0, 18.0, 17.0, 25.0, 37.0, 0.8, 20.0, 54.0, 970.0,
];
static PI_E_PTH: EnvRow = [
    1.0, 2.0, 7.0, 5.0, 13.0, 5.0, 8.0, 16.0, 28.0, 19.0, 0.5, 10.0, 27.0, 500.0,
];
static PI_E_NON_PTH: EnvRow = [
    1.0, 2.0, 7.0, 4.0, 11.0, 4.0, 6.0, 6.0, 8.0, 16.0, 0.5, 9.0, 24.0, 420.0,
];

static LAMBDA_B_NON_PTH: [f64; 7] = [
    0.00012, 0.00026, 0.0026, 0.000069, 0.00005, 0.00014, 0.000026,
];
static PI_Q_HAND_SOLDER: [f64; 4] = [1.0, 1.0, 2.0, 20.0];
static PI_Q_PTH: [f64; 2] = [1.0, 2.0];

/// Contact self-heating above ambient for a mated pair carrying
/// `current` amps through the given wire gauge.
pub fn temperature_rise(contact_gauge: u32, current: f64) -> Result<f64, TableError> {
    let k = match contact_gauge {
        12 => 0.100,
        16 => 0.274,
        20 => 0.640,
        22 => 0.989,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "connection contact gauge",
                index: contact_gauge,
            })
        }
    };
    Ok(k * current.powf(1.85))
}

/// Base hazard rate for mated connectors, keyed by insert material class.
fn mated_lambda_b(insert_id: u32, contact_temperature: f64) -> Result<f64, TableError> {
    let (f0, f1, f2, f3) = match insert_id {
        1..=3 => (0.020, -1592.0, 473.0, 5.36),
        4..=9 => (0.431, -2073.6, 423.0, 4.66),
        10..=12 => (0.190, -1298.0, 373.0, 4.25),
        13..=15 => (0.770, -1528.8, 358.0, 4.72),
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "connection insert material",
                index: insert_id,
            })
        }
    };
    let t0 = contact_temperature + 273.0;
    Ok(f0 * (f1 / t0 + (t0 / f2).powf(f3)).exp())
}

/// Mating/unmating factor, banded on cycles per thousand hours.
fn mating_factor(n_cycles: f64) -> f64 {
    if n_cycles <= 0.05 {
        1.0
    } else if n_cycles <= 0.5 {
        1.5
    } else if n_cycles <= 5.0 {
        2.0
    } else if n_cycles <= 50.0 {
        3.0
    } else {
        4.0
    }
}

/// Active pins factor. Single-pin devices have no defined factor; the
/// caller surfaces the 0.0 as a warning.
fn active_pins_factor(n_active_pins: u32) -> f64 {
    if n_active_pins < 2 {
        return 0.0;
    }
    ((f64::from(n_active_pins) - 1.0) / 10.0)
        .powf(0.51064)
        .exp()
}

/// Circuit planes factor for plated through holes.
fn complexity_factor(n_circuit_planes: u32) -> f64 {
    if n_circuit_planes > 2 {
        0.65 * f64::from(n_circuit_planes).powf(0.63)
    } else {
        1.0
    }
}

fn part_count_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    let row: &EnvRow = match (part.subcategory_id, part.type_id) {
        (1, 2) => &PART_COUNT_LAMBDA_B_1_2,
        (1, _) => &PART_COUNT_LAMBDA_B_1_1,
        (2, _) => &PART_COUNT_LAMBDA_B_2,
        (3, _) => &PART_COUNT_LAMBDA_B_3,
        (4, _) => &PART_COUNT_LAMBDA_B_4,
        (5, t) => part
            .type_id
            .checked_sub(1)
            .and_then(|i| PART_COUNT_LAMBDA_B_5.get(i as usize))
            .ok_or(TableError::IndexOutOfRange {
                table: "connection lambda_b type",
                index: t,
            })?,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "connection lambda_b subcategory",
                index: part.subcategory_id,
            })
        }
    };
    pick(
        "connection lambda_b environment",
        row,
        part.environment_active_id,
    )
}

fn mated_pi_e(part: &PartRecord) -> Result<f64, TableError> {
    let row = if part.quality_id == 1 {
        &PI_E_MATED_MIL
    } else {
        &PI_E_MATED_COMMERCIAL
    };
    pick("connection piE", row, part.environment_active_id)
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(part_count_lambda_b(part), "Base hazard rate", part, diagnostics);
    let pi_q = resolve_factor(
        pick("connection piQ", &PART_COUNT_PI_Q, part.quality_id),
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
        1 | 2 => {
            let delta_t = resolve_factor(
                temperature_rise(part.contact_gauge, part.current_operating),
                "Temperature rise",
                part,
                diagnostics,
            );
            part.temperature_rise = delta_t;
            let lambda_b = resolve_factor(
                mated_lambda_b(part.insert_id, part.temperature_active + delta_t),
                "Base hazard rate",
                part,
                diagnostics,
            );
            let pi_k = mating_factor(part.n_cycles);
            let pi_p = active_pins_factor(part.n_active_pins);
            if pi_p <= 0.0 {
                diagnostics.push(Diagnostic::warning(
                    format!("piP is 0.0 when calculating {}", part.category),
                    part.hardware_id,
                ));
            }
            let pi_e = resolve_factor(mated_pi_e(part), "piE", part, diagnostics);
            part.lambda_b = lambda_b;
            part.pi_k = pi_k;
            part.pi_p = pi_p;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_k * pi_p * pi_e;
        }
        3 => {
            let lambda_b = 0.00042;
            let pi_p = active_pins_factor(part.n_active_pins);
            if pi_p <= 0.0 {
                diagnostics.push(Diagnostic::warning(
                    format!("piP is 0.0 when calculating {}", part.category),
                    part.hardware_id,
                ));
            }
            let pi_e = resolve_factor(mated_pi_e(part), "piE", part, diagnostics);
            part.lambda_b = lambda_b;
            part.pi_p = pi_p;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_p * pi_e;
        }
        4 => {
            let lambda_b = resolve_factor(
                pick(
                    "connection lambda_b technology",
                    &[0.00041, 0.00026],
                    part.technology_id,
                ),
                "Base hazard rate",
                part,
                diagnostics,
            );
            let pi_c = complexity_factor(part.n_circuit_planes);
            let pi_q = resolve_factor(
                pick("connection piQ", &PI_Q_PTH, part.quality_id),
                "piQ",
                part,
                diagnostics,
            );
            let pi_e = resolve_factor(
                pick("connection piE", &PI_E_PTH, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            let n1 = f64::from(part.n_wave_soldered);
            let n2 = f64::from(part.n_hand_soldered);
            part.lambda_b = lambda_b;
            part.pi_c = pi_c;
            part.pi_q = pi_q;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * (n1 * pi_c + n2 * (pi_c + 13.0)) * pi_q * pi_e;
        }
        5 => {
            let lambda_b = resolve_factor(
                pick(
                    "connection lambda_b type",
                    &LAMBDA_B_NON_PTH,
                    part.type_id,
                ),
                "Base hazard rate",
                part,
                diagnostics,
            );
            // Only hand-soldered terminations carry a quality grade.
            let pi_q = if part.type_id == 2 {
                resolve_factor(
                    pick("connection piQ", &PI_Q_HAND_SOLDER, part.quality_id),
                    "piQ",
                    part,
                    diagnostics,
                )
            } else {
                1.0
            };
            let pi_e = resolve_factor(
                pick("connection piE", &PI_E_NON_PTH, part.environment_active_id),
                "piE",
                part,
                diagnostics,
            );
            part.lambda_b = lambda_b;
            part.pi_q = pi_q;
            part.pi_e = pi_e;
            part.hazard_rate_active = lambda_b * pi_q * pi_e;
        }
        _ => {
            diagnostics.push(Diagnostic::error(
                format!(
                    "Base hazard rate is 0.0 when calculating {} (no connection model for subcategory {})",
                    part.category, part.subcategory_id
                ),
                part.hardware_id,
            ));
            part.lambda_b = 0.0;
            part.hazard_rate_active = 0.0;
        }
    }
}

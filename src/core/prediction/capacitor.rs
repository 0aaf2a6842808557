//! Capacitor prediction models (MIL-HDBK-217F section 10)
//!
//! Nineteen subcategories running from paper and plastic film styles
//! through ceramic, electrolytic, and variable types. Part stress base
//! hazard rate:
//!
//! ```text
//! lambda_b = f0 * ((S / f1)^f2 + 1) * exp(f3 * ((T + 273) / T_ref)^f4)
//! ```
//!
//! with S the operating-to-rated voltage ratio and T_ref keyed by the
//! rated maximum temperature. The capacitance factor is
//! `piCV = cv0 * C^cv1` with C in farads.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, pick_by_breaks, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_1_1: EnvRow = [
    0.0036, 0.0072, 0.330, 0.016, 0.055, 0.023, 0.030, 0.07, 0.13, 0.083, 0.0018, 0.044, 0.12, 2.1,
];
static PART_COUNT_LAMBDA_B_1_2: EnvRow = [
    0.0039, 0.0087, 0.042, 0.022, 0.070, 0.035, 0.047, 0.19, 0.35, 0.130, 0.0020, 0.056, 0.19, 2.5,
];
static PART_COUNT_LAMBDA_B_2: EnvRow = [
    0.0047, 0.0096, 0.044, 0.034, 0.073, 0.030, 0.040, 0.094, 0.15, 0.11, 0.0024, 0.058, 0.18, 2.7,
];
static PART_COUNT_LAMBDA_B_3: EnvRow = [
    0.0021, 0.0042, 0.017, 0.010, 0.030, 0.0068, 0.013, 0.026, 0.048, 0.044, 0.0010, 0.023, 0.063,
    1.1,
];
static PART_COUNT_LAMBDA_B_4: EnvRow = [
    0.0029, 0.0058, 0.023, 0.014, 0.041, 0.012, 0.018, 0.037, 0.066, 0.060, 0.0014, 0.032, 0.088,
    1.5,
];
static PART_COUNT_LAMBDA_B_5: EnvRow = [
    0.0041, 0.0083, 0.042, 0.021, 0.067, 0.026, 0.048, 0.086, 0.14, 0.10, 0.0020, 0.054, 0.15, 2.5,
];
static PART_COUNT_LAMBDA_B_6: EnvRow = [
    0.0023, 0.0092, 0.019, 0.012, 0.033, 0.0096, 0.014, 0.034, 0.053, 0.048, 0.0011, 0.026, 0.07,
    1.2,
];
static PART_COUNT_LAMBDA_B_7: EnvRow = [
    0.0005, 0.0015, 0.0091, 0.0044, 0.014, 0.0068, 0.0095, 0.054, 0.069, 0.031, 0.00025, 0.012,
    0.046, 0.45,
];
static PART_COUNT_LAMBDA_B_8: EnvRow = [
    0.018, 0.037, 0.19, 0.094, 0.31, 0.10, 0.14, 0.47, 0.60, 0.48, 0.0091, 0.25, 0.68, 11.0,
];
static PART_COUNT_LAMBDA_B_9: EnvRow = [
    0.00032, 0.00096, 0.0059, 0.0029, 0.0094, 0.0044, 0.0062, 0.035, 0.045, 0.020, 0.00016,
    0.0076, 0.030, 0.29,
];
static PART_COUNT_LAMBDA_B_10: EnvRow = [
    0.0036, 0.0074, 0.034, 0.019, 0.056, 0.015, 0.015, 0.032, 0.048, 0.077, 0.0014, 0.049, 0.13,
    2.3,
];
static PART_COUNT_LAMBDA_B_11: EnvRow = [
    0.00078, 0.0022, 0.013, 0.0056, 0.023, 0.0077, 0.015, 0.053, 0.12, 0.048, 0.00039, 0.017,
    0.065, 0.68,
];
static PART_COUNT_LAMBDA_B_12: EnvRow = [
    0.0018, 0.0039, 0.016, 0.0097, 0.028, 0.0091, 0.011, 0.034, 0.057, 0.055, 0.00072, 0.022,
    0.066, 1.0,
];
static PART_COUNT_LAMBDA_B_13: EnvRow = [
    0.0061, 0.013, 0.069, 0.039, 0.11, 0.031, 0.061, 0.13, 0.29, 0.18, 0.0030, 0.069, 0.26, 4.0,
];
static PART_COUNT_LAMBDA_B_14: EnvRow = [
    0.024, 0.061, 0.42, 0.18, 0.59, 0.46, 0.55, 2.1, 2.6, 1.2, 0.012, 0.49, 1.7, 21.0,
];
static PART_COUNT_LAMBDA_B_15: EnvRow = [
    0.029, 0.081, 0.58, 0.24, 0.83, 0.73, 0.88, 4.3, 5.4, 2.0, 0.015, 0.68, 2.8, 28.0,
];
static PART_COUNT_LAMBDA_B_16: EnvRow = [
    0.08, 0.27, 1.2, 0.71, 2.3, 0.69, 1.1, 6.2, 12.0, 4.1, 0.032, 1.9, 5.9, 85.0,
];
static PART_COUNT_LAMBDA_B_17: EnvRow = [
    0.033, 0.13, 0.62, 0.31, 0.93, 0.21, 0.28, 2.2, 3.3, 2.2, 0.16, 0.93, 3.2, 37.0,
];
static PART_COUNT_LAMBDA_B_18: EnvRow = [
    0.80, 0.33, 1.6, 0.87, 3.0, 1.0, 1.7, 9.9, 19.0, 8.1, 0.032, 2.5, 8.9, 100.0,
];
static PART_COUNT_LAMBDA_B_19: EnvRow = [
    0.4, 1.3, 6.8, 3.6, 13.0, 5.7, 10.0, 58.0, 90.0, 23.0, 20.0, 0.0, 0.0, 0.0,
];

static PART_COUNT_PI_Q: [f64; 7] = [0.030, 0.10, 0.30, 1.0, 3.0, 3.0, 10.0];

static PI_SR_BREAKS: [f64; 5] = [0.1, 0.2, 0.4, 0.6, 0.8];
static PI_SR: [f64; 6] = [0.33, 0.27, 0.2, 0.13, 0.1, 0.066];
static PI_C: [f64; 5] = [0.3, 1.0, 2.0, 2.5, 3.0];
static PI_CF: [f64; 2] = [0.1, 1.0];

/// [f0, f1, f2, f3, f4, cv0, cv1] per subcategory.
fn stress_factors(subcategory_id: u32) -> Option<&'static [f64; 7]> {
    match subcategory_id {
        1 => Some(&[0.00086, 0.4, 5.0, 2.5, 1.8, 1.2, 0.095]),
        2 => Some(&[0.00115, 0.4, 5.0, 2.5, 1.8, 1.4, 0.12]),
        3 => Some(&[0.0005, 0.4, 5.0, 2.5, 1.8, 1.6, 0.13]),
        4 => Some(&[0.00069, 0.4, 5.0, 2.5, 1.8, 1.2, 0.092]),
        5 => Some(&[0.00099, 0.4, 5.0, 2.5, 1.8, 1.1, 0.085]),
        6 => Some(&[0.00055, 0.4, 5.0, 2.5, 1.8, 1.2, 0.092]),
        7 => Some(&[8.6e-10, 0.4, 3.0, 16.0, 1.0, 0.45, 0.14]),
        8 => Some(&[0.0053, 0.4, 3.0, 1.2, 6.3, 0.31, 0.23]),
        9 => Some(&[8.25e-10, 0.5, 4.0, 16.0, 1.0, 0.62, 0.14]),
        10 => Some(&[0.0003, 0.3, 3.0, 1.0, 1.0, 0.41, 0.11]),
        11 => Some(&[2.6e-9, 0.3, 3.0, 14.3, 1.0, 0.59, 0.12]),
        12 => Some(&[0.00375, 0.4, 3.0, 2.6, 9.0, 1.0, 0.12]),
        13 => Some(&[0.00165, 0.4, 3.0, 2.6, 9.0, 0.82, 0.066]),
        14 => Some(&[0.00254, 0.5, 3.0, 5.09, 5.0, 0.34, 0.18]),
        15 => Some(&[0.0028, 0.55, 3.0, 4.09, 5.9, 0.321, 0.19]),
        16 => Some(&[0.00224, 0.17, 3.0, 1.59, 10.1, 1.0, 0.0]),
        17 => Some(&[7.3e-7, 0.33, 3.0, 12.1, 1.0, 1.0, 0.0]),
        18 => Some(&[1.92e-6, 0.33, 3.0, 10.8, 1.0, 1.0, 0.0]),
        19 => Some(&[0.0112, 0.17, 3.0, 1.59, 10.1, 1.0, 0.0]),
        _ => None,
    }
}

/// Reference temperature in kelvin, keyed by the rated maximum
/// temperature in degrees C.
fn ref_temp(temperature_rated_max: f64) -> Result<f64, TableError> {
    match temperature_rated_max as i64 {
        65 => Ok(338.0),
        70 => Ok(343.0),
        85 => Ok(358.0),
        105 => Ok(378.0),
        125 => Ok(398.0),
        150 => Ok(423.0),
        170 => Ok(443.0),
        175 => Ok(448.0),
        200 => Ok(473.0),
        _ => Err(TableError::ValueOutOfRange {
            table: "capacitor reference temperature",
            value: temperature_rated_max,
        }),
    }
}

fn part_count_row(part: &PartRecord) -> Result<&'static EnvRow, TableError> {
    match (part.subcategory_id, part.specification_id) {
        (1, 1) => Ok(&PART_COUNT_LAMBDA_B_1_1),
        (1, 2) => Ok(&PART_COUNT_LAMBDA_B_1_2),
        (1, _) => Err(TableError::IndexOutOfRange {
            table: "capacitor lambda_b specification",
            index: part.specification_id,
        }),
        (2, _) => Ok(&PART_COUNT_LAMBDA_B_2),
        (3, _) => Ok(&PART_COUNT_LAMBDA_B_3),
        (4, _) => Ok(&PART_COUNT_LAMBDA_B_4),
        (5, _) => Ok(&PART_COUNT_LAMBDA_B_5),
        (6, _) => Ok(&PART_COUNT_LAMBDA_B_6),
        (7, _) => Ok(&PART_COUNT_LAMBDA_B_7),
        (8, _) => Ok(&PART_COUNT_LAMBDA_B_8),
        (9, _) => Ok(&PART_COUNT_LAMBDA_B_9),
        (10, _) => Ok(&PART_COUNT_LAMBDA_B_10),
        (11, _) => Ok(&PART_COUNT_LAMBDA_B_11),
        (12, _) => Ok(&PART_COUNT_LAMBDA_B_12),
        (13, _) => Ok(&PART_COUNT_LAMBDA_B_13),
        (14, _) => Ok(&PART_COUNT_LAMBDA_B_14),
        (15, _) => Ok(&PART_COUNT_LAMBDA_B_15),
        (16, _) => Ok(&PART_COUNT_LAMBDA_B_16),
        (17, _) => Ok(&PART_COUNT_LAMBDA_B_17),
        (18, _) => Ok(&PART_COUNT_LAMBDA_B_18),
        (19, _) => Ok(&PART_COUNT_LAMBDA_B_19),
        _ => Err(TableError::IndexOutOfRange {
            table: "capacitor lambda_b subcategory",
            index: part.subcategory_id,
        }),
    }
}

fn stress_pi_q(subcategory_id: u32, quality_id: u32) -> Result<f64, TableError> {
    let row: &[f64] = match subcategory_id {
        1 => &[3.0, 7.0],
        2 => &[1.0, 3.0, 10.0],
        3 => &[0.03, 0.1, 0.3, 1.0, 3.0, 10.0, 30.0],
        4 => &[0.03, 0.1, 0.3, 1.0, 3.0, 7.0, 20.0],
        5 => &[0.03, 0.1, 0.3, 1.0, 10.0],
        6 => &[0.02, 0.1, 0.3, 1.0, 10.0],
        7 => &[0.01, 0.03, 0.1, 0.3, 1.0, 1.5, 3.0, 6.0, 15.0],
        8 => &[5.0, 15.0],
        9 | 10 => &[0.03, 0.1, 0.3, 1.0, 3.0, 3.0, 10.0],
        11 => &[0.03, 0.1, 0.3, 1.0, 3.0, 10.0],
        12 => &[0.001, 0.01, 0.03, 0.03, 0.1, 0.3, 1.0, 1.5, 10.0],
        13 => &[0.03, 0.1, 0.3, 1.0, 1.5, 3.0, 10.0],
        14 => &[0.03, 0.1, 0.3, 1.0, 3.0, 10.0],
        15 => &[3.0, 10.0],
        16 => &[4.0, 20.0],
        17 => &[3.0, 10.0],
        18 => &[5.0, 20.0],
        19 => &[3.0, 20.0],
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "capacitor piQ subcategory",
                index: subcategory_id,
            })
        }
    };
    pick("capacitor piQ", row, quality_id)
}

fn stress_pi_e(subcategory_id: u32, environment_active_id: u32) -> Result<f64, TableError> {
    let row: &EnvRow = match subcategory_id {
        1 => &[1.0, 2.0, 9.0, 5.0, 15.0, 6.0, 8.0, 17.0, 32.0, 22.0, 0.5, 12.0, 32.0, 570.0],
        2 => &[1.0, 2.0, 9.0, 7.0, 15.0, 6.0, 8.0, 17.0, 28.0, 22.0, 0.5, 12.0, 32.0, 570.0],
        3 | 4 => &[1.0, 2.0, 8.0, 5.0, 14.0, 4.0, 6.0, 11.0, 20.0, 20.0, 0.5, 11.0, 29.0, 530.0],
        5 => &[1.0, 2.0, 10.0, 5.0, 16.0, 6.0, 11.0, 18.0, 30.0, 23.0, 0.5, 13.0, 34.0, 610.0],
        6 => &[1.0, 4.0, 8.0, 5.0, 14.0, 4.0, 6.0, 13.0, 20.0, 20.0, 0.5, 11.0, 29.0, 530.0],
        7 => &[1.0, 2.0, 10.0, 6.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
        8 => &[1.0, 2.0, 10.0, 5.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
        9 => &[1.0, 2.0, 10.0, 6.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
        10 => &[1.0, 2.0, 9.0, 5.0, 15.0, 4.0, 4.0, 8.0, 12.0, 20.0, 0.4, 13.0, 34.0, 610.0],
        11 => &[1.0, 2.0, 10.0, 5.0, 17.0, 4.0, 8.0, 16.0, 35.0, 24.0, 0.5, 13.0, 34.0, 610.0],
        12 => &[1.0, 2.0, 8.0, 5.0, 14.0, 4.0, 5.0, 12.0, 20.0, 24.0, 0.4, 11.0, 29.0, 530.0],
        13 => &[1.0, 2.0, 10.0, 6.0, 16.0, 4.0, 8.0, 14.0, 30.0, 23.0, 0.5, 13.0, 34.0, 610.0],
        14 => &[1.0, 2.0, 12.0, 6.0, 17.0, 10.0, 12.0, 28.0, 35.0, 27.0, 0.5, 14.0, 38.0, 690.0],
        15 => &[1.0, 2.0, 12.0, 6.0, 17.0, 10.0, 12.0, 28.0, 35.0, 27.0, 0.5, 18.0, 38.0, 690.0],
        16 => &[1.0, 3.0, 13.0, 8.0, 24.0, 6.0, 10.0, 37.0, 70.0, 36.0, 0.4, 20.0, 52.0, 950.0],
        17 => &[1.0, 3.0, 12.0, 7.0, 18.0, 3.0, 4.0, 20.0, 30.0, 32.0, 0.5, 18.0, 46.0, 830.0],
        18 => &[1.0, 3.0, 13.0, 8.0, 24.0, 6.0, 10.0, 37.0, 70.0, 36.0, 0.5, 20.0, 52.0, 950.0],
        19 => &[1.0, 3.0, 14.0, 8.0, 27.0, 10.0, 18.0, 70.0, 108.0, 40.0, 0.5, 0.0, 0.0, 0.0],
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "capacitor piE subcategory",
                index: subcategory_id,
            })
        }
    };
    pick("capacitor piE", row, environment_active_id)
}

fn stress_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    let f = stress_factors(part.subcategory_id).ok_or(TableError::IndexOutOfRange {
        table: "capacitor lambda_b subcategory",
        index: part.subcategory_id,
    })?;
    let t_ref = ref_temp(part.temperature_rated_max)?;
    let t_k = part.temperature_active + 273.0;
    Ok(f[0]
        * ((part.voltage_ratio / f[1]).powf(f[2]) + 1.0)
        * (f[3] * (t_k / t_ref).powf(f[4])).exp())
}

/// Series resistance factor for solid tantalum (subcategory 12), banded
/// on circuit resistance per volt of applied voltage.
fn series_resistance_factor(part: &PartRecord) -> Result<f64, TableError> {
    let voltage = part.voltage_operating();
    if voltage <= 0.0 {
        return Err(TableError::ValueOutOfRange {
            table: "capacitor piSR",
            value: voltage,
        });
    }
    pick_by_breaks("capacitor piSR", &PI_SR_BREAKS, &PI_SR, part.resistance / voltage)
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(
        part_count_row(part).and_then(|row| {
            pick("capacitor lambda_b environment", row, part.environment_active_id)
        }),
        "Base hazard rate",
        part,
        diagnostics,
    );
    let pi_q = resolve_factor(
        pick("capacitor piQ", &PART_COUNT_PI_Q, part.quality_id),
        "piQ",
        part,
        diagnostics,
    );
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.hazard_rate_active = lambda_b * pi_q;
}

pub fn part_stress(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(stress_lambda_b(part), "Base hazard rate", part, diagnostics);
    let pi_q = resolve_factor(
        stress_pi_q(part.subcategory_id, part.quality_id),
        "piQ",
        part,
        diagnostics,
    );
    let pi_e = resolve_factor(
        stress_pi_e(part.subcategory_id, part.environment_active_id),
        "piE",
        part,
        diagnostics,
    );
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.pi_e = pi_e;

    let mut hazard_rate = lambda_b * pi_q * pi_e;
    match part.subcategory_id {
        12 => {
            let pi_sr = resolve_factor(series_resistance_factor(part), "piSR", part, diagnostics);
            let pi_cv = capacitance_factor(part);
            part.pi_sr = pi_sr;
            part.pi_cv = pi_cv;
            hazard_rate *= pi_cv * pi_sr;
        }
        13 => {
            let pi_c = resolve_factor(
                pick("capacitor piC", &PI_C, part.construction_id),
                "piC",
                part,
                diagnostics,
            );
            let pi_cv = capacitance_factor(part);
            part.pi_c = pi_c;
            part.pi_cv = pi_cv;
            hazard_rate *= pi_cv * pi_c;
        }
        16..=18 => {}
        19 => {
            let pi_cf = resolve_factor(
                pick("capacitor piCF", &PI_CF, part.configuration_id),
                "piCF",
                part,
                diagnostics,
            );
            part.pi_cf = pi_cf;
            hazard_rate *= pi_cf;
        }
        _ => {
            let pi_cv = capacitance_factor(part);
            part.pi_cv = pi_cv;
            hazard_rate *= pi_cv;
        }
    }
    part.hazard_rate_active = hazard_rate;
}

fn capacitance_factor(part: &PartRecord) -> f64 {
    match stress_factors(part.subcategory_id) {
        Some(f) => f[5] * part.capacitance.powf(f[6]),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    fn capacitor(subcategory_id: u32) -> PartRecord {
        PartRecord {
            hardware_id: 4,
            category: Category::Capacitor,
            subcategory_id,
            quality_id: 1,
            environment_active_id: 1,
            temperature_rated_max: 85.0,
            ..PartRecord::default()
        }
    }

    #[test]
    fn part_count_paper_by_specification() {
        let mut part = capacitor(1);
        part.specification_id = 2;
        part.quality_id = 4;
        part.environment_active_id = 2;
        let mut diags = Vec::new();
        part_count(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.lambda_b, 0.0087);
        assert_eq!(part.hazard_rate_active, 0.0087);
    }

    #[test]
    fn part_count_gas_filled_vacuum_column_gaps_warn() {
        let mut part = capacitor(19);
        part.quality_id = 1;
        part.environment_active_id = 12;
        let mut diags = Vec::new();
        part_count(&mut part, &mut diags);
        assert_eq!(part.lambda_b, 0.0);
        assert!(diags.iter().any(|d| !d.is_error()));
    }

    #[test]
    fn stress_paper_matches_closed_form() {
        let mut part = capacitor(1);
        part.temperature_active = 45.0;
        part.voltage_ratio = 0.4;
        part.capacitance = 1.0e-7;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert!((part.lambda_b - 0.01296398970132421).abs() < 1.0e-12);
        assert!((part.pi_cv - 0.2595262228472424).abs() < 1.0e-12);
        assert_eq!(part.pi_q, 3.0);
        assert_eq!(part.pi_e, 1.0);
        assert!((part.hazard_rate_active - 0.010093485840645667).abs() < 1.0e-12);
    }

    #[test]
    fn stress_unknown_rated_temperature_is_a_miss() {
        let mut part = capacitor(1);
        part.temperature_rated_max = 90.0;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert_eq!(part.lambda_b, 0.0);
        assert!(diags.iter().any(|d| d.is_error()));
    }

    #[test]
    fn stress_solid_tantalum_uses_series_resistance() {
        let mut part = capacitor(12);
        part.temperature_active = 30.0;
        part.voltage_ratio = 0.3;
        part.voltage_dc_operating = 10.0;
        part.resistance = 5.0;
        part.capacitance = 1.0e-6;
        part.quality_id = 7;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        // CR = 5 / 10 = 0.5 falls in the 0.4 - 0.6 band.
        assert_eq!(part.pi_sr, 0.13);
        assert_eq!(part.pi_q, 1.0);
    }

    #[test]
    fn stress_variable_piston_skips_capacitance_factor() {
        let mut part = capacitor(17);
        part.temperature_active = 40.0;
        part.voltage_ratio = 0.5;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.pi_cv, 0.0);
        let expected = part.lambda_b * part.pi_q * part.pi_e;
        assert!((part.hazard_rate_active - expected).abs() < 1.0e-15);
    }
}

//! Resistor prediction models (MIL-HDBK-217F section 9)
//!
//! Covers fixed styles (composition, film, film power, film network,
//! wirewound, wirewound power, chassis mount, thermistor; subcategories
//! 1-8) and variable styles (wirewound, precision, semiprecision, power,
//! non-wirewound, composition, film; subcategories 9-15).
//!
//! Part stress base hazard rate:
//!
//! ```text
//! lambda_b = f0 * exp(f1 * (T + 273) / T_ref)^f2
//!              * exp(((P_ratio / f3) * ((T + 273) / 273)^f4)^f5)
//! ```
//!
//! except subcategory 4 (fixed 0.00006 per network element) and
//! subcategory 8 (type-selected constant).

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, pick_by_breaks, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_1: EnvRow = [
    0.0005, 0.0022, 0.0071, 0.0037, 0.012, 0.0052, 0.0065, 0.016, 0.025, 0.025, 0.00025, 0.0098,
    0.035, 0.36,
];
static PART_COUNT_LAMBDA_B_2_LO: EnvRow = [
    0.0012, 0.0027, 0.011, 0.0054, 0.020, 0.0063, 0.013, 0.018, 0.033, 0.030, 0.00025, 0.014,
    0.044, 0.69,
];
static PART_COUNT_LAMBDA_B_2_HI: EnvRow = [
    0.0014, 0.0031, 0.013, 0.0061, 0.023, 0.0072, 0.014, 0.021, 0.038, 0.034, 0.00028, 0.016,
    0.050, 0.78,
];
static PART_COUNT_LAMBDA_B_3: EnvRow = [
    0.012, 0.025, 0.13, 0.062, 0.21, 0.078, 0.10, 0.19, 0.24, 0.32, 0.0060, 0.18, 0.47, 8.2,
];
static PART_COUNT_LAMBDA_B_4: EnvRow = [
    0.0023, 0.0066, 0.031, 0.013, 0.055, 0.022, 0.043, 0.077, 0.15, 0.10, 0.0011, 0.055, 0.15, 1.7,
];
static PART_COUNT_LAMBDA_B_5: EnvRow = [
    0.0085, 0.018, 0.10, 0.045, 0.16, 0.15, 0.17, 0.30, 0.38, 0.26, 0.0068, 0.13, 0.37, 5.4,
];
static PART_COUNT_LAMBDA_B_6_1: EnvRow = [
    0.014, 0.031, 0.16, 0.077, 0.26, 0.073, 0.15, 0.19, 0.39, 0.42, 0.0042, 0.21, 0.62, 9.4,
];
static PART_COUNT_LAMBDA_B_6_2: EnvRow = [
    0.013, 0.028, 0.15, 0.070, 0.24, 0.065, 0.13, 0.18, 0.35, 0.38, 0.0038, 0.19, 0.56, 8.6,
];
static PART_COUNT_LAMBDA_B_7: EnvRow = [
    0.008, 0.18, 0.096, 0.045, 0.15, 0.044, 0.088, 0.12, 0.24, 0.25, 0.004, 0.13, 0.37, 5.5,
];
static PART_COUNT_LAMBDA_B_8: EnvRow = [
    0.065, 0.32, 1.4, 0.71, 1.6, 0.71, 1.9, 1.0, 2.7, 2.4, 0.032, 1.3, 3.4, 62.0,
];
static PART_COUNT_LAMBDA_B_9: EnvRow = [
    0.025, 0.055, 0.35, 0.15, 0.58, 0.16, 0.26, 0.35, 0.58, 1.1, 0.013, 0.52, 1.6, 24.0,
];
static PART_COUNT_LAMBDA_B_10: EnvRow = [
    0.33, 0.73, 7.0, 2.9, 12.0, 3.5, 5.3, 7.1, 9.8, 23.0, 0.16, 11.0, 33.0, 510.0,
];
static PART_COUNT_LAMBDA_B_11: EnvRow = [
    0.15, 0.35, 3.1, 1.2, 5.4, 1.9, 2.8, 0.0, 0.0, 9.0, 0.075, 0.0, 0.0, 0.0,
];
static PART_COUNT_LAMBDA_B_12: EnvRow = [
    0.15, 0.34, 2.9, 1.2, 5.0, 1.6, 2.4, 0.0, 0.0, 7.6, 0.076, 0.0, 0.0, 0.0,
];
static PART_COUNT_LAMBDA_B_13: EnvRow = [
    0.043, 0.15, 0.75, 0.35, 1.3, 0.39, 0.78, 1.8, 2.8, 2.5, 0.21, 1.2, 3.7, 49.0,
];
static PART_COUNT_LAMBDA_B_14: EnvRow = [
    0.05, 0.11, 1.1, 0.45, 1.7, 2.8, 4.6, 4.6, 7.5, 3.3, 0.025, 1.5, 4.7, 67.0,
];
static PART_COUNT_LAMBDA_B_15: EnvRow = [
    0.048, 0.16, 0.76, 0.36, 1.3, 0.36, 0.72, 1.4, 2.2, 2.3, 0.024, 1.2, 3.4, 52.0,
];

static PART_COUNT_PI_Q: [f64; 6] = [0.030, 0.10, 0.30, 1.0, 3.0, 10.0];

static PI_E_1: EnvRow = [
    1.0, 3.0, 8.0, 5.0, 13.0, 4.0, 5.0, 7.0, 11.0, 19.0, 0.5, 11.0, 27.0, 490.0,
];
static PI_E_2: EnvRow = [
    1.0, 2.0, 8.0, 4.0, 14.0, 4.0, 8.0, 10.0, 18.0, 19.0, 0.2, 10.0, 28.0, 510.0,
];
static PI_E_3: EnvRow = [
    1.0, 2.0, 10.0, 5.0, 17.0, 6.0, 8.0, 14.0, 18.0, 25.0, 0.5, 14.0, 36.0, 660.0,
];
static PI_E_5: EnvRow = [
    1.0, 2.0, 11.0, 5.0, 18.0, 15.0, 18.0, 28.0, 35.0, 27.0, 0.8, 14.0, 38.0, 610.0,
];
static PI_E_6: EnvRow = [
    1.0, 2.0, 10.0, 5.0, 16.0, 4.0, 8.0, 9.0, 18.0, 23.0, 0.3, 13.0, 34.0, 610.0,
];
static PI_E_7: EnvRow = [
    1.0, 2.0, 10.0, 5.0, 16.0, 4.0, 8.0, 9.0, 18.0, 23.0, 0.5, 13.0, 34.0, 610.0,
];
static PI_E_8: EnvRow = [
    1.0, 5.0, 21.0, 11.0, 24.0, 11.0, 30.0, 16.0, 42.0, 37.0, 0.5, 20.0, 53.0, 950.0,
];
static PI_E_9: EnvRow = [
    1.0, 2.0, 12.0, 6.0, 20.0, 5.0, 8.0, 9.0, 15.0, 33.0, 0.5, 18.0, 48.0, 870.0,
];
static PI_E_10: EnvRow = [
    1.0, 2.0, 18.0, 8.0, 30.0, 8.0, 12.0, 13.0, 18.0, 53.0, 0.5, 29.0, 76.0, 1400.0,
];
static PI_E_11: EnvRow = [
    1.0, 2.0, 16.0, 7.0, 28.0, 8.0, 12.0, 0.0, 0.0, 38.0, 0.5, 0.0, 0.0, 0.0,
];
static PI_E_12: EnvRow = [
    1.0, 3.0, 16.0, 7.0, 28.0, 8.0, 12.0, 0.0, 0.0, 38.0, 0.5, 0.0, 0.0, 0.0,
];
static PI_E_13: EnvRow = [
    1.0, 3.0, 14.0, 6.0, 24.0, 5.0, 7.0, 12.0, 18.0, 39.0, 0.5, 22.0, 57.0, 1000.0,
];
static PI_E_14: EnvRow = [
    1.0, 2.0, 19.0, 8.0, 29.0, 40.0, 65.0, 48.0, 78.0, 46.0, 0.5, 25.0, 66.0, 1200.0,
];
static PI_E_15: EnvRow = [
    1.0, 3.0, 14.0, 7.0, 24.0, 6.0, 12.0, 20.0, 30.0, 39.0, 0.5, 22.0, 57.0, 1000.0,
];

static PI_C_10: [f64; 4] = [2.0, 1.0, 3.0, 1.5];
static PI_C_12: [f64; 2] = [2.0, 1.0];

/// Flat piR value lists; band i covers resistances up to breakpoint i,
/// the final entry covers everything above the top breakpoint.
static PI_R_1: [f64; 4] = [1.0, 1.1, 1.6, 2.5];
static PI_R_3: [f64; 4] = [1.0, 1.2, 1.3, 3.5];
static PI_R_5: [f64; 4] = [1.0, 1.7, 3.0, 5.0];
static PI_R_9: [f64; 3] = [1.0, 1.4, 2.0];
static PI_R_10: [f64; 6] = [1.0, 1.1, 1.4, 2.0, 2.5, 3.5];
static PI_R_13: [f64; 5] = [1.0, 1.1, 1.2, 1.4, 1.8];

static RES_BREAKS_1: [f64; 3] = [1.0e5, 1.0e6, 1.0e7];
static RES_BREAKS_3: [f64; 3] = [100.0, 1.0e5, 1.0e6];
static RES_BREAKS_5: [f64; 3] = [1.0e4, 1.0e5, 1.0e6];
static RES_BREAKS_7: [f64; 5] = [500.0, 1.0e3, 5.0e3, 1.0e4, 2.0e4];
static RES_BREAKS_9: [f64; 2] = [2.0e3, 5.0e3];
static RES_BREAKS_10: [f64; 5] = [1.0e4, 2.0e4, 5.0e4, 1.0e5, 2.0e5];
static RES_BREAKS_13: [f64; 4] = [5.0e4, 1.0e5, 2.0e5, 5.0e5];
static RES_BREAKS_15: [f64; 4] = [1.0e4, 5.0e4, 2.0e5, 1.0e6];

/// Wirewound power (subcategory 6): family rows per specification.
/// Zero entries mark resistance ranges the style is not produced in.
static RES_BREAKS_6_1: [f64; 7] = [500.0, 1.0e3, 5.0e3, 7.5e3, 1.0e4, 1.5e4, 2.0e4];
static RES_BREAKS_6_2: [f64; 6] = [100.0, 1.0e3, 1.0e4, 1.0e5, 1.5e5, 2.0e5];
static PI_R_6_1: [[f64; 8]; 8] = [
    [1.0, 1.0, 1.2, 1.2, 1.6, 1.6, 1.6, 0.0],
    [1.0, 1.0, 1.0, 1.2, 1.6, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.0, 1.2, 1.2, 1.2, 1.6],
    [1.0, 1.2, 1.6, 1.6, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.6, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.6, 1.6, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.1, 1.2, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.4, 0.0, 0.0, 0.0, 0.0, 0.0],
];
static PI_R_6_2: [[f64; 6]; 35] = [
    [1.0, 1.0, 1.0, 1.0, 1.2, 1.6],
    [1.0, 1.0, 1.0, 1.2, 1.6, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 2.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 2.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 2.0, 0.0, 0.0],
    [1.0, 1.2, 1.4, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.6, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 2.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.4, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.2, 0.0, 0.0],
    [1.0, 1.0, 1.4, 0.0, 0.0, 0.0],
    [1.0, 1.2, 1.6, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.4, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.4, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.4, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.4, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.5, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.4, 1.6, 0.0],
    [1.0, 1.0, 1.0, 1.4, 1.6, 2.0],
    [1.0, 1.0, 1.0, 1.4, 1.6, 2.0],
    [1.0, 1.0, 1.4, 2.4, 0.0, 0.0],
    [1.0, 1.0, 1.2, 2.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 1.2, 1.4, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.0, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.4, 0.0, 0.0, 0.0],
    [1.0, 1.2, 1.5, 0.0, 0.0, 0.0],
    [1.0, 1.2, 0.0, 0.0, 0.0, 0.0],
];

/// Chassis-mount power (subcategory 7): family rows per specification.
static PI_R_7_1: [[f64; 6]; 6] = [
    [1.0, 1.2, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.2, 1.6, 0.0],
    [1.0, 1.0, 1.0, 1.1, 1.2, 1.6],
    [1.0, 1.0, 1.0, 1.0, 1.2, 1.6],
    [1.0, 1.0, 1.0, 1.0, 1.2, 1.6],
];
static PI_R_7_2: [[f64; 6]; 6] = [
    [1.0, 1.2, 1.6, 0.0, 0.0, 0.0],
    [1.0, 1.2, 1.6, 0.0, 0.0, 0.0],
    [1.0, 1.0, 1.2, 1.6, 0.0, 0.0],
    [1.0, 1.0, 1.1, 1.2, 1.4, 0.0],
    [1.0, 1.0, 1.0, 1.2, 1.6, 0.0],
    [1.0, 1.0, 1.0, 1.1, 1.4, 0.0],
];

static PI_V_POT: [f64; 7] = [1.1, 1.05, 1.0, 1.1, 1.22, 1.4, 2.0];
static PI_V_POT_BREAKS: [f64; 6] = [0.1, 0.2, 0.6, 0.7, 0.8, 0.9];
static PI_V_NONWW: [f64; 3] = [1.0, 1.05, 1.2];
static PI_V_NONWW_BREAKS: [f64; 2] = [0.8, 0.9];

/// [f0, f1, f2, f3, f4, f5] per subcategory for the stress lambda_b form.
fn stress_factors(subcategory_id: u32, specification_id: u32) -> Option<&'static [f64; 6]> {
    match (subcategory_id, specification_id) {
        (1, _) => Some(&[4.5e-9, 12.0, 1.0, 0.6, 1.0, 1.0]),
        (2, 1) | (2, 2) => Some(&[3.25e-4, 1.0, 3.0, 1.0, 1.0, 1.0]),
        (2, 3) | (2, 4) => Some(&[5.0e-5, 3.5, 1.0, 1.0, 1.0, 1.0]),
        (3, _) => Some(&[7.33e-3, 0.202, 2.6, 1.45, 0.89, 1.3]),
        (5, _) => Some(&[0.0031, 1.0, 10.0, 1.0, 1.0, 1.5]),
        (6, _) => Some(&[0.00148, 1.0, 2.0, 0.5, 1.0, 1.0]),
        (7, _) => Some(&[0.00015, 2.64, 1.0, 0.466, 1.0, 1.0]),
        (9, _) => Some(&[0.0062, 1.0, 5.0, 1.0, 1.0, 1.0]),
        (10, _) => Some(&[0.0735, 1.03, 4.45, 2.74, 3.51, 1.0]),
        (11, _) => Some(&[0.0398, 0.514, 5.28, 1.44, 4.46, 1.0]),
        (12, _) => Some(&[0.0481, 0.334, 4.66, 1.47, 2.83, 1.0]),
        (13, _) => Some(&[0.019, 0.445, 7.3, 2.69, 2.46, 1.0]),
        (14, _) => Some(&[0.0246, 0.459, 9.3, 2.32, 5.3, 1.0]),
        (15, _) => Some(&[0.018, 1.0, 7.4, 2.55, 3.6, 1.0]),
        _ => None,
    }
}

fn ref_temp(subcategory_id: u32, specification_id: u32) -> Option<f64> {
    match (subcategory_id, specification_id) {
        (1, _) => Some(343.0),
        (2, 1) | (2, 2) => Some(343.0),
        (2, 3) | (2, 4) => Some(398.0),
        (3, _) | (6, _) | (7, _) | (12, _) => Some(298.0),
        (5, _) => Some(398.0),
        (9, _) | (10, _) | (13, _) => Some(358.0),
        (11, _) => Some(313.0),
        (14, _) | (15, _) => Some(343.0),
        _ => None,
    }
}

fn part_count_row(part: &PartRecord) -> Result<&'static EnvRow, TableError> {
    match (part.subcategory_id, part.specification_id) {
        (1, _) => Ok(&PART_COUNT_LAMBDA_B_1),
        (2, 1) | (2, 2) => Ok(&PART_COUNT_LAMBDA_B_2_LO),
        (2, 3) | (2, 4) => Ok(&PART_COUNT_LAMBDA_B_2_HI),
        (3, _) => Ok(&PART_COUNT_LAMBDA_B_3),
        (4, _) => Ok(&PART_COUNT_LAMBDA_B_4),
        (5, _) => Ok(&PART_COUNT_LAMBDA_B_5),
        (6, 1) => Ok(&PART_COUNT_LAMBDA_B_6_1),
        (6, 2) => Ok(&PART_COUNT_LAMBDA_B_6_2),
        (7, _) => Ok(&PART_COUNT_LAMBDA_B_7),
        (8, _) => Ok(&PART_COUNT_LAMBDA_B_8),
        (9, _) => Ok(&PART_COUNT_LAMBDA_B_9),
        (10, _) => Ok(&PART_COUNT_LAMBDA_B_10),
        (11, _) => Ok(&PART_COUNT_LAMBDA_B_11),
        (12, _) => Ok(&PART_COUNT_LAMBDA_B_12),
        (13, _) => Ok(&PART_COUNT_LAMBDA_B_13),
        (14, _) => Ok(&PART_COUNT_LAMBDA_B_14),
        (15, _) => Ok(&PART_COUNT_LAMBDA_B_15),
        (2, _) | (6, _) => Err(TableError::IndexOutOfRange {
            table: "resistor lambda_b specification",
            index: part.specification_id,
        }),
        _ => Err(TableError::IndexOutOfRange {
            table: "resistor lambda_b subcategory",
            index: part.subcategory_id,
        }),
    }
}

fn environment_row(subcategory_id: u32) -> Result<&'static EnvRow, TableError> {
    match subcategory_id {
        1 => Ok(&PI_E_1),
        2 => Ok(&PI_E_2),
        3 | 4 => Ok(&PI_E_3),
        5 => Ok(&PI_E_5),
        6 => Ok(&PI_E_6),
        7 => Ok(&PI_E_7),
        8 => Ok(&PI_E_8),
        9 => Ok(&PI_E_9),
        10 => Ok(&PI_E_10),
        11 => Ok(&PI_E_11),
        12 => Ok(&PI_E_12),
        13 => Ok(&PI_E_13),
        14 => Ok(&PI_E_14),
        15 => Ok(&PI_E_15),
        _ => Err(TableError::IndexOutOfRange {
            table: "resistor piE subcategory",
            index: subcategory_id,
        }),
    }
}

fn stress_pi_q(subcategory_id: u32, quality_id: u32) -> Result<f64, TableError> {
    let row: &[f64] = match subcategory_id {
        1 | 5 | 6 | 7 => &[0.03, 0.1, 0.3, 1.0, 5.0, 15.0],
        2 => &[0.03, 0.1, 0.3, 1.0, 5.0, 5.0, 15.0],
        3 | 4 => &[1.0, 3.0],
        8 => &[1.0, 15.0],
        9 | 13 => &[0.02, 0.06, 0.2, 0.6, 3.0, 10.0],
        10 | 14 => &[2.5, 5.0],
        11 | 12 | 15 => &[2.0, 4.0],
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "resistor piQ subcategory",
                index: subcategory_id,
            })
        }
    };
    pick("resistor piQ", row, quality_id)
}

fn stress_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    match part.subcategory_id {
        4 => Ok(0.00006),
        8 => pick("resistor lambda_b type", &[0.021, 0.065, 0.105], part.type_id),
        _ => {
            let f = stress_factors(part.subcategory_id, part.specification_id).ok_or(
                TableError::IndexOutOfRange {
                    table: "resistor lambda_b subcategory",
                    index: part.subcategory_id,
                },
            )?;
            let t_ref = ref_temp(part.subcategory_id, part.specification_id).ok_or(
                TableError::IndexOutOfRange {
                    table: "resistor reference temperature",
                    index: part.subcategory_id,
                },
            )?;
            let t_k = part.temperature_active + 273.0;
            Ok(f[0]
                * (f[1] * (t_k / t_ref)).exp().powf(f[2])
                * (((part.power_ratio / f[3]) * (t_k / 273.0).powf(f[4])).powf(f[5])).exp())
        }
    }
}

/// Band lookup for piR. Rows one slot shorter than `breaks.len() + 1`
/// have no value above the top breakpoint; that reads as the in-table
/// 0.0 sentinel.
fn pick_pi_r(breaks: &[f64], values: &[f64], resistance: f64) -> Result<f64, TableError> {
    if !resistance.is_finite() || resistance < 0.0 {
        return Err(TableError::ValueOutOfRange {
            table: "resistor piR",
            value: resistance,
        });
    }
    match breaks.iter().position(|b| resistance <= *b) {
        Some(idx) => Ok(values[idx]),
        None => Ok(values.get(breaks.len()).copied().unwrap_or(0.0)),
    }
}

fn resistance_factor(part: &PartRecord) -> Result<f64, TableError> {
    match part.subcategory_id {
        1 | 2 => pick_pi_r(&RES_BREAKS_1, &PI_R_1, part.resistance),
        3 => pick_pi_r(&RES_BREAKS_3, &PI_R_3, part.resistance),
        5 => pick_pi_r(&RES_BREAKS_5, &PI_R_5, part.resistance),
        6 => {
            let family = part.family_id as usize;
            match part.specification_id {
                1 => {
                    let row = PI_R_6_1.get(family.wrapping_sub(1)).ok_or(
                        TableError::IndexOutOfRange {
                            table: "resistor piR family",
                            index: part.family_id,
                        },
                    )?;
                    pick_pi_r(&RES_BREAKS_6_1, row, part.resistance)
                }
                2 => {
                    let row = PI_R_6_2.get(family.wrapping_sub(1)).ok_or(
                        TableError::IndexOutOfRange {
                            table: "resistor piR family",
                            index: part.family_id,
                        },
                    )?;
                    pick_pi_r(&RES_BREAKS_6_2, row, part.resistance)
                }
                _ => Err(TableError::IndexOutOfRange {
                    table: "resistor piR specification",
                    index: part.specification_id,
                }),
            }
        }
        7 => {
            let rows: &[[f64; 6]; 6] = match part.specification_id {
                1 => &PI_R_7_1,
                2 => &PI_R_7_2,
                _ => {
                    return Err(TableError::IndexOutOfRange {
                        table: "resistor piR specification",
                        index: part.specification_id,
                    })
                }
            };
            let row = rows
                .get((part.family_id as usize).wrapping_sub(1))
                .ok_or(TableError::IndexOutOfRange {
                    table: "resistor piR family",
                    index: part.family_id,
                })?;
            pick_pi_r(&RES_BREAKS_7, row, part.resistance)
        }
        9 | 11 | 12 => pick_pi_r(&RES_BREAKS_9, &PI_R_9, part.resistance),
        10 => pick_pi_r(&RES_BREAKS_10, &PI_R_10, part.resistance),
        13 | 14 => pick_pi_r(&RES_BREAKS_13, &PI_R_13, part.resistance),
        15 => pick_pi_r(&RES_BREAKS_15, &PI_R_13, part.resistance),
        _ => Err(TableError::IndexOutOfRange {
            table: "resistor piR subcategory",
            index: part.subcategory_id,
        }),
    }
}

fn voltage_factor(subcategory_id: u32, voltage_ratio: f64) -> Result<f64, TableError> {
    match subcategory_id {
        9..=12 => pick_by_breaks("resistor piV", &PI_V_POT_BREAKS, &PI_V_POT, voltage_ratio),
        13..=15 => pick_by_breaks("resistor piV", &PI_V_NONWW_BREAKS, &PI_V_NONWW, voltage_ratio),
        _ => Err(TableError::IndexOutOfRange {
            table: "resistor piV subcategory",
            index: subcategory_id,
        }),
    }
}

/// Film network case temperature and temperature factor (piT).
fn temperature_factor(temperature_active: f64, power_ratio: f64) -> (f64, f64) {
    let temperature_case = temperature_active + 55.0 * power_ratio;
    let pi_t = (-4056.0 * (1.0 / (temperature_case + 273.0) - 1.0 / 298.0)).exp();
    (temperature_case, pi_t)
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(
        part_count_row(part).and_then(|row| {
            pick("resistor lambda_b environment", row, part.environment_active_id)
        }),
        "Base hazard rate",
        part,
        diagnostics,
    );
    let pi_q = resolve_factor(
        pick("resistor piQ", &PART_COUNT_PI_Q, part.quality_id),
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
        environment_row(part.subcategory_id)
            .and_then(|row| pick("resistor piE", row, part.environment_active_id)),
        "piE",
        part,
        diagnostics,
    );
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.pi_e = pi_e;

    let mut hazard_rate = lambda_b * pi_q * pi_e;
    match part.subcategory_id {
        4 => {
            let (temperature_case, pi_t) =
                temperature_factor(part.temperature_active, part.power_ratio);
            part.temperature_case = temperature_case;
            part.pi_t = pi_t;
            hazard_rate *= pi_t * f64::from(part.n_elements);
        }
        8 => {}
        9..=15 => {
            let pi_r = resolve_factor(resistance_factor(part), "piR", part, diagnostics);
            let pi_v = resolve_factor(
                voltage_factor(part.subcategory_id, part.voltage_ratio),
                "piV",
                part,
                diagnostics,
            );
            let pi_taps = f64::from(part.n_elements).powf(1.5) / 25.0 + 0.792;
            part.pi_r = pi_r;
            part.pi_v = pi_v;
            part.pi_taps = pi_taps;
            hazard_rate *= pi_taps * pi_r * pi_v;
            if part.subcategory_id == 10 || part.subcategory_id == 12 {
                let pi_c = resolve_factor(
                    if part.subcategory_id == 10 {
                        pick("resistor piC", &PI_C_10, part.construction_id)
                    } else {
                        pick("resistor piC", &PI_C_12, part.construction_id)
                    },
                    "piC",
                    part,
                    diagnostics,
                );
                part.pi_c = pi_c;
                hazard_rate *= pi_c;
            }
        }
        _ => {
            let pi_r = resolve_factor(resistance_factor(part), "piR", part, diagnostics);
            part.pi_r = pi_r;
            hazard_rate *= pi_r;
        }
    }
    part.hazard_rate_active = hazard_rate;
}

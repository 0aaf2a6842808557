//! Switch prediction models (MIL-HDBK-217F sections 14 and 15)
//!
//! Subcategories: 1 toggle/pushbutton, 2 sensitive, 3 rotary, 4
//! thumbwheel, 5 circuit breaker. Quality selects between MIL-SPEC and
//! commercial base hazard rates rather than contributing a separate piQ
//! for subcategories 1-4:
//!
//! ```text
//! hr = lambda_b * piCYC * piL * piE          (subcategories 1-4)
//! hr = lambda_b * piC * piU * piQ * piE      (subcategory 5)
//! ```
//!
//! with `piL = exp((stress_ratio / K)^2)` where K is 0.8 resistive, 0.4
//! inductive, 0.2 lamp load.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B: [EnvRow; 5] = [
    [
        0.0010, 0.0030, 0.018, 0.0080, 0.029, 0.010, 0.018, 0.013, 0.022, 0.046, 0.0005, 0.025,
        0.067, 1.2,
    ],
    [0.15, 0.44, 2.7, 1.2, 4.3, 1.5, 2.7, 1.9, 3.3, 6.8, 0.74, 3.7, 9.9, 180.0],
    [0.33, 0.99, 5.9, 2.6, 9.5, 3.3, 5.9, 4.3, 7.2, 15.0, 0.16, 8.2, 22.0, 390.0],
    [0.56, 1.7, 10.0, 4.5, 16.0, 5.6, 10.0, 7.3, 12.0, 26.0, 0.26, 14.0, 38.0, 670.0],
    [0.11, 0.23, 1.7, 0.91, 3.1, 0.70, 1.6, 1.1, 1.5, 3.4, 0.065, 1.8, 5.4, 0.0],
];

static PI_E_SWITCH: EnvRow = [
    1.0, 3.0, 18.0, 8.0, 29.0, 10.0, 18.0, 13.0, 22.0, 46.0, 0.5, 25.0, 67.0, 1200.0,
];
static PI_E_BREAKER: EnvRow = [
    1.0, 2.0, 15.0, 8.0, 27.0, 7.0, 9.0, 11.0, 12.0, 46.0, 0.5, 25.0, 66.0, 0.0,
];

static PI_C_BREAKER: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
static PI_U_BREAKER: [f64; 2] = [1.0, 10.0];
static PI_Q_BREAKER: [f64; 2] = [1.0, 8.4];

fn is_mil_spec_quality(quality_id: u32) -> bool {
    quality_id == 1
}

fn part_count_pi_q(subcategory_id: u32, quality_id: u32) -> Result<f64, TableError> {
    let row: &[f64] = match subcategory_id {
        1 | 2 => &[1.0, 20.0],
        3 => &[1.0, 50.0],
        4 => &[1.0, 10.0],
        5 => &[1.0, 8.4],
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "switch piQ subcategory",
                index: subcategory_id,
            })
        }
    };
    pick("switch piQ", row, quality_id)
}

/// Base hazard rate in the stress method. Subcategories 2-4 grow with
/// the contact count: `lambda_b = lambda_bE + n * lambda_bC`.
fn stress_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    let mil = is_mil_spec_quality(part.quality_id);
    let n = f64::from(part.n_elements);
    match part.subcategory_id {
        1 => Ok(if mil { 0.00045 } else { 0.034 }),
        2 => {
            let (base, per_contact) = if mil { (0.00045, 0.0009) } else { (0.23, 0.63) };
            Ok(base + n * per_contact)
        }
        3 => {
            let (base, per_contact) = if mil { (0.0067, 0.00003) } else { (0.1, 0.02) };
            Ok(base + n * per_contact)
        }
        4 => {
            let (base, per_contact) = if mil { (0.0067, 0.062) } else { (0.086, 0.089) };
            Ok(base + n * per_contact)
        }
        5 => pick(
            "switch lambda_b construction",
            &[0.020, 0.038, 0.038],
            part.construction_id,
        ),
        _ => Err(TableError::IndexOutOfRange {
            table: "switch lambda_b subcategory",
            index: part.subcategory_id,
        }),
    }
}

/// Load stress factor. K is 0.8 resistive, 0.4 inductive, 0.2 lamp.
fn load_stress_factor(technology_id: u32, current_ratio: f64) -> Result<f64, TableError> {
    let k = match technology_id {
        1 => 0.8,
        2 => 0.4,
        3 => 0.2,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "switch piL load type",
                index: technology_id,
            })
        }
    };
    Ok(((current_ratio / k).powi(2)).exp())
}

fn cycling_factor(n_cycles: f64) -> f64 {
    if n_cycles > 1.0 {
        n_cycles
    } else {
        1.0
    }
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(
        part.subcategory_id
            .checked_sub(1)
            .and_then(|i| PART_COUNT_LAMBDA_B.get(i as usize))
            .ok_or(TableError::IndexOutOfRange {
                table: "switch lambda_b subcategory",
                index: part.subcategory_id,
            })
            .and_then(|row| pick("switch lambda_b environment", row, part.environment_active_id)),
        "Base hazard rate",
        part,
        diagnostics,
    );
    let pi_q = resolve_factor(
        part_count_pi_q(part.subcategory_id, part.quality_id),
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
    part.lambda_b = lambda_b;

    if part.subcategory_id == 5 {
        let pi_c = resolve_factor(
            pick("switch piC", &PI_C_BREAKER, part.contact_form_id),
            "piC",
            part,
            diagnostics,
        );
        let pi_u = resolve_factor(
            pick("switch piU", &PI_U_BREAKER, part.application_id),
            "piU",
            part,
            diagnostics,
        );
        let pi_q = resolve_factor(
            pick("switch piQ", &PI_Q_BREAKER, part.quality_id),
            "piQ",
            part,
            diagnostics,
        );
        let pi_e = resolve_factor(
            pick("switch piE", &PI_E_BREAKER, part.environment_active_id),
            "piE",
            part,
            diagnostics,
        );
        part.pi_c = pi_c;
        part.pi_u = pi_u;
        part.pi_q = pi_q;
        part.pi_e = pi_e;
        part.hazard_rate_active = lambda_b * pi_c * pi_u * pi_q * pi_e;
    } else {
        let pi_cyc = cycling_factor(part.n_cycles);
        let pi_l = resolve_factor(
            load_stress_factor(part.technology_id, part.current_ratio),
            "piL",
            part,
            diagnostics,
        );
        let pi_e = resolve_factor(
            pick("switch piE", &PI_E_SWITCH, part.environment_active_id),
            "piE",
            part,
            diagnostics,
        );
        part.pi_cyc = pi_cyc;
        part.pi_l = pi_l;
        part.pi_e = pi_e;
        part.hazard_rate_active = lambda_b * pi_cyc * pi_l * pi_e;
    }
}

//! Relay prediction models (MIL-HDBK-217F section 13)
//!
//! Subcategory 1 covers electromechanical relays; the base hazard rate
//! follows an exponential in ambient temperature keyed by the rated
//! insulation temperature:
//!
//! ```text
//! lambda_b = K1 * exp(((T + 273) / T_ref)^K2)
//! ```
//!
//! and the full chain is `lambda_b * piL * piC * piCYC * piF * piQ * piE`.
//! Subcategory 2 covers solid state relays, which reduce to
//! `lambda_b * piQ * piE`.
//!
//! Established-reliability and MIL quality grades (quality 1-6) use the
//! MIL columns of the cycling, application, and environment tables;
//! quality 7 selects the commercial columns.

use crate::core::diagnostic::Diagnostic;
use crate::core::prediction::resolve_factor;
use crate::core::tables::{pick, TableError};
use crate::entities::PartRecord;

type EnvRow = [f64; 14];

static PART_COUNT_LAMBDA_B_1: [EnvRow; 6] = [
    [0.13, 0.28, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0],
    [0.43, 0.89, 6.9, 3.6, 12.0, 3.4, 4.4, 6.2, 6.7, 22.0, 0.21, 11.0, 32.0, 0.0],
    [0.13, 0.26, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0],
    [0.11, 0.23, 1.8, 0.92, 3.3, 0.96, 1.2, 2.1, 2.3, 6.5, 0.54, 3.0, 9.0, 0.0],
    [0.29, 0.60, 4.8, 2.4, 8.2, 2.3, 2.9, 4.1, 4.5, 15.0, 0.14, 7.6, 22.0, 0.0],
    [0.88, 1.8, 14.0, 7.4, 26.0, 7.1, 9.1, 13.0, 14.0, 46.0, 0.44, 24.0, 67.0, 0.0],
];
static PART_COUNT_LAMBDA_B_2: [EnvRow; 2] = [
    [0.40, 1.2, 4.8, 2.4, 6.8, 4.8, 7.6, 8.4, 13.0, 9.2, 0.16, 4.8, 13.0, 240.0],
    [0.50, 1.5, 6.0, 3.0, 8.5, 5.0, 9.5, 11.0, 16.0, 12.0, 0.20, 5.0, 17.0, 300.0],
];

static PART_COUNT_PI_Q_1: [f64; 3] = [0.6, 3.0, 9.0];
static PART_COUNT_PI_Q_2: [f64; 3] = [0.0, 1.0, 4.0];

static STRESS_PI_Q_1: [f64; 7] = [0.1, 0.3, 0.45, 0.6, 1.0, 1.5, 3.0];
static STRESS_PI_Q_2: [f64; 2] = [1.0, 4.0];

static PI_E_1_MIL: EnvRow = [
    1.0, 2.0, 15.0, 8.0, 27.0, 7.0, 9.0, 11.0, 12.0, 46.0, 0.5, 25.0, 66.0, 0.0,
];
static PI_E_1_COMMERCIAL: EnvRow = [
    2.0, 5.0, 44.0, 24.0, 78.0, 15.0, 20.0, 28.0, 38.0, 140.0, 1.0, 72.0, 200.0, 0.0,
];
static PI_E_2: EnvRow = [
    1.0, 3.0, 12.0, 6.0, 17.0, 12.0, 19.0, 21.0, 32.0, 23.0, 0.4, 12.0, 33.0, 590.0,
];

static PI_C: [f64; 9] = [1.0, 1.5, 1.75, 2.0, 2.5, 3.0, 4.25, 5.5, 8.0];

fn is_commercial_quality(quality_id: u32) -> bool {
    quality_id >= 7
}

fn part_count_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    let rows: &[EnvRow] = match part.subcategory_id {
        1 => &PART_COUNT_LAMBDA_B_1,
        2 => &PART_COUNT_LAMBDA_B_2,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "relay lambda_b subcategory",
                index: part.subcategory_id,
            })
        }
    };
    let row = part
        .type_id
        .checked_sub(1)
        .and_then(|i| rows.get(i as usize))
        .ok_or(TableError::IndexOutOfRange {
            table: "relay lambda_b type",
            index: part.type_id,
        })?;
    pick("relay lambda_b environment", row, part.environment_active_id)
}

fn stress_lambda_b(part: &PartRecord) -> Result<f64, TableError> {
    match part.subcategory_id {
        1 => {
            let (k1, t_ref, k2) = match part.type_id {
                1 => (0.00555, 352.0, 15.7),
                2 => (0.0054, 377.0, 10.4),
                _ => {
                    return Err(TableError::IndexOutOfRange {
                        table: "relay lambda_b type",
                        index: part.type_id,
                    })
                }
            };
            Ok(k1 * (((part.temperature_active + 273.0) / t_ref).powf(k2)).exp())
        }
        2 => pick("relay lambda_b type", &[0.4, 0.5, 0.5], part.type_id),
        _ => Err(TableError::IndexOutOfRange {
            table: "relay lambda_b subcategory",
            index: part.subcategory_id,
        }),
    }
}

/// Load stress factor. The load type selects the derating constant K:
/// resistive 0.8, inductive 0.4, lamp 0.2.
fn load_stress_factor(technology_id: u32, current_ratio: f64) -> Result<f64, TableError> {
    let k = match technology_id {
        1 => 0.8,
        2 => 0.4,
        3 => 0.2,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "relay piL load type",
                index: technology_id,
            })
        }
    };
    Ok((current_ratio / k).powi(2))
}

/// Cycling factor. Commercial parts wear with switching rate; MIL grades
/// only penalize extremely low rates.
fn cycling_factor(quality_id: u32, n_cycles: f64) -> f64 {
    if is_commercial_quality(quality_id) {
        if n_cycles >= 1000.0 {
            (n_cycles / 100.0).powi(2)
        } else if n_cycles >= 10.0 {
            n_cycles / 10.0
        } else {
            1.0
        }
    } else if n_cycles < 1.0 {
        0.1
    } else {
        1.0
    }
}

/// Application/construction factor, keyed (contact rating, application,
/// construction). Values are (MIL, commercial) pairs.
fn application_factor(part: &PartRecord) -> Result<f64, TableError> {
    let pair: (f64, f64) = match (part.contact_rating_id, part.application_id, part.construction_id)
    {
        // Signal current, dry circuit.
        (1, 1, 1) => (4.0, 8.0),
        (1, 1, 2) => (6.0, 18.0),
        (1, 1, 3) => (1.0, 3.0),
        (1, 1, 4) => (4.0, 8.0),
        (1, 1, 5) => (7.0, 14.0),
        (1, 1, 6) => (7.0, 4.0),
        // 0-5 amp, general purpose.
        (2, 1, 1) => (3.0, 6.0),
        (2, 1, 2) => (5.0, 10.0),
        (2, 1, 3) => (6.0, 12.0),
        // 0-5 amp, sensitive.
        (2, 2, 1) | (2, 2, 2) => (5.0, 10.0),
        (2, 2, 3) => (2.0, 6.0),
        (2, 2, 4) => (6.0, 12.0),
        (2, 2, 5) => (100.0, 100.0),
        (2, 2, 6) => (10.0, 20.0),
        // 0-5 amp, polarized.
        (2, 3, 1) => (10.0, 20.0),
        (2, 3, 2) => (100.0, 100.0),
        // 0-5 amp, vibrating reed.
        (2, 4, 1) => (6.0, 12.0),
        (2, 4, 2) => (1.0, 3.0),
        // 0-5 amp, high speed (no commercial grade exists).
        (2, 5, 1) | (2, 5, 2) => (25.0, 0.0),
        (2, 5, 3) => (6.0, 0.0),
        // 0-5 amp, thermal time delay.
        (2, 6, 1) => (10.0, 20.0),
        // 0-5 amp, electronic time delay.
        (2, 7, _) => (9.0, 12.0),
        // 0-5 amp, magnetic latching.
        (2, 8, 1) => (10.0, 20.0),
        (2, 8, 2) | (2, 8, 3) => (5.0, 10.0),
        // 5-20 amp, high voltage.
        (3, 1, 1) => (20.0, 40.0),
        (3, 1, 2) => (5.0, 10.0),
        // 5-20 amp, medium power.
        (3, 2, 1) | (3, 2, 2) => (3.0, 6.0),
        (3, 2, 3) => (1.0, 3.0),
        (3, 2, 4) => (2.0, 6.0),
        (3, 2, 5) => (3.0, 6.0),
        (3, 2, 6) | (3, 2, 7) => (2.0, 6.0),
        // 20-600 amp, contactor.
        (4, 1, 1) => (7.0, 14.0),
        (4, 1, 2) => (12.0, 24.0),
        (4, 1, 3) => (10.0, 20.0),
        (4, 1, 4) => (5.0, 10.0),
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "relay piF application",
                index: part.application_id,
            })
        }
    };
    Ok(if is_commercial_quality(part.quality_id) {
        pair.1
    } else {
        pair.0
    })
}

fn stress_pi_e(part: &PartRecord) -> Result<f64, TableError> {
    let row = match part.subcategory_id {
        1 if is_commercial_quality(part.quality_id) => &PI_E_1_COMMERCIAL,
        1 => &PI_E_1_MIL,
        2 => &PI_E_2,
        _ => {
            return Err(TableError::IndexOutOfRange {
                table: "relay piE subcategory",
                index: part.subcategory_id,
            })
        }
    };
    pick("relay piE", row, part.environment_active_id)
}

pub fn part_count(part: &mut PartRecord, diagnostics: &mut Vec<Diagnostic>) {
    let lambda_b = resolve_factor(
        part_count_lambda_b(part),
        "Base hazard rate",
        part,
        diagnostics,
    );
    let pi_q = resolve_factor(
        match part.subcategory_id {
            1 => pick("relay piQ", &PART_COUNT_PI_Q_1, part.quality_id),
            2 => pick("relay piQ", &PART_COUNT_PI_Q_2, part.quality_id),
            _ => Err(TableError::IndexOutOfRange {
                table: "relay piQ subcategory",
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
    let lambda_b = resolve_factor(stress_lambda_b(part), "Base hazard rate", part, diagnostics);
    let pi_q = resolve_factor(
        match part.subcategory_id {
            1 => pick("relay piQ", &STRESS_PI_Q_1, part.quality_id),
            2 => pick("relay piQ", &STRESS_PI_Q_2, part.quality_id),
            _ => Err(TableError::IndexOutOfRange {
                table: "relay piQ subcategory",
                index: part.subcategory_id,
            }),
        },
        "piQ",
        part,
        diagnostics,
    );
    let pi_e = resolve_factor(stress_pi_e(part), "piE", part, diagnostics);
    part.lambda_b = lambda_b;
    part.pi_q = pi_q;
    part.pi_e = pi_e;

    match part.subcategory_id {
        1 => {
            let pi_l = resolve_factor(
                load_stress_factor(part.technology_id, part.current_ratio),
                "piL",
                part,
                diagnostics,
            );
            let pi_c = resolve_factor(
                pick("relay piC", &PI_C, part.contact_form_id),
                "piC",
                part,
                diagnostics,
            );
            let pi_cyc = cycling_factor(part.quality_id, part.n_cycles);
            let pi_f = resolve_factor(application_factor(part), "piF", part, diagnostics);
            part.pi_l = pi_l;
            part.pi_c = pi_c;
            part.pi_cyc = pi_cyc;
            part.pi_f = pi_f;
            part.hazard_rate_active = lambda_b * pi_l * pi_c * pi_cyc * pi_f * pi_q * pi_e;
        }
        _ => {
            part.hazard_rate_active = lambda_b * pi_q * pi_e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    fn relay(subcategory_id: u32) -> PartRecord {
        PartRecord {
            hardware_id: 6,
            category: Category::Relay,
            subcategory_id,
            type_id: 1,
            quality_id: 1,
            environment_active_id: 1,
            ..PartRecord::default()
        }
    }

    #[test]
    fn part_count_electromechanical() {
        let mut part = relay(1);
        part.type_id = 2;
        part.quality_id = 2;
        let mut diags = Vec::new();
        part_count(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.lambda_b, 0.43);
        assert_eq!(part.pi_q, 3.0);
        assert!((part.hazard_rate_active - 1.29).abs() < 1.0e-12);
    }

    #[test]
    fn part_count_solid_state_quality_one_is_sentinel() {
        let mut part = relay(2);
        part.quality_id = 1;
        let mut diags = Vec::new();
        part_count(&mut part, &mut diags);
        assert_eq!(part.pi_q, 0.0);
        assert_eq!(part.hazard_rate_active, 0.0);
        assert_eq!(diags.len(), 1);
        assert!(!diags[0].is_error());
    }

    #[test]
    fn part_count_unknown_environment_errors() {
        let mut part = relay(1);
        part.environment_active_id = 100;
        let mut diags = Vec::new();
        part_count(&mut part, &mut diags);
        assert_eq!(part.lambda_b, 0.0);
        assert!(diags.iter().any(|d| d.is_error()));
    }

    #[test]
    fn stress_lambda_b_tracks_ambient_temperature() {
        let mut part = relay(1);
        part.temperature_active = 32.0;
        assert!((stress_lambda_b(&part).unwrap() - 0.006166830915694132).abs() < 1.0e-15);
        part.temperature_active = 45.0;
        assert!((stress_lambda_b(&part).unwrap() - 0.006798802437061145).abs() < 1.0e-15);
    }

    #[test]
    fn stress_electromechanical_full_chain() {
        let mut part = relay(1);
        part.temperature_active = 32.0;
        part.quality_id = 5;
        part.environment_active_id = 4;
        part.technology_id = 1;
        part.current_ratio = 0.3;
        part.contact_form_id = 2;
        part.n_cycles = 5.0;
        part.contact_rating_id = 2;
        part.application_id = 4;
        part.construction_id = 1;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert!((part.pi_l - 0.140625).abs() < 1.0e-12);
        assert_eq!(part.pi_c, 1.5);
        assert_eq!(part.pi_cyc, 1.0);
        assert_eq!(part.pi_f, 6.0);
        assert_eq!(part.pi_e, 8.0);
        assert!((part.hazard_rate_active - 0.06243916302140306).abs() < 1.0e-12);
    }

    #[test]
    fn stress_commercial_grade_swaps_columns() {
        let mut part = relay(1);
        part.temperature_active = 32.0;
        part.quality_id = 7;
        part.environment_active_id = 4;
        part.technology_id = 1;
        part.current_ratio = 0.3;
        part.contact_form_id = 2;
        part.n_cycles = 120.0;
        part.contact_rating_id = 2;
        part.application_id = 4;
        part.construction_id = 1;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.pi_cyc, 12.0);
        assert_eq!(part.pi_f, 12.0);
        assert_eq!(part.pi_e, 24.0);
        assert_eq!(part.pi_q, 3.0);
        assert!((part.hazard_rate_active - 13.48685921262306).abs() < 1.0e-9);
    }

    #[test]
    fn stress_solid_state_short_chain() {
        let mut part = relay(2);
        part.environment_active_id = 4;
        let mut diags = Vec::new();
        part_stress(&mut part, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(part.lambda_b, 0.4);
        assert!((part.hazard_rate_active - 2.4).abs() < 1.0e-12);
    }

    #[test]
    fn cycling_factor_bands() {
        assert_eq!(cycling_factor(7, 2000.0), 400.0);
        assert_eq!(cycling_factor(7, 50.0), 5.0);
        assert_eq!(cycling_factor(7, 5.0), 1.0);
        assert_eq!(cycling_factor(1, 0.5), 0.1);
        assert_eq!(cycling_factor(1, 5.0), 1.0);
    }
}

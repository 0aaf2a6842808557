//! Dormant hazard rate conversion
//!
//! Storage and standby failure rates are derived from the active rate
//! with category-specific ratios keyed by the (active, dormant)
//! environment pair. Active environments group into ground (1-3), naval
//! (4-5), airborne (6-10), and space (11); dormant environments are 1
//! airborne, 2 ground, 3 naval, 4 space. Pairs outside the published
//! table (meters and miscellaneous parts have none at all) zero the
//! dormant rate and raise an ERROR.

use crate::core::diagnostic::Diagnostic;
use crate::entities::{Category, PartRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveGroup {
    Ground,
    Naval,
    Airborne,
    Space,
}

fn active_group(environment_active_id: u32) -> Option<ActiveGroup> {
    match environment_active_id {
        1..=3 => Some(ActiveGroup::Ground),
        4..=5 => Some(ActiveGroup::Naval),
        6..=10 => Some(ActiveGroup::Airborne),
        11 => Some(ActiveGroup::Space),
        _ => None,
    }
}

/// Dormancy ratio for the (category, active group, dormant environment)
/// triple, or `None` where MIL-HDBK-217F publishes no figure.
fn dormant_ratio(
    category: Category,
    environment_active_id: u32,
    environment_dormant_id: u32,
) -> Option<f64> {
    use ActiveGroup::*;
    let group = active_group(environment_active_id)?;
    match (category, group, environment_dormant_id) {
        (Category::Resistor, Ground, 2) => Some(0.2),
        (Category::Resistor, Naval, 2) => Some(0.06),
        (Category::Resistor, Naval, 3) => Some(0.1),
        (Category::Resistor, Airborne, 1) => Some(0.06),
        (Category::Resistor, Airborne, 2) => Some(0.03),
        (Category::Resistor, Space, 2) => Some(1.0),
        (Category::Resistor, Space, 4) => Some(0.5),

        (Category::Capacitor, Ground, 2) => Some(0.1),
        (Category::Capacitor, Naval, 2) => Some(0.04),
        (Category::Capacitor, Naval, 3) => Some(0.1),
        (Category::Capacitor, Airborne, 1) => Some(0.1),
        (Category::Capacitor, Airborne, 2) => Some(0.03),
        (Category::Capacitor, Space, 2) => Some(0.4),
        (Category::Capacitor, Space, 4) => Some(0.2),

        (Category::Relay, Ground, 2) => Some(0.2),
        (Category::Relay, Naval, 2) => Some(0.08),
        (Category::Relay, Naval, 3) => Some(0.3),
        (Category::Relay, Airborne, 1) => Some(0.2),
        (Category::Relay, Airborne, 2) => Some(0.04),
        (Category::Relay, Space, 2) => Some(0.9),
        (Category::Relay, Space, 4) => Some(0.4),

        (Category::Switch, Ground, 2) => Some(0.4),
        (Category::Switch, Naval, 2) => Some(0.2),
        (Category::Switch, Naval, 3) => Some(0.4),
        (Category::Switch, Airborne, 1) => Some(0.2),
        (Category::Switch, Airborne, 2) => Some(0.1),
        (Category::Switch, Space, 2) => Some(1.0),
        (Category::Switch, Space, 4) => Some(0.8),

        (Category::Connection, Ground, 2) => Some(0.005),
        (Category::Connection, Naval, 2) => Some(0.003),
        (Category::Connection, Naval, 3) => Some(0.008),
        (Category::Connection, Airborne, 1) => Some(0.0005),
        (Category::Connection, Airborne, 2) => Some(0.003),
        (Category::Connection, Space, 2) => Some(0.03),
        (Category::Connection, Space, 4) => Some(0.02),

        _ => None,
    }
}

/// Convert the active hazard rate into a dormant one.
pub fn calculate_dormant(part: &mut PartRecord) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    match dormant_ratio(
        part.category,
        part.environment_active_id,
        part.environment_dormant_id,
    ) {
        Some(ratio) => {
            part.hazard_rate_dormant = ratio * part.hazard_rate_active;
        }
        None => {
            part.hazard_rate_dormant = 0.0;
            diagnostics.push(Diagnostic::error_with(
                format!(
                    "no dormant hazard rate ratio for {} parts",
                    part.category
                ),
                part.hardware_id,
                format!(
                    "active environment ID: {}, dormant environment ID: {}",
                    part.environment_active_id, part.environment_dormant_id
                ),
            ));
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(category: Category, active: u32, dormant: u32) -> PartRecord {
        PartRecord {
            hardware_id: 3,
            category,
            environment_active_id: active,
            environment_dormant_id: dormant,
            hazard_rate_active: 2.0,
            ..PartRecord::default()
        }
    }

    #[test]
    fn ground_to_ground_resistor() {
        let mut p = part(Category::Resistor, 2, 2);
        let diags = calculate_dormant(&mut p);
        assert!(diags.is_empty());
        assert!((p.hazard_rate_dormant - 0.4).abs() < 1.0e-12);
    }

    #[test]
    fn airborne_to_airborne_connection() {
        let mut p = part(Category::Connection, 7, 1);
        let diags = calculate_dormant(&mut p);
        assert!(diags.is_empty());
        assert!((p.hazard_rate_dormant - 0.001).abs() < 1.0e-12);
    }

    #[test]
    fn space_to_space_switch() {
        let mut p = part(Category::Switch, 11, 4);
        let diags = calculate_dormant(&mut p);
        assert!(diags.is_empty());
        assert!((p.hazard_rate_dormant - 1.6).abs() < 1.0e-12);
    }

    #[test]
    fn unlisted_pair_zeroes_and_errors() {
        let mut p = part(Category::Relay, 1, 4);
        let diags = calculate_dormant(&mut p);
        assert_eq!(p.hazard_rate_dormant, 0.0);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert!(diags[0].message.contains("dormant environment ID: 4"));
    }

    #[test]
    fn meter_has_no_dormancy_data() {
        let mut p = part(Category::Meter, 1, 2);
        let diags = calculate_dormant(&mut p);
        assert_eq!(p.hazard_rate_dormant, 0.0);
        assert!(diags[0].is_error());
    }

    #[test]
    fn out_of_range_active_environment_errors() {
        let mut p = part(Category::Capacitor, 13, 2);
        let diags = calculate_dormant(&mut p);
        assert!(diags[0].is_error());
    }
}

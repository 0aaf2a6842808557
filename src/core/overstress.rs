//! Overstress evaluation against derating limits
//!
//! Compares the electrical stress ratios and temperatures on a record
//! with the category derating limits. Environments 1, 2, 4, and 11
//! (benign ground, fixed ground, naval sheltered, space) count as mild;
//! everything else is harsh and uses the tighter limit column. Each
//! violated limit appends a numbered reason line; the record is marked
//! overstressed when any check fails.

use std::fmt::Write;

use crate::core::tables::StressLimits;
use crate::entities::PartRecord;

const MILD_ENVIRONMENTS: [u32; 4] = [1, 2, 4, 11];

struct ReasonList {
    overstress: bool,
    count: usize,
    text: String,
}

impl ReasonList {
    fn new() -> ReasonList {
        ReasonList {
            overstress: false,
            count: 0,
            text: String::new(),
        }
    }

    fn push(&mut self, reason: std::fmt::Arguments<'_>) {
        self.overstress = true;
        self.count += 1;
        // Writing to a String cannot fail.
        let _ = writeln!(self.text, "{}. {}", self.count, reason);
    }
}

/// Evaluate the derating checks for one record, setting `overstress` and
/// `reason`.
pub fn check_overstress(limits: &StressLimits, part: &mut PartRecord) {
    let row = limits.for_category(part.category);
    let mild = MILD_ENVIRONMENTS.contains(&part.environment_active_id);
    let env = if mild { "mild" } else { "harsh" };
    // Column pairs are (harsh, mild).
    let col = usize::from(mild);

    let mut reasons = ReasonList::new();

    if part.current_ratio > row[col] {
        reasons.push(format_args!(
            "Operating current > {:.1}% rated current in {} environment.",
            row[col] * 100.0,
            env
        ));
    }
    if part.power_ratio > row[2 + col] {
        reasons.push(format_args!(
            "Operating power > {:.1}% rated power in {} environment.",
            row[2 + col] * 100.0,
            env
        ));
    }
    if part.voltage_ratio > row[4 + col] {
        reasons.push(format_args!(
            "Operating voltage > {:.1}% rated voltage in {} environment.",
            row[4 + col] * 100.0,
            env
        ));
    }
    let delta_t_limit = row[6 + col];
    if delta_t_limit > 0.0
        && part.temperature_rated_max - part.temperature_active <= delta_t_limit
    {
        reasons.push(format_args!(
            "Operating temperature within {:.1}C of Maximum Rated temperature in {} environment.",
            delta_t_limit, env
        ));
    }
    if part.temperature_active > row[8 + col] {
        reasons.push(format_args!(
            "Operating temperature > {:.1}C Maximum Rated temperature limit in {} environment.",
            row[8 + col], env
        ));
    }

    part.overstress = reasons.overstress;
    part.reason = reasons.text;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    fn part(category: Category, environment: u32) -> PartRecord {
        PartRecord {
            hardware_id: 4,
            category,
            environment_active_id: environment,
            temperature_active: 40.0,
            temperature_rated_max: 105.0,
            ..PartRecord::default()
        }
    }

    #[test]
    fn within_limits_is_clean() {
        let limits = StressLimits::default();
        let mut p = part(Category::Resistor, 3);
        p.power_ratio = 0.4;
        check_overstress(&limits, &mut p);
        assert!(!p.overstress);
        assert!(p.reason.is_empty());
    }

    #[test]
    fn resistor_power_derating_is_tighter_in_harsh_environments() {
        let limits = StressLimits::default();
        let mut p = part(Category::Resistor, 3);
        p.power_ratio = 0.6;
        check_overstress(&limits, &mut p);
        assert!(p.overstress);
        assert_eq!(
            p.reason,
            "1. Operating power > 50.0% rated power in harsh environment.\n"
        );

        p.environment_active_id = 2;
        check_overstress(&limits, &mut p);
        assert!(!p.overstress);
    }

    #[test]
    fn capacitor_voltage_and_temperature_proximity() {
        let limits = StressLimits::default();
        let mut p = part(Category::Capacitor, 5);
        p.voltage_ratio = 0.7;
        p.temperature_active = 100.0;
        check_overstress(&limits, &mut p);
        assert!(p.overstress);
        assert_eq!(
            p.reason,
            "1. Operating voltage > 60.0% rated voltage in harsh environment.\n\
             2. Operating temperature within 10.0C of Maximum Rated temperature in harsh environment.\n"
        );
    }

    #[test]
    fn relay_current_in_mild_environment() {
        let limits = StressLimits::default();
        let mut p = part(Category::Relay, 11);
        p.current_ratio = 0.95;
        check_overstress(&limits, &mut p);
        assert_eq!(
            p.reason,
            "1. Operating current > 90.0% rated current in mild environment.\n"
        );
    }

    #[test]
    fn maximum_temperature_check() {
        let limits = StressLimits::default();
        let mut p = part(Category::Meter, 1);
        p.temperature_active = 130.0;
        p.temperature_rated_max = 150.0;
        check_overstress(&limits, &mut p);
        assert_eq!(
            p.reason,
            "1. Operating temperature > 125.0C Maximum Rated temperature limit in mild environment.\n"
        );
    }

    #[test]
    fn rechecking_resets_previous_reasons() {
        let limits = StressLimits::default();
        let mut p = part(Category::Switch, 3);
        p.current_ratio = 0.8;
        check_overstress(&limits, &mut p);
        assert!(p.overstress);
        p.current_ratio = 0.1;
        check_overstress(&limits, &mut p);
        assert!(!p.overstress);
        assert!(p.reason.is_empty());
    }
}

//! MIL-HDBK-217F category calculators
//!
//! One module per component family. Every module exposes `part_count` and
//! `part_stress`, both of which mutate the record in place and append
//! diagnostics instead of returning errors. A missed table lookup pins
//! the factor at 0.0 with an ERROR; a factor that is legitimately 0.0 in
//! the handbook tables keeps its value and draws a WARNING.

pub mod capacitor;
pub mod connection;
pub mod meter;
pub mod miscellaneous;
pub mod relay;
pub mod resistor;
pub mod switch;

use crate::core::diagnostic::Diagnostic;
use crate::core::tables::TableError;
use crate::entities::PartRecord;

/// Resolve a table lookup into a usable factor value.
///
/// `factor` names the quantity for the diagnostic text, e.g. `"piQ"` or
/// `"Base hazard rate"`.
pub(crate) fn resolve_factor(
    value: Result<f64, TableError>,
    factor: &str,
    part: &PartRecord,
    diagnostics: &mut Vec<Diagnostic>,
) -> f64 {
    match value {
        Ok(v) if v <= 0.0 => {
            diagnostics.push(Diagnostic::warning(
                format!("{} is 0.0 when calculating {}", factor, part.category),
                part.hardware_id,
            ));
            v
        }
        Ok(v) => v,
        Err(err) => {
            diagnostics.push(Diagnostic::error(
                format!(
                    "{} is 0.0 when calculating {} ({})",
                    factor, part.category, err
                ),
                part.hardware_id,
            ));
            0.0
        }
    }
}

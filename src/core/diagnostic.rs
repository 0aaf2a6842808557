//! Calculation diagnostics
//!
//! Calculators never fail outright on bad data; they substitute a defined
//! value and append a diagnostic. `Error` marks a result that should not
//! be trusted (a zeroed hazard rate from a missed table lookup), `Warning`
//! marks a defaulted input or a suspicious configuration the calculation
//! carried through.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One finding from a calculation, tied to the hardware item it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Warning with the standard `for hardware ID: <id>` suffix.
    pub fn warning(message: impl Into<String>, hardware_id: i32) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            message: format!("{} for hardware ID: {}", message.into(), hardware_id),
        }
    }

    /// Error with the standard `for hardware ID: <id>` suffix.
    pub fn error(message: impl Into<String>, hardware_id: i32) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: format!("{} for hardware ID: {}", message.into(), hardware_id),
        }
    }

    /// Error with extra context after the hardware ID, e.g.
    /// `... for hardware ID: 6, subcategory ID: 1`.
    pub fn error_with(
        message: impl Into<String>,
        hardware_id: i32,
        context: impl AsRef<str>,
    ) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: format!(
                "{} for hardware ID: {}, {}",
                message.into(),
                hardware_id,
                context.as_ref()
            ),
        }
    }

    /// Warning with extra context after the hardware ID.
    pub fn warning_with(
        message: impl Into<String>,
        hardware_id: i32,
        context: impl AsRef<str>,
    ) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "{} for hardware ID: {}, {}",
                message.into(),
                hardware_id,
                context.as_ref()
            ),
        }
    }

    /// Diagnostic whose message is already fully formatted.
    pub fn raw(severity: Severity, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// True when any diagnostic in the slice is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_severity_prefix() {
        let diag = Diagnostic::error("Base hazard rate is 0.0 when calculating relay", 6);
        assert_eq!(
            diag.to_string(),
            "ERROR: Base hazard rate is 0.0 when calculating relay for hardware ID: 6"
        );
    }

    #[test]
    fn warning_is_not_error() {
        let diag = Diagnostic::warning("Rated current is 0.0", 3);
        assert!(!diag.is_error());
        assert!(diag.to_string().starts_with("WARNING: "));
        assert!(has_errors(&[diag, Diagnostic::error("x", 1)]));
    }
}

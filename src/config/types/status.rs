//! Field status types for config validation.
//!
//! Used to tell users when they set a field that carries a special
//! status (experimental, not_implemented, deprecated).

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    /// Get status label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Check field status and report diagnostics
///
/// Called by generated `validate_field_status` methods when a field
/// with special status differs from its default value
pub fn check_field_status(
    field_path: &'static str,
    status: FieldStatus,
    diag: &mut ConfigDiagnostics,
) {
    let path = FieldPath::new(field_path);

    match status {
        FieldStatus::NotImplemented => {
            diag.error_with_hint(
                path,
                format!("field is {} yet", status.label()),
                "remove this field",
            );
        }
        FieldStatus::Deprecated => {
            diag.warn(
                path,
                "field is deprecated and will be removed in a future version",
            );
        }
        FieldStatus::Experimental => {
            diag.hint(
                path,
                "experimental option, generated links may not work everywhere",
            );
        }
    }
}

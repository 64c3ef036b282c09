//! Configuration utility types.
//!
//! | Module   | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `error`  | Error type and collected diagnostics      |
//! | `field`  | Dotted field paths used in diagnostics    |
//! | `status` | Experimental/deprecated field reporting   |

mod error;
mod field;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use status::{FieldStatus, check_field_status};

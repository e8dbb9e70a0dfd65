pub mod errors;
pub mod language;
pub mod types;

pub use errors::{Error, Result};
pub use language::Language;
pub use types::{CompletionEntry, Diagnostic, Marker, Report, Severity};

use thiserror::Error;

/// Library-level error type.
///
/// Format failures of individual fields are not errors; they live in
/// `FieldErrorState`. This enum covers refused exports, malformed snapshots
/// and the I/O around writing artifacts.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Export blocked: {error_count} field(s) fail validation")]
    ExportBlocked { error_count: usize },

    #[error("Collection holds {len} entries, at most {capacity} allowed")]
    OverCapacity { len: usize, capacity: usize },

    #[error("Collection must hold at least one entry")]
    EmptyCollection,

    #[error("Unknown page format: {0}")]
    UnknownPageFormat(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Resume form core: field validation, bounded entry collections, the
// submission gate, and a deterministic paginated renderer with export.

pub mod config;
pub mod errors;
pub mod export;
pub mod layout;
pub mod models;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod validation;

pub use config::Config;
pub use errors::FormError;
pub use export::{export_document, DocumentEncoder, ExportArtifact, JsonEncoder, TextEncoder};
pub use models::{EntryKind, Resume, ScalarField, SkillField};
pub use render::{render, RenderedDocument};
pub use session::{FormSession, Theme};
pub use validation::{is_submittable, GateVerdict, ValidatorKind};

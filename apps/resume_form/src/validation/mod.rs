// Field validators, the error tracker built on them, and the submission gate.

pub mod gate;
pub mod rules;
pub mod tracker;

pub use gate::{evaluate, is_submittable, GateVerdict};
pub use rules::{FormatError, ValidatorKind};
pub use tracker::{derive_errors, FieldErrorState};

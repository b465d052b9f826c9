//! Submission Gate: decides whether the current resume may be exported.
//!
//! The tracked error state alone is not trusted: a value assigned without going
//! through a change handler never reaches it. The gate therefore also runs the
//! full reduction over the current values.

use serde::{Deserialize, Serialize};

use crate::models::Resume;
use crate::validation::tracker::{derive_errors, FieldErrorState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GateVerdict {
    Open,
    Closed { error_count: usize },
}

impl GateVerdict {
    pub fn is_open(self) -> bool {
        matches!(self, GateVerdict::Open)
    }
}

/// Evaluates the gate without touching either input.
///
/// `error_count` counts the union of tracked and freshly derived errors.
pub fn evaluate(resume: &Resume, tracked: &FieldErrorState) -> GateVerdict {
    let fresh = derive_errors(resume);
    if tracked.is_empty() && fresh.is_empty() {
        GateVerdict::Open
    } else {
        GateVerdict::Closed {
            error_count: fresh.union(tracked).len(),
        }
    }
}

pub fn is_submittable(resume: &Resume, tracked: &FieldErrorState) -> bool {
    evaluate(resume, tracked).is_open()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceField, ProjectField, ScalarField};

    #[test]
    fn test_empty_resume_is_submittable() {
        let resume = Resume::default();
        assert!(is_submittable(&resume, &FieldErrorState::default()));
        assert_eq!(
            evaluate(&resume, &FieldErrorState::default()),
            GateVerdict::Open
        );
    }

    #[test]
    fn test_untracked_invalid_value_closes_gate() {
        let mut resume = Resume::default();
        resume.profile.secondary_percentage = "150".to_string();
        let tracked = FieldErrorState::default();
        assert!(!is_submittable(&resume, &tracked));
        assert_eq!(
            evaluate(&resume, &tracked),
            GateVerdict::Closed { error_count: 1 }
        );
    }

    #[test]
    fn test_stale_tracked_error_closes_gate() {
        let resume = Resume::default();
        let mut tracked = FieldErrorState::default();
        tracked.record_scalar(ScalarField::Email, "not-an-email");
        assert!(!is_submittable(&resume, &tracked));
    }

    #[test]
    fn test_entry_errors_close_gate() {
        let mut resume = Resume::default();
        resume.projects.update(0, ProjectField::Year, "23");
        resume
            .experience
            .update(0, ExperienceField::Duration, "Jan 2022 - Present");
        assert_eq!(
            evaluate(&resume, &FieldErrorState::default()),
            GateVerdict::Closed { error_count: 1 }
        );

        resume.projects.update(0, ProjectField::Year, "2023");
        assert!(is_submittable(&resume, &FieldErrorState::default()));
    }

    #[test]
    fn test_overlapping_errors_counted_once() {
        let mut resume = Resume::default();
        resume.profile.phone = "abc".to_string();
        let tracked = derive_errors(&resume);
        assert_eq!(
            evaluate(&resume, &tracked),
            GateVerdict::Closed { error_count: 1 }
        );
    }
}

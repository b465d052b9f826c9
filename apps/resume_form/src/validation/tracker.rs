//! Error Tracker: derives inline error messages from the current field values.
//!
//! One reduction, [`derive_errors`], applies every validator to a whole resume.
//! The incremental `record_*` methods apply the same rule to a single field as it
//! changes, so the two paths can never disagree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Entry, ExperienceEntry, ProjectEntry, Resume, ScalarField};
use crate::validation::rules::ValidatorKind;

/// Active format errors, keyed by field (scalars) or by list index (entries).
///
/// A key is present only while its value is non-empty and fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorState {
    scalar: BTreeMap<ScalarField, String>,
    project_years: BTreeMap<usize, String>,
    experience_durations: BTreeMap<usize, String>,
}

impl FieldErrorState {
    pub fn scalar(&self, field: ScalarField) -> Option<&str> {
        self.scalar.get(&field).map(String::as_str)
    }

    pub fn project_year(&self, index: usize) -> Option<&str> {
        self.project_years.get(&index).map(String::as_str)
    }

    pub fn experience_duration(&self, index: usize) -> Option<&str> {
        self.experience_durations.get(&index).map(String::as_str)
    }

    pub fn scalar_errors(&self) -> &BTreeMap<ScalarField, String> {
        &self.scalar
    }

    pub fn project_year_errors(&self) -> &BTreeMap<usize, String> {
        &self.project_years
    }

    pub fn experience_duration_errors(&self) -> &BTreeMap<usize, String> {
        &self.experience_durations
    }

    pub fn is_empty(&self) -> bool {
        self.scalar.is_empty() && self.project_years.is_empty() && self.experience_durations.is_empty()
    }

    /// Total number of active errors across all three maps.
    pub fn len(&self) -> usize {
        self.scalar.len() + self.project_years.len() + self.experience_durations.len()
    }

    /// Re-checks one scalar field. Free-text fields never hold an error.
    pub fn record_scalar(&mut self, field: ScalarField, value: &str) {
        match field.validator().and_then(|kind| check(kind, value)) {
            Some(message) => {
                self.scalar.insert(field, message);
            }
            None => {
                self.scalar.remove(&field);
            }
        }
    }

    pub fn record_project(&mut self, index: usize, entry: &ProjectEntry) {
        record_indexed(&mut self.project_years, index, entry);
    }

    pub fn record_experience(&mut self, index: usize, entry: &ExperienceEntry) {
        record_indexed(&mut self.experience_durations, index, entry);
    }

    /// Keys present in either state, preferring messages from `self`.
    pub fn union(&self, other: &FieldErrorState) -> FieldErrorState {
        let mut merged = other.clone();
        merged.scalar.extend(self.scalar.clone());
        merged.project_years.extend(self.project_years.clone());
        merged
            .experience_durations
            .extend(self.experience_durations.clone());
        merged
    }
}

/// Applies `kind` to `value`, returning the inline message on failure.
pub fn check(kind: ValidatorKind, value: &str) -> Option<String> {
    kind.verify(value).err().map(|e| e.to_string())
}

/// Recomputes the full error state from scratch.
pub fn derive_errors(resume: &Resume) -> FieldErrorState {
    let mut state = FieldErrorState::default();
    for field in ScalarField::ALL {
        state.record_scalar(field, resume.profile.get(field));
    }
    for (index, entry) in resume.projects.iter().enumerate() {
        state.record_project(index, entry);
    }
    for (index, entry) in resume.experience.iter().enumerate() {
        state.record_experience(index, entry);
    }
    state
}

/// Checks every validated field of `entry` and updates the per-index map.
///
/// The first failing field's message wins; one message per index.
fn record_indexed<T: Entry>(map: &mut BTreeMap<usize, String>, index: usize, entry: &T) {
    let message = T::VALIDATED_FIELDS
        .iter()
        .find_map(|&field| T::validator(field).and_then(|kind| check(kind, entry.get(field))));
    match message {
        Some(message) => {
            map.insert(index, message);
        }
        None => {
            map.remove(&index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, ExperienceField, ProjectField};

    #[test]
    fn test_fresh_resume_has_no_errors() {
        let state = derive_errors(&Resume::default());
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_record_scalar_sets_and_clears() {
        let mut state = FieldErrorState::default();
        state.record_scalar(ScalarField::Phone, "abc");
        assert_eq!(
            state.scalar(ScalarField::Phone),
            Some(ValidatorKind::Phone.message())
        );

        state.record_scalar(ScalarField::Phone, "+91-9876543210");
        assert_eq!(state.scalar(ScalarField::Phone), None);

        state.record_scalar(ScalarField::Phone, "abc");
        state.record_scalar(ScalarField::Phone, "");
        assert!(state.is_empty(), "clearing a field must drop its error");
    }

    #[test]
    fn test_free_text_never_errors() {
        let mut state = FieldErrorState::default();
        state.record_scalar(ScalarField::Name, "@@@ not an email @@@");
        state.record_scalar(ScalarField::Institution, "123!!");
        assert!(state.is_empty());
    }

    #[test]
    fn test_indexed_errors_are_independent() {
        let mut resume = Resume::default();
        resume.projects.push_default();
        resume.projects.update(0, ProjectField::Year, "23");
        resume.projects.update(1, ProjectField::Year, "2023");
        resume.projects.update(1, ProjectField::Description, "not validated 23");

        let state = derive_errors(&resume);
        assert_eq!(state.project_year(0), Some(ValidatorKind::Year.message()));
        assert_eq!(state.project_year(1), None);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_experience_duration_keyed_by_index() {
        let mut resume = Resume::default();
        resume.experience.push_default();
        resume.experience.push_default();
        resume
            .experience
            .update(2, ExperienceField::Duration, "2021 - 2022");

        let state = derive_errors(&resume);
        assert_eq!(state.experience_duration(0), None);
        assert_eq!(
            state.experience_duration(2),
            Some(ValidatorKind::Duration.message())
        );
        assert_eq!(resume.experience.len(), EntryKind::Experience.capacity());
    }

    #[test]
    fn test_incremental_matches_full_reduction() {
        let mut resume = Resume::default();
        let mut tracked = FieldErrorState::default();

        resume.profile.set(ScalarField::Email, "bad@");
        tracked.record_scalar(ScalarField::Email, resume.profile.get(ScalarField::Email));
        resume.profile.set(ScalarField::Grade, "8.5/10.0");
        tracked.record_scalar(ScalarField::Grade, resume.profile.get(ScalarField::Grade));
        resume.experience.update(0, ExperienceField::Duration, "Jan 2022 - Now");
        tracked.record_experience(0, resume.experience.get(0).unwrap());

        assert_eq!(tracked, derive_errors(&resume));
    }

    #[test]
    fn test_union_keeps_keys_from_both() {
        let mut a = FieldErrorState::default();
        a.record_scalar(ScalarField::Email, "x");
        let mut b = FieldErrorState::default();
        b.record_scalar(ScalarField::SecondaryPercentage, "150");
        let merged = a.union(&b);
        assert_eq!(merged.len(), 2);
        assert!(merged.scalar(ScalarField::Email).is_some());
        assert!(merged.scalar(ScalarField::SecondaryPercentage).is_some());
    }

    #[test]
    fn test_error_maps_are_ordered_by_key() {
        let mut resume = Resume::default();
        resume.profile.set(ScalarField::Email, "bad@");
        resume.profile.set(ScalarField::Phone, "abc");
        resume.projects.push_default();
        resume.projects.update(1, ProjectField::Year, "99");
        resume.experience.update(0, ExperienceField::Duration, "soon");

        let state = derive_errors(&resume);
        let scalar_keys: Vec<_> = state.scalar_errors().keys().copied().collect();
        assert_eq!(scalar_keys, vec![ScalarField::Phone, ScalarField::Email]);
        assert_eq!(state.project_year_errors().keys().collect::<Vec<_>>(), vec![&1]);
        assert_eq!(state.experience_duration_errors().len(), 1);
    }
}

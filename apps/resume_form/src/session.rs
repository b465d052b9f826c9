//! Form session: the single owner of the resume being edited.
//!
//! UI events arrive as method calls. Each change handler mutates the model in
//! place and re-checks only the field it touched; `is_submittable` and `export`
//! always re-validate everything.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::FormError;
use crate::export::{export_document, DocumentEncoder, ExportArtifact};
use crate::layout::{default_page_config, PageConfig};
use crate::models::{EntryKind, ExperienceField, ProjectField, Resume, ScalarField, SkillField};
use crate::render::{render_resume, RenderedDocument};
use crate::validation::{derive_errors, evaluate, FieldErrorState, GateVerdict};

/// Presentation-only colour scheme; not part of the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSession {
    resume: Resume,
    errors: FieldErrorState,
    theme: Theme,
    page_config: PageConfig,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Empty form: one blank project, one blank experience entry, A4 pages.
    pub fn new() -> Self {
        Self::with_page_config(PageConfig::default())
    }

    pub fn with_page_config(page_config: PageConfig) -> Self {
        Self {
            resume: Resume::default(),
            errors: FieldErrorState::default(),
            theme: Theme::default(),
            page_config,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_page_config(default_page_config(config.page_format))
    }

    /// Loads an existing resume; the error tracker starts from a full derivation.
    pub fn from_resume(resume: Resume, page_config: PageConfig) -> Self {
        Self {
            errors: derive_errors(&resume),
            resume,
            theme: Theme::default(),
            page_config,
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    /// Direct access to the model. Edits made here skip the error tracker;
    /// the gate still sees them.
    pub fn resume_mut(&mut self) -> &mut Resume {
        &mut self.resume
    }

    pub fn errors(&self) -> &FieldErrorState {
        &self.errors
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.page_config
    }

    // ── change handlers ─────────────────────────────────────────────────────

    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        self.resume.profile.set(field, value);
        self.errors.record_scalar(field, self.resume.profile.get(field));
        debug!(
            field = field.key(),
            valid = self.errors.scalar(field).is_none(),
            "Field changed"
        );
    }

    pub fn set_skill(&mut self, field: SkillField, value: impl Into<String>) {
        self.resume.skills.set(field, value);
        debug!(field = ?field, "Skill changed");
    }

    pub fn can_add(&self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Project => !self.resume.projects.is_full(),
            EntryKind::Experience => !self.resume.experience.is_full(),
        }
    }

    /// Appends a blank entry. At capacity nothing changes and false is returned.
    pub fn add_entry(&mut self, kind: EntryKind) -> bool {
        let added = match kind {
            EntryKind::Project => self.resume.projects.push_default(),
            EntryKind::Experience => self.resume.experience.push_default(),
        };
        if added {
            debug!(kind = ?kind, "Entry added");
        } else {
            debug!(kind = ?kind, capacity = kind.capacity(), "Entry list full; add ignored");
        }
        added
    }

    /// Replaces one project field. Returns false for an out-of-range index.
    pub fn update_project(
        &mut self,
        index: usize,
        field: ProjectField,
        value: impl Into<String>,
    ) -> bool {
        if !self.resume.projects.update(index, field, value) {
            return false;
        }
        if let Some(entry) = self.resume.projects.get(index) {
            self.errors.record_project(index, entry);
        }
        debug!(index, field = ?field, "Project changed");
        true
    }

    /// Replaces one experience field. Returns false for an out-of-range index.
    pub fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        if !self.resume.experience.update(index, field, value) {
            return false;
        }
        if let Some(entry) = self.resume.experience.get(index) {
            self.errors.record_experience(index, entry);
        }
        debug!(index, field = ?field, "Experience changed");
        true
    }

    /// Replaces the tracked error state with a fresh full derivation.
    pub fn revalidate(&mut self) {
        self.errors = derive_errors(&self.resume);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ── gate, render, export ────────────────────────────────────────────────

    pub fn gate(&self) -> GateVerdict {
        evaluate(&self.resume, &self.errors)
    }

    pub fn is_submittable(&self) -> bool {
        self.gate().is_open()
    }

    pub fn render(&self) -> RenderedDocument {
        render_resume(&self.resume, &self.page_config)
    }

    /// Renders and encodes the current resume, if the gate is open.
    pub fn export(&self, encoder: &dyn DocumentEncoder) -> Result<ExportArtifact, FormError> {
        if let GateVerdict::Closed { error_count } = self.gate() {
            warn!(error_count, "Export refused: fields fail validation");
            return Err(FormError::ExportBlocked { error_count });
        }
        export_document(&self.resume.profile.name, &self.render(), encoder)
    }
}

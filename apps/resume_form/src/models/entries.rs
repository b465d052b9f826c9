use serde::{Deserialize, Serialize};

use crate::models::collection::Entry;
use crate::validation::rules::ValidatorKind;

/// Which repeatable collection an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Project,
    Experience,
}

impl EntryKind {
    pub fn capacity(self) -> usize {
        match self {
            EntryKind::Project => ProjectEntry::CAPACITY,
            EntryKind::Experience => ExperienceEntry::CAPACITY,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Year,
    TechStack,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub year: String,
    pub tech_stack: String,
    pub description: String,
}

impl Entry for ProjectEntry {
    const CAPACITY: usize = 5;
    type Field = ProjectField;
    const VALIDATED_FIELDS: &'static [ProjectField] = &[ProjectField::Year];

    fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Name => &self.name,
            ProjectField::Year => &self.year,
            ProjectField::TechStack => &self.tech_stack,
            ProjectField::Description => &self.description,
        }
    }

    fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Name => self.name = value,
            ProjectField::Year => self.year = value,
            ProjectField::TechStack => self.tech_stack = value,
            ProjectField::Description => self.description = value,
        }
    }

    fn validator(field: ProjectField) -> Option<ValidatorKind> {
        match field {
            ProjectField::Year => Some(ValidatorKind::Year),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    CompanyName,
    JobTitle,
    Duration,
    Description,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company_name: String,
    pub job_title: String,
    pub duration: String,
    pub description: String,
}

impl Entry for ExperienceEntry {
    const CAPACITY: usize = 3;
    type Field = ExperienceField;
    const VALIDATED_FIELDS: &'static [ExperienceField] = &[ExperienceField::Duration];

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::CompanyName => &self.company_name,
            ExperienceField::JobTitle => &self.job_title,
            ExperienceField::Duration => &self.duration,
            ExperienceField::Description => &self.description,
        }
    }

    fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::CompanyName => self.company_name = value,
            ExperienceField::JobTitle => self.job_title = value,
            ExperienceField::Duration => self.duration = value,
            ExperienceField::Description => self.description = value,
        }
    }

    fn validator(field: ExperienceField) -> Option<ValidatorKind> {
        match field {
            ExperienceField::Duration => Some(ValidatorKind::Duration),
            _ => None,
        }
    }
}

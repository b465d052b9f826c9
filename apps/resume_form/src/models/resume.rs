use serde::{Deserialize, Serialize};

use crate::models::collection::BoundedList;
use crate::models::entries::{ExperienceEntry, ProjectEntry};
use crate::validation::rules::ValidatorKind;

// ────────────────────────────────────────────────────────────────────────────
// Field identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The single-valued fields of the profile, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Name,
    Location,
    Phone,
    Email,
    LinkedIn,
    Institution,
    Degree,
    Course,
    Grade,
    SecondarySchool,
    SecondaryPercentage,
}

impl ScalarField {
    pub const ALL: [ScalarField; 11] = [
        ScalarField::Name,
        ScalarField::Location,
        ScalarField::Phone,
        ScalarField::Email,
        ScalarField::LinkedIn,
        ScalarField::Institution,
        ScalarField::Degree,
        ScalarField::Course,
        ScalarField::Grade,
        ScalarField::SecondarySchool,
        ScalarField::SecondaryPercentage,
    ];

    /// Stable key used in logs and serialized error maps.
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Location => "location",
            ScalarField::Phone => "phone",
            ScalarField::Email => "email",
            ScalarField::LinkedIn => "linked_in",
            ScalarField::Institution => "institution",
            ScalarField::Degree => "degree",
            ScalarField::Course => "course",
            ScalarField::Grade => "grade",
            ScalarField::SecondarySchool => "secondary_school",
            ScalarField::SecondaryPercentage => "secondary_percentage",
        }
    }

    /// Input hint shown in the empty form control.
    pub fn hint(self) -> &'static str {
        match self {
            ScalarField::Name => "Enter name",
            ScalarField::Location => "Enter location",
            ScalarField::Phone => "Enter phone number",
            ScalarField::Email => "Enter email",
            ScalarField::LinkedIn => "Enter LinkedIn profile URL",
            ScalarField::Institution => "Enter college name",
            ScalarField::Degree => "Enter degree (e.g., B.Tech)",
            ScalarField::Course => "Enter course (e.g., Computer Science)",
            ScalarField::Grade => "Enter CGPA (e.g., 8.5)",
            ScalarField::SecondarySchool => "Enter 12th/PUC equivalent name",
            ScalarField::SecondaryPercentage => "Enter 12th/PUC percentage (e.g., 90)",
        }
    }

    /// The format rule for this field; `None` for free text.
    pub fn validator(self) -> Option<ValidatorKind> {
        match self {
            ScalarField::Phone => Some(ValidatorKind::Phone),
            ScalarField::Email => Some(ValidatorKind::Email),
            ScalarField::LinkedIn => Some(ValidatorKind::LinkedIn),
            ScalarField::Grade => Some(ValidatorKind::Grade),
            ScalarField::SecondaryPercentage => Some(ValidatorKind::Percentage),
            ScalarField::Name
            | ScalarField::Location
            | ScalarField::Institution
            | ScalarField::Degree
            | ScalarField::Course
            | ScalarField::SecondarySchool => None,
        }
    }
}

/// Free-text skill lines. Never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillField {
    ProgrammingLanguages,
    Services,
    SoftSkills,
}

impl SkillField {
    pub fn hint(self) -> &'static str {
        match self {
            SkillField::ProgrammingLanguages => {
                "Programming Languages (e.g., JavaScript, Python, C++)"
            }
            SkillField::Services => "Services (e.g., AWS, Azure, Google Cloud, Docker)",
            SkillField::SoftSkills => "Soft Skills (e.g., Communication, Teamwork)",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile, skills, aggregate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeProfile {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub institution: String,
    pub degree: String,
    pub course: String,
    pub grade: String,
    pub secondary_school: String,
    pub secondary_percentage: String,
}

impl ResumeProfile {
    pub fn get(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Location => &self.location,
            ScalarField::Phone => &self.phone,
            ScalarField::Email => &self.email,
            ScalarField::LinkedIn => &self.linkedin,
            ScalarField::Institution => &self.institution,
            ScalarField::Degree => &self.degree,
            ScalarField::Course => &self.course,
            ScalarField::Grade => &self.grade,
            ScalarField::SecondarySchool => &self.secondary_school,
            ScalarField::SecondaryPercentage => &self.secondary_percentage,
        }
    }

    pub fn set(&mut self, field: ScalarField, value: impl Into<String>) {
        let slot = match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Location => &mut self.location,
            ScalarField::Phone => &mut self.phone,
            ScalarField::Email => &mut self.email,
            ScalarField::LinkedIn => &mut self.linkedin,
            ScalarField::Institution => &mut self.institution,
            ScalarField::Degree => &mut self.degree,
            ScalarField::Course => &mut self.course,
            ScalarField::Grade => &mut self.grade,
            ScalarField::SecondarySchool => &mut self.secondary_school,
            ScalarField::SecondaryPercentage => &mut self.secondary_percentage,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSet {
    pub programming_languages: String,
    pub services: String,
    pub soft_skills: String,
}

impl SkillSet {
    pub fn get(&self, field: SkillField) -> &str {
        match field {
            SkillField::ProgrammingLanguages => &self.programming_languages,
            SkillField::Services => &self.services,
            SkillField::SoftSkills => &self.soft_skills,
        }
    }

    pub fn set(&mut self, field: SkillField, value: impl Into<String>) {
        let slot = match field {
            SkillField::ProgrammingLanguages => &mut self.programming_languages,
            SkillField::Services => &mut self.services,
            SkillField::SoftSkills => &mut self.soft_skills,
        };
        *slot = value.into();
    }
}

/// Everything the candidate has entered, in one place.
///
/// A fresh resume holds one empty project and one empty experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub profile: ResumeProfile,
    pub projects: BoundedList<ProjectEntry>,
    pub experience: BoundedList<ExperienceEntry>,
    #[serde(default)]
    pub skills: SkillSet,
}

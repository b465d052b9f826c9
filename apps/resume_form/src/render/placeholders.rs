// Fallback text printed in place of empty fields, and the fixed labels around values.

use crate::models::{ExperienceField, ProjectField, ScalarField, SkillField};

pub const NO_PROJECTS: &str = "No projects listed";
pub const NO_EXPERIENCE: &str = "No experience listed";

pub const GRADE_LABEL: &str = "CGPA: ";
pub const PERCENTAGE_LABEL: &str = "Upper Secondary Graduation - Percentage: ";
/// Printed for an empty percentage; a filled one gets a `%` suffix instead.
pub const PERCENTAGE_PLACEHOLDER: &str = "0.0%";

pub fn scalar(field: ScalarField) -> &'static str {
    match field {
        ScalarField::Name => "YOUR NAME",
        ScalarField::Location => "City, Country",
        ScalarField::Phone => "+91-1234567890",
        ScalarField::Email => "your.email@example.com",
        ScalarField::LinkedIn => "linkedin.com/in/yourprofile",
        ScalarField::Institution => "Your University Name",
        ScalarField::Degree => "Degree Name",
        ScalarField::Course => "Course Name",
        ScalarField::Grade => "0.0",
        ScalarField::SecondarySchool => "Your 12th/PUC School",
        ScalarField::SecondaryPercentage => PERCENTAGE_PLACEHOLDER,
    }
}

pub fn project(field: ProjectField) -> &'static str {
    match field {
        ProjectField::Name => "Project Title",
        ProjectField::Year => "Year",
        ProjectField::TechStack => "Tech Stack: React, Node.js",
        ProjectField::Description => "Brief description of project.",
    }
}

pub fn experience(field: ExperienceField) -> &'static str {
    match field {
        ExperienceField::CompanyName => "Company Name",
        ExperienceField::JobTitle => "Job Title",
        ExperienceField::Duration => "Mon YYYY - Present",
        ExperienceField::Description => "Brief description of your role and impact.",
    }
}

pub fn skill(field: SkillField) -> &'static str {
    match field {
        SkillField::ProgrammingLanguages => "JavaScript, Python, C++",
        SkillField::Services => "AWS, Docker, Git",
        SkillField::SoftSkills => "Communication, Teamwork, Problem Solving",
    }
}

pub fn skill_label(field: SkillField) -> &'static str {
    match field {
        SkillField::ProgrammingLanguages => "Programming Languages: ",
        SkillField::Services => "Services/Tools: ",
        SkillField::SoftSkills => "Soft Skills: ",
    }
}

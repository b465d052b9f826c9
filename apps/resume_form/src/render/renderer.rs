//! Document Renderer: maps the resume entity to a paginated layout tree.
//!
//! Pure and deterministic: no I/O, no clocks, inputs are only borrowed. Every
//! empty field falls back to a fixed placeholder; invalid values are printed
//! as entered.

use tracing::debug;

use crate::layout::{analyze_document, paginate, PageConfig};
use crate::models::{
    ExperienceEntry, ExperienceField, ProjectEntry, ProjectField, Resume, ResumeProfile,
    ScalarField, SkillField, SkillSet,
};
use crate::render::document::{
    Block, Node, RenderedDocument, Section, SectionKind, TextRun, TextStyle,
};
use crate::render::placeholders;

const CONTACT_SEPARATOR: &str = " | ";
const DEGREE_SEPARATOR: &str = ", ";

/// Renders onto A4 pages.
pub fn render(
    profile: &ResumeProfile,
    projects: &[ProjectEntry],
    experience: &[ExperienceEntry],
    skills: &SkillSet,
) -> RenderedDocument {
    render_with_config(profile, projects, experience, skills, &PageConfig::default())
}

pub fn render_resume(resume: &Resume, config: &PageConfig) -> RenderedDocument {
    render_with_config(
        &resume.profile,
        resume.projects.as_slice(),
        resume.experience.as_slice(),
        &resume.skills,
        config,
    )
}

pub fn render_with_config(
    profile: &ResumeProfile,
    projects: &[ProjectEntry],
    experience: &[ExperienceEntry],
    skills: &SkillSet,
    config: &PageConfig,
) -> RenderedDocument {
    let sections = build_sections(profile, projects, experience, skills);
    let document = RenderedDocument {
        page_format: config.format,
        pages: paginate(sections, config),
    };

    for analysis in analyze_document(&document, config) {
        debug!(
            page = analysis.page_number,
            fill = analysis.fill_fraction,
            verdict = ?analysis.verdict,
            "Page fill"
        );
    }

    document
}

/// All sections in fixed order, before pagination.
pub fn build_sections(
    profile: &ResumeProfile,
    projects: &[ProjectEntry],
    experience: &[ExperienceEntry],
    skills: &SkillSet,
) -> Vec<Section> {
    SectionKind::ORDER
        .into_iter()
        .map(|kind| {
            let blocks = match kind {
                SectionKind::Header => header_blocks(profile),
                SectionKind::Education => education_blocks(profile),
                SectionKind::Experience => experience_blocks(experience),
                SectionKind::Projects => project_blocks(projects),
                SectionKind::Skills => skill_blocks(skills),
            };
            Section { kind, blocks }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn header_blocks(profile: &ResumeProfile) -> Vec<Block> {
    let contact = [ScalarField::Phone, ScalarField::Email, ScalarField::LinkedIn]
        .into_iter()
        .map(|field| scalar_run(profile, field, TextStyle::Contact))
        .collect();

    vec![
        Block::new(vec![Node::text(scalar_run(profile, ScalarField::Name, TextStyle::Name))]),
        Block::new(vec![Node::text(scalar_run(
            profile,
            ScalarField::Location,
            TextStyle::Location,
        ))]),
        Block::new(vec![Node::inline(contact, CONTACT_SEPARATOR), Node::Spacer]),
    ]
}

/// One primary-institution block and one secondary-institution block, always.
fn education_blocks(profile: &ResumeProfile) -> Vec<Block> {
    let primary = Block::new(vec![
        Node::text(scalar_run(profile, ScalarField::Institution, TextStyle::Strong)),
        Node::inline(
            vec![
                scalar_run(profile, ScalarField::Degree, TextStyle::Body),
                scalar_run(profile, ScalarField::Course, TextStyle::Body),
            ],
            DEGREE_SEPARATOR,
        ),
        Node::text(
            scalar_run(profile, ScalarField::Grade, TextStyle::Strong)
                .with_label(placeholders::GRADE_LABEL),
        ),
    ]);

    let percentage = match profile.secondary_percentage.as_str() {
        "" => TextRun::placeholder(placeholders::PERCENTAGE_PLACEHOLDER, TextStyle::Strong),
        value => TextRun::new(format!("{value}%"), TextStyle::Strong),
    };
    let secondary = Block::new(vec![
        Node::text(scalar_run(profile, ScalarField::SecondarySchool, TextStyle::Strong)),
        Node::text(percentage.with_label(placeholders::PERCENTAGE_LABEL)),
        Node::Spacer,
    ]);

    vec![primary, secondary]
}

fn experience_blocks(experience: &[ExperienceEntry]) -> Vec<Block> {
    if experience.is_empty() {
        return vec![none_listed(placeholders::NO_EXPERIENCE)];
    }

    experience
        .iter()
        .map(|entry| {
            let run = |field: ExperienceField, value: &str, style| {
                value_or_placeholder(value, placeholders::experience(field), style)
            };
            Block::new(vec![
                Node::space_between(vec![
                    run(ExperienceField::CompanyName, &entry.company_name, TextStyle::Strong),
                    run(ExperienceField::Duration, &entry.duration, TextStyle::Caption),
                ]),
                Node::text(run(ExperienceField::JobTitle, &entry.job_title, TextStyle::Body)),
                Node::text(run(ExperienceField::Description, &entry.description, TextStyle::Body)),
                Node::Spacer,
            ])
        })
        .collect()
}

fn project_blocks(projects: &[ProjectEntry]) -> Vec<Block> {
    if projects.is_empty() {
        return vec![none_listed(placeholders::NO_PROJECTS)];
    }

    projects
        .iter()
        .map(|entry| {
            let run = |field: ProjectField, value: &str, style| {
                value_or_placeholder(value, placeholders::project(field), style)
            };
            Block::new(vec![
                Node::space_between(vec![
                    run(ProjectField::Name, &entry.name, TextStyle::Strong),
                    run(ProjectField::Year, &entry.year, TextStyle::Caption),
                ]),
                Node::text(run(ProjectField::TechStack, &entry.tech_stack, TextStyle::Body)),
                Node::text(run(ProjectField::Description, &entry.description, TextStyle::Body)),
                Node::Spacer,
            ])
        })
        .collect()
}

fn skill_blocks(skills: &SkillSet) -> Vec<Block> {
    let lines = [
        SkillField::ProgrammingLanguages,
        SkillField::Services,
        SkillField::SoftSkills,
    ]
    .into_iter()
    .map(|field| {
        let run = value_or_placeholder(skills.get(field), placeholders::skill(field), TextStyle::Skill)
            .with_label(placeholders::skill_label(field));
        Node::text(run)
    })
    .collect();

    vec![Block::new(lines)]
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn scalar_run(profile: &ResumeProfile, field: ScalarField, style: TextStyle) -> TextRun {
    value_or_placeholder(profile.get(field), placeholders::scalar(field), style)
}

fn value_or_placeholder(value: &str, placeholder: &str, style: TextStyle) -> TextRun {
    if value.is_empty() {
        TextRun::placeholder(placeholder, style)
    } else {
        TextRun::new(value, style)
    }
}

fn none_listed(text: &str) -> Block {
    Block::new(vec![Node::text(TextRun::placeholder(text, TextStyle::Body)), Node::Spacer])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, PageFormat};

    fn empty_inputs() -> (ResumeProfile, Vec<ProjectEntry>, Vec<ExperienceEntry>, SkillSet) {
        (
            ResumeProfile::default(),
            vec![ProjectEntry::default()],
            vec![ExperienceEntry::default()],
            SkillSet::default(),
        )
    }

    fn values(doc: &RenderedDocument) -> Vec<String> {
        doc.text_runs().map(|r| r.value.clone()).collect()
    }

    #[test]
    fn test_empty_resume_renders_every_placeholder() {
        let (profile, projects, experience, skills) = empty_inputs();
        let doc = render(&profile, &projects, &experience, &skills);

        assert!(doc.text_runs().all(|r| r.placeholder), "every run should be a fallback");
        assert_eq!(
            values(&doc),
            vec![
                "YOUR NAME",
                "City, Country",
                "+91-1234567890",
                "your.email@example.com",
                "linkedin.com/in/yourprofile",
                "Your University Name",
                "Degree Name",
                "Course Name",
                "0.0",
                "Your 12th/PUC School",
                "0.0%",
                "Company Name",
                "Mon YYYY - Present",
                "Job Title",
                "Brief description of your role and impact.",
                "Project Title",
                "Year",
                "Tech Stack: React, Node.js",
                "Brief description of project.",
                "JavaScript, Python, C++",
                "AWS, Docker, Git",
                "Communication, Teamwork, Problem Solving",
            ]
        );
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let (profile, projects, experience, skills) = empty_inputs();
        let doc = render(&profile, &projects, &experience, &skills);
        assert_eq!(doc.section_order(), SectionKind::ORDER.to_vec());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page_format, PageFormat::A4);
    }

    #[test]
    fn test_render_is_idempotent() {
        let (mut profile, projects, experience, skills) = empty_inputs();
        profile.name = "Asha Rao".to_string();
        let first = render(&profile, &projects, &experience, &skills);
        let second = render(&profile, &projects, &experience, &skills);
        assert_eq!(first, second);
        assert_eq!(first.plain_text(), second.plain_text());
    }

    #[test]
    fn test_render_does_not_mutate_inputs() {
        let (mut profile, projects, experience, skills) = empty_inputs();
        profile.secondary_percentage = "91.5".to_string();
        let before = (profile.clone(), projects.clone(), experience.clone(), skills.clone());
        let _ = render(&profile, &projects, &experience, &skills);
        assert_eq!((profile, projects, experience, skills), before);
    }

    #[test]
    fn test_filled_values_replace_placeholders() {
        let (mut profile, _, _, mut skills) = empty_inputs();
        profile.name = "Asha Rao".to_string();
        profile.grade = "8.5/10.0".to_string();
        profile.secondary_percentage = "91.5".to_string();
        skills.services = "Kubernetes".to_string();

        let doc = render(&profile, &[ProjectEntry::default()], &[ExperienceEntry::default()], &skills);
        let runs: Vec<&TextRun> = doc.text_runs().collect();

        assert_eq!(runs[0].value, "Asha Rao");
        assert!(!runs[0].placeholder);
        let grade = runs.iter().find(|r| r.label.as_deref() == Some("CGPA: ")).unwrap();
        assert_eq!(grade.display_text(), "CGPA: 8.5/10.0");
        let pct = runs
            .iter()
            .find(|r| r.label.as_deref() == Some(placeholders::PERCENTAGE_LABEL))
            .unwrap();
        assert_eq!(pct.value, "91.5%");
        assert!(!pct.placeholder);
        let services = runs
            .iter()
            .find(|r| r.label.as_deref() == Some("Services/Tools: "))
            .unwrap();
        assert_eq!(services.value, "Kubernetes");
    }

    #[test]
    fn test_invalid_values_are_rendered_as_entered() {
        let project = ProjectEntry {
            name: "Parser".to_string(),
            year: "23".to_string(),
            ..ProjectEntry::default()
        };
        let job = ExperienceEntry {
            duration: "sometime".to_string(),
            ..ExperienceEntry::default()
        };
        let doc = render(&ResumeProfile::default(), &[project], &[job], &SkillSet::default());
        let vals = values(&doc);
        assert!(vals.contains(&"23".to_string()));
        assert!(vals.contains(&"sometime".to_string()));
    }

    #[test]
    fn test_empty_lists_render_none_listed() {
        let doc = render(&ResumeProfile::default(), &[], &[], &SkillSet::default());
        let vals = values(&doc);
        assert!(vals.contains(&placeholders::NO_PROJECTS.to_string()));
        assert!(vals.contains(&placeholders::NO_EXPERIENCE.to_string()));
        assert!(!vals.contains(&"Project Title".to_string()));
        assert_eq!(doc.section_order(), SectionKind::ORDER.to_vec());
    }

    #[test]
    fn test_entries_render_in_list_order() {
        let projects: Vec<ProjectEntry> = ["Alpha", "Beta", "Gamma"]
            .into_iter()
            .map(|name| ProjectEntry {
                name: name.to_string(),
                ..ProjectEntry::default()
            })
            .collect();
        let doc = render(&ResumeProfile::default(), &projects, &[ExperienceEntry::default()], &SkillSet::default());
        let names: Vec<String> = doc
            .text_runs()
            .filter(|r| r.style == TextStyle::Strong && ["Alpha", "Beta", "Gamma"].contains(&r.value.as_str()))
            .map(|r| r.value.clone())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_long_content_spills_onto_second_page() {
        let description = "Designed and shipped a feature end to end with careful testing. ".repeat(12);
        let projects: Vec<ProjectEntry> = (0..5)
            .map(|i| ProjectEntry {
                name: format!("Project {i}"),
                year: "2024".to_string(),
                tech_stack: "Rust".to_string(),
                description: description.clone(),
            })
            .collect();
        let experience: Vec<ExperienceEntry> = (0..3)
            .map(|i| ExperienceEntry {
                company_name: format!("Company {i}"),
                description: description.clone(),
                ..ExperienceEntry::default()
            })
            .collect();

        let config = default_page_config(PageFormat::A4);
        let doc = render_with_config(&ResumeProfile::default(), &projects, &experience, &SkillSet::default(), &config);
        assert!(doc.page_count() >= 2, "expected overflow, got {} page(s)", doc.page_count());
        assert_eq!(doc.section_order(), SectionKind::ORDER.to_vec());
        assert_eq!(doc.pages.last().unwrap().fragments.last().unwrap().kind, SectionKind::Skills);
    }

    #[test]
    fn test_plain_text_contains_headings_and_values() {
        let (profile, projects, experience, skills) = empty_inputs();
        let text = render(&profile, &projects, &experience, &skills).plain_text();
        assert!(text.starts_with("=== Page 1 ===\nYOUR NAME\n"));
        assert!(text.contains("\nEDUCATION\n---------\n"));
        assert!(text.contains("+91-1234567890 | your.email@example.com | linkedin.com/in/yourprofile"));
        assert!(text.contains("Degree Name, Course Name"));
        assert!(text.contains("Upper Secondary Graduation - Percentage: 0.0%"));
        assert!(text.contains("Soft Skills: Communication, Teamwork, Problem Solving"));
    }
}

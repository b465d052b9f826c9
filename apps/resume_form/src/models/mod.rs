pub mod collection;
pub mod entries;
pub mod resume;

pub use collection::{BoundedList, Entry};
pub use entries::{EntryKind, ExperienceEntry, ExperienceField, ProjectEntry, ProjectField};
pub use resume::{Resume, ResumeProfile, ScalarField, SkillField, SkillSet};
